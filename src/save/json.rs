use super::*;
use crate::survey::Survey;
use crate::table::FrontierTable;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;

fn write<T: Serialize>(value: &T, path: &Path) -> Result<(), FrontierError> {
    let mut file = BufWriter::new(std::fs::File::create(path)?);
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(())
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<T, FrontierError> {
    let file = BufReader::new(std::fs::File::open(path)?);
    Ok(serde_json::from_reader(file)?)
}

impl Disk for Survey {
    fn name() -> &'static str {
        "survey"
    }
    fn save(&self, path: &Path) -> Result<(), FrontierError> {
        write(self, path)?;
        log::info!("saved {} to {}", Self::name(), path.display());
        Ok(())
    }
    fn load(path: &Path) -> Result<Self, FrontierError> {
        read(path)
    }
}

impl Disk for FrontierTable {
    fn name() -> &'static str {
        "table"
    }
    fn save(&self, path: &Path) -> Result<(), FrontierError> {
        write(self, path)?;
        log::info!("saved round {} {} to {}", self.round(), Self::name(), path.display());
        Ok(())
    }
    fn load(path: &Path) -> Result<Self, FrontierError> {
        read(path)
    }
}
