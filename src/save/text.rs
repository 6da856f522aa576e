use super::*;
use crate::game::Classification;
use crate::game::RegretVector;
use crate::sampler::PointSet;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;

/// Only the optimal bucket is written, and only it is restored.
impl Disk for PointSet {
    fn name() -> &'static str {
        "points"
    }
    fn save(&self, path: &Path) -> Result<(), FrontierError> {
        let ref mut file = BufWriter::new(std::fs::File::create(path)?);
        for point in self.optimal() {
            let [x, y, z] = point.coords();
            writeln!(file, "{} {} {}", x, y, z)?;
        }
        file.flush()?;
        log::info!("saved {} {} to {}", self.optimal().len(), Self::name(), path.display());
        Ok(())
    }
    fn load(path: &Path) -> Result<Self, FrontierError> {
        let file = BufReader::new(std::fs::File::open(path)?);
        let mut points = Self::default();
        for line in file.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            points.push(Classification::Optimal, RegretVector::try_from(line.as_str())?);
        }
        log::info!("loaded {} {} from {}", points.len(), Self::name(), path.display());
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimal_points_survive_disk() {
        let mut points = PointSet::default();
        points.push(Classification::Optimal, RegretVector::new(2. / 3., 2. / 3., 2. / 3.));
        points.push(Classification::Optimal, RegretVector::new(1.5, 1. / 3., 1.5));
        points.push(Classification::Suboptimal, RegretVector::new(3., 3., 3.));
        let ref path = scratch("points.txt");
        points.save(path).unwrap();
        let loaded = PointSet::load(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert!(loaded.optimal() == points.optimal());
        assert!(loaded.counts() == [0, 2, 0]);
    }

    #[test]
    fn load_reports_bad_lines() {
        let ref path = scratch("bad.txt");
        std::fs::write(path, "1 1 0\n1 1\n").unwrap();
        let loaded = PointSet::load(path);
        std::fs::remove_file(path).unwrap();
        assert!(matches!(loaded, Err(FrontierError::Parse(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let loaded = PointSet::load(&scratch("missing.txt"));
        assert!(matches!(loaded, Err(FrontierError::Io(_))));
    }
}
