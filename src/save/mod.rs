//! Dumping surveys to disk for plotting and reloading.
//!
//! Point sets go to flat text, one optimal triple per line, which plotting
//! scripts read directly. Tables and whole surveys go to json.

mod json;
mod text;

use crate::error::FrontierError;
use std::path::Path;

/// types that can be written to and read back from a file
pub trait Disk: Sized {
    /// short label for log lines
    fn name() -> &'static str;
    /// write to disk
    fn save(&self, path: &Path) -> Result<(), FrontierError>;
    /// read from disk
    fn load(path: &Path) -> Result<Self, FrontierError>;
}

#[cfg(test)]
pub(crate) fn scratch(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("pareto-{}-{}", std::process::id(), name))
}
