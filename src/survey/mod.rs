//! Experiment modes behind one entry point.
//!
//! Each way of exploring the frontier is an [`Explorer`] producing a typed
//! [`Survey`]. Plotting and dumping only need the flattened point set.

mod explorer;
mod mode;
mod survey;

pub use explorer::*;
pub use mode::*;
pub use survey::*;
