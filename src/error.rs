//! Errors raised before or during a frontier pass.
//!
//! Configuration errors are reported before any computation starts.
//! Domain errors come from the combinatorial helpers and are never
//! swallowed. Everything else aborts the current pass.

use crate::GRANULARITY_CEILING;
use crate::Probability;
use crate::RESOLUTION_CEILING;
use crate::Round;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontierError {
    #[error("granularity of {0} would cause problems (expected 0 < granularity < {})", GRANULARITY_CEILING)]
    Granularity(usize),

    #[error("resolution of {value} would cause problems (expected {floor} <= resolution < {})", RESOLUTION_CEILING)]
    Resolution { value: usize, floor: usize },

    #[error("round count {0} is not supported here")]
    Rounds(Round),

    #[error("domain error: {0}")]
    Domain(String),

    #[error("invalid probability vector {weights:?}: {reason}")]
    Probability {
        weights: [Probability; 3],
        reason: &'static str,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("sampled point {point} failed: {source}")]
    Point {
        point: String,
        #[source]
        source: Box<FrontierError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
