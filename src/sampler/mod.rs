//! Brute-force sampling of classified regret vectors.
//!
//! Points are generated as non-negative combinations of a basis whose
//! vectors lie on the frontier, classified with a known strategy, and
//! bucketed by outcome. Optimal points are expanded under relabelling of
//! experts.

mod points;
mod rationals;
mod sampler;

pub use points::*;
pub use rationals::*;
pub use sampler::*;
