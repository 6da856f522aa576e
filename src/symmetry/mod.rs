//! The game is symmetric under relabelling experts, so every permutation of
//! a frontier point is again a frontier point (permute the strategy along
//! with it).

mod permutation;

pub use permutation::*;
