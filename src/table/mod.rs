//! Grid search for the boundary surface.
//!
//! Regret budgets and strategies live on a lattice of step 1/G. For every
//! (r0, r1) the table records the least r2 the player can guarantee, found
//! by walking r2 down from a bound inherited from neighbouring cells.

mod builder;
mod frontier;

pub use builder::*;
pub use frontier::*;
