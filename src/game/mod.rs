//! Primitives of the three-expert prediction game.
//!
//! Each round the player commits to a mixed strategy over experts, the
//! adversary reveals a 0/1 loss per expert, and every regret budget moves by
//! the player's expected loss minus the expert's loss.

mod classification;
mod pattern;
mod probability;
mod regret;
mod scalar;
mod simplex;

pub use classification::*;
pub use pattern::*;
pub use probability::*;
pub use regret::*;
pub use scalar::*;
pub use simplex::*;
