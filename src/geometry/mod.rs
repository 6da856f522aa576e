//! Closed-form geometry of the one-round frontier.
//!
//! With one round left the frontier is the triangle x+y+z=2 inside the
//! unit cube, glued to three prism faces where one coordinate is at least 1
//! and the other two sum to 1. An expert whose budget is 1 can never be
//! outrun in a single round, so the game degenerates to the other two.

mod face;

pub use face::*;
