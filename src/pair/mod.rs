//! The two-expert frontier, known in closed form.
//!
//! With two experts the frontier after T rounds is a convex polyline with
//! T + 1 vertices. Adding a third expert whose budget is T leaves it
//! unchanged, which makes it a slice of the three-expert surface.

mod combinatorics;
mod frontier;

pub use combinatorics::*;
pub use frontier::*;
