//! Feasibility classification of regret vectors.
//!
//! A budget is achievable with T rounds left under strategy p iff every
//! adversary move leaves a budget achievable with T-1 rounds left. It is
//! tight iff some move lands exactly on the T-1 frontier.

mod closed;
mod frontier;
mod origin;
mod oracle;

pub use closed::*;
pub use frontier::*;
pub use oracle::*;
pub use origin::*;
