//! Numerical exploration of the Pareto regret frontier.
//!
//! A player mixes over three experts for T rounds under 0/1 loss. A regret
//! vector (r0, r1, r2) is a budget: the player promises never to trail
//! expert i by more than r_i. The frontier is the surface of budgets that
//! are achievable but cannot be improved in any coordinate.
//!
//! # Module Structure
//!
//! - `game`: regret and probability vectors, loss patterns, classifications
//! - `geometry`: closed-form faces of the one-round frontier
//! - `oracle`: feasibility classification, recursive in the round count
//! - `symmetry`: relabelling of experts
//! - `table`: grid search for the boundary surface
//! - `sampler`: brute-force sampling of classified points
//! - `pair`: closed-form two-expert frontier
//! - `survey`: experiment modes behind one entry point
//! - `save`: text and json dumps
#![allow(dead_code)]

pub mod error;
pub mod game;
pub mod geometry;
pub mod oracle;
pub mod pair;
pub mod progress;
pub mod sampler;
pub mod save;
pub mod survey;
pub mod symmetry;
pub mod table;

#[cfg(test)]
mod scenarios;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Real-valued regret budgets and coordinates of the frontier.
pub type Regret = f64;
/// Mixed strategy weights over experts.
pub type Probability = f64;
/// Integer lattice coordinate. Negative values only appear as test points.
pub type Tick = i64;
/// Number of rounds remaining in the game.
pub type Round = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// FRONTIER PARAMETERS
// ============================================================================
/// Number of experts. The game's symmetry group is S_3.
pub const N: usize = 3;
/// Tolerance for "on the boundary" in the closed-form one-round frontier.
/// This is the only approximate comparison in the crate.
pub const EPSILON: Regret = 1e-5;

// ============================================================================
// GRID TABLE
// Cost grows as O(G^5 T^2), hence the ceiling.
// ============================================================================
/// Default lattice granularity for the table builder.
pub const GRANULARITY_DEFAULT: usize = 60;
/// Exclusive upper bound on table granularity.
pub const GRANULARITY_CEILING: usize = 100;
/// Table round counts above this log a cost warning.
pub const ROUNDS_WARNING: Round = 2;

// ============================================================================
// BRUTE-FORCE SAMPLING
// ============================================================================
/// Mesh points per basis coefficient for the one-round sampler.
pub const RESOLUTION_MESH: usize = 25;
/// Largest rational denominator for the two-round sampler.
pub const RESOLUTION_RATIONAL: usize = 30;
/// Exclusive upper bound on sampler resolution.
pub const RESOLUTION_CEILING: usize = 1000;

// ============================================================================
// RECURSIVE ORACLE
// ============================================================================
/// Strategy lattice granularity used when the oracle must search for a
/// strategy itself (rounds > 1 without a given probability vector).
pub const ORACLE_GRANULARITY: usize = 24;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Number of progress messages logged over one pass.
pub const PROGRESS_CHECKPOINTS: usize = 20;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
