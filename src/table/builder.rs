use super::*;
use crate::GRANULARITY_CEILING;
use crate::PROGRESS_CHECKPOINTS;
use crate::ROUNDS_WARNING;
use crate::Round;
use crate::Tick;
use crate::error::FrontierError;
use crate::game::Classification;
use crate::game::Simplex;
use crate::game::successors;
use crate::progress::Progress;
use rayon::prelude::*;

/// Fills one [`FrontierTable`] per round, 1 through `rounds`.
///
/// Round t is searched against round t-1, so tables are built strictly in
/// order and each is frozen before the next begins.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    rounds: Round,
    granularity: usize,
    lattice: Vec<[Tick; 3]>,
}

impl GridBuilder {
    pub fn new(rounds: Round, granularity: usize) -> Result<Self, FrontierError> {
        if granularity == 0 || granularity >= GRANULARITY_CEILING {
            return Err(FrontierError::Granularity(granularity));
        }
        if rounds == 0 {
            return Err(FrontierError::Rounds(rounds));
        }
        if rounds > ROUNDS_WARNING {
            log::warn!(
                "table search over {} rounds at granularity {} will be slow",
                rounds,
                granularity
            );
        }
        Ok(Self {
            rounds,
            granularity,
            lattice: Simplex::new(granularity).collect(),
        })
    }

    pub fn rounds(&self) -> Round {
        self.rounds
    }
    pub fn granularity(&self) -> usize {
        self.granularity
    }

    /// the whole sequence of tables, indexed by round - 1
    pub fn tables(&self) -> Vec<FrontierTable> {
        let mut tables = Vec::<FrontierTable>::with_capacity(self.rounds);
        for round in 1..=self.rounds {
            log::info!("building table for round {}", round);
            let table = self.build(round, tables.last());
            log::debug!(
                "round {} table: {} of {} cells defined",
                round,
                table.defined(),
                table.side() * table.side()
            );
            tables.push(table);
        }
        tables
    }

    /// one table, searched against the previous round's table.
    /// rows go in increasing r0 so that both neighbours (r0-1, r1) and
    /// (r0, r1-1) are known by the time (r0, r1) is searched.
    fn build(&self, round: Round, previous: Option<&FrontierTable>) -> FrontierTable {
        let mut table = FrontierTable::new(round, self.granularity);
        let extent = table.extent();
        let progress = Progress::new("table", table.side(), PROGRESS_CHECKPOINTS);
        for r0 in 0..=extent {
            for r1 in 0..r0 {
                table.set(r0, r1, table.get(r1, r0));
            }
            for r1 in r0..=extent {
                let bound = self.bound(&table, r0, r1);
                let mut r2 = bound;
                while r2 >= 0 && self.realizable([r0, r1, r2], previous) {
                    r2 -= 1;
                }
                table.set(r0, r1, if r2 == extent { None } else { Some(r2 + 1) });
            }
            progress.tick();
        }
        table
    }

    /// the boundary never rises as r0 or r1 grows, so either neighbour's
    /// boundary is realizable here too and makes a valid starting point.
    fn bound(&self, table: &FrontierTable, r0: Tick, r1: Tick) -> Tick {
        [
            (r0 > 0).then(|| table.get(r0 - 1, r1)).flatten(),
            (r1 > 0).then(|| table.get(r0, r1 - 1)).flatten(),
        ]
        .into_iter()
        .flatten()
        .fold(table.extent(), Tick::min)
    }

    /// whether any lattice strategy guarantees the budget `cell`.
    /// the cell walk is sequential, so the lattice is where work spreads.
    fn realizable(&self, cell: [Tick; 3], previous: Option<&FrontierTable>) -> bool {
        self.lattice
            .par_iter()
            .any(|prob| self.admits(cell, *prob, previous))
    }

    /// whether strategy `prob` guarantees the budget `cell`. with one
    /// round left it suffices that no adversary move breaks a budget.
    /// otherwise every successor must be realizable one round earlier.
    fn admits(&self, cell: [Tick; 3], prob: [Tick; 3], previous: Option<&FrontierTable>) -> bool {
        let [r0, r1, r2] = cell;
        let [p0, p1, p2] = prob;
        if r0 < p1 + p2 || r1 < p0 + p2 || r2 < p0 + p1 {
            return false;
        }
        match previous {
            None => true,
            Some(table) => Classification::judge(
                successors(cell, prob, self.granularity as Tick)
                    .iter()
                    .map(|successor| table.position(successor)),
            )
            .is_feasible(),
        }
    }
}

/// the boundary table after `rounds` rounds at lattice step 1/granularity
pub fn build_table(rounds: Round, granularity: usize) -> Result<FrontierTable, FrontierError> {
    GridBuilder::new(rounds, granularity)?
        .tables()
        .pop()
        .ok_or(FrontierError::Rounds(rounds))
}
