use super::*;
use crate::ORACLE_GRANULARITY;
use crate::Round;
use crate::game::Classification;
use crate::game::ProbabilityVector;
use crate::game::RegretVector;

/// Classifies regret vectors against the frontier with a given number of
/// rounds left.
///
/// Rounds 0 and 1 are closed form. Beyond that the oracle unrolls one step
/// of backward induction per round, and when no strategy is given it
/// searches the strategy lattice of its granularity for the best one.
/// Cost grows as (6 · lattice size)^(rounds - 1).
#[derive(Debug, Clone, Copy)]
pub struct Oracle {
    granularity: usize,
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new(ORACLE_GRANULARITY)
    }
}

impl Oracle {
    pub fn new(granularity: usize) -> Self {
        Self {
            granularity: granularity.max(1),
        }
    }

    pub fn granularity(&self) -> usize {
        self.granularity
    }

    /// position of `regret` relative to the frontier with `round` rounds
    /// left, under the best strategy the player can find.
    pub fn classify(&self, regret: &RegretVector, round: Round) -> Classification {
        match round {
            0 => Origin.position(regret),
            1 => Closed.position(regret),
            _ => self.search(regret, round),
        }
    }

    /// position of `regret` with `round` rounds left when the player
    /// commits to `prob` for the coming round.
    pub fn classify_with_strategy(
        &self,
        regret: &RegretVector,
        prob: &ProbabilityVector,
        round: Round,
    ) -> Classification {
        match round {
            0 => Origin.position(regret),
            1 => Origin.precede(regret, prob),
            2 => Closed.precede(regret, prob),
            _ => Classification::judge(
                regret
                    .successors(prob)
                    .iter()
                    .map(|successor| self.classify(successor, round - 1)),
            ),
        }
    }

    /// best classification over the strategy lattice.
    /// stops at the first strategy that leaves slack everywhere.
    fn search(&self, regret: &RegretVector, round: Round) -> Classification {
        if !regret.is_nonnegative() {
            return Classification::Impossible;
        }
        let mut best = Classification::Impossible;
        for prob in ProbabilityVector::lattice(self.granularity) {
            match self.classify_with_strategy(regret, &prob, round) {
                Classification::Suboptimal => return Classification::Suboptimal,
                class => best = best.max(class),
            }
        }
        best
    }

    /// the first lattice strategy achieving the best classification
    pub fn strategy(&self, regret: &RegretVector, round: Round) -> Option<ProbabilityVector> {
        let target = self.classify(regret, round);
        match target {
            Classification::Impossible => None,
            _ => ProbabilityVector::lattice(self.granularity)
                .find(|prob| self.classify_with_strategy(regret, prob, round) == target),
        }
    }
}
