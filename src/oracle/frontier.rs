use crate::game::Classification;
use crate::game::ProbabilityVector;
use crate::game::RegretVector;

/// A frontier whose position relative to any regret vector is known.
pub trait Frontier {
    fn position(&self, regret: &RegretVector) -> Classification;

    /// judge `regret` one round earlier, when the player commits to `prob`
    /// and the adversary moves next.
    fn precede(&self, regret: &RegretVector, prob: &ProbabilityVector) -> Classification {
        Classification::judge(
            regret
                .successors(prob)
                .iter()
                .map(|successor| self.position(successor)),
        )
    }
}
