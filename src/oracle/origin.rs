use super::Frontier;
use crate::game::Classification;
use crate::game::RegretVector;
use crate::game::Scalar;

/// The frontier with no rounds left: the budget itself is the final regret.
/// A negative budget has been broken, a zero budget is exactly spent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Origin;

impl Origin {
    /// exact comparisons, meant for lattice arithmetic
    pub fn locate<S>(coords: &[S; 3]) -> Classification
    where
        S: Scalar,
    {
        if coords.iter().any(|x| *x < S::zero()) {
            Classification::Impossible
        } else if coords.iter().any(|x| *x == S::zero()) {
            Classification::Optimal
        } else {
            Classification::Suboptimal
        }
    }
}

impl Frontier for Origin {
    fn position(&self, regret: &RegretVector) -> Classification {
        Self::locate(&regret.coords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_positions() {
        assert!(Origin::locate(&[0, 3, 1]) == Classification::Optimal);
        assert!(Origin::locate(&[-1, 0, 1]) == Classification::Impossible);
        assert!(Origin::locate(&[2, 3, 1]) == Classification::Suboptimal);
        assert!(Origin.position(&RegretVector::new(0., 0., 0.)) == Classification::Optimal);
    }
}
