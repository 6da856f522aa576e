use super::Simplex;
use crate::Arbitrary;
use crate::Probability;
use crate::error::FrontierError;

/// The player's mixed strategy over the three experts.
/// Components are non-negative and sum to one.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ProbabilityVector([Probability; 3]);

impl ProbabilityVector {
    pub const fn weights(&self) -> [Probability; 3] {
        self.0
    }

    pub fn uniform() -> Self {
        Self([1. / 3.; 3])
    }

    /// all expert mass on one expert
    pub fn vertex(expert: usize) -> Self {
        let mut weights = [0.; 3];
        weights[expert] = 1.;
        Self(weights)
    }

    /// scale arbitrary non-negative weights onto the simplex
    pub fn normalize(weights: [Probability; 3]) -> Result<Self, FrontierError> {
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(FrontierError::Probability {
                weights,
                reason: "non-finite weight",
            });
        }
        if weights.iter().any(|w| *w < 0.) {
            return Err(FrontierError::Probability {
                weights,
                reason: "negative weight",
            });
        }
        let sum = weights.iter().sum::<Probability>();
        if sum <= 0. {
            return Err(FrontierError::Probability {
                weights,
                reason: "weights sum to zero",
            });
        }
        Ok(Self(weights.map(|w| w / sum)))
    }

    /// every strategy whose weights are multiples of 1/n
    pub fn lattice(n: usize) -> impl Iterator<Item = Self> {
        let scale = n as Probability;
        Simplex::new(n).map(move |p| Self(p.map(|x| x as Probability / scale)))
    }
}

impl std::fmt::Display for ProbabilityVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{:.4}, {:.4}, {:.4}>", self.0[0], self.0[1], self.0[2])
    }
}

impl Arbitrary for ProbabilityVector {
    fn random() -> Self {
        loop {
            let weights = std::array::from_fn(|_| rand::random_range(0. ..1.));
            if let Ok(prob) = Self::normalize(weights) {
                return prob;
            }
        }
    }
}
