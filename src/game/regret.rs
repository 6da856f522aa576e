use super::*;
use crate::Arbitrary;
use crate::Regret;
use crate::error::FrontierError;

/// Cumulative regret budget, one entry per expert.
///
/// Components are non-negative once a point is classified as feasible.
/// Negative components only show up as test points that the oracle rejects.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, serde::Serialize, serde::Deserialize)]
pub struct RegretVector([Regret; 3]);

impl RegretVector {
    pub const fn new(r0: Regret, r1: Regret, r2: Regret) -> Self {
        Self([r0, r1, r2])
    }
    pub const fn coords(&self) -> [Regret; 3] {
        self.0
    }
    pub fn sum(&self) -> Regret {
        self.0.iter().sum()
    }
    pub fn min(&self) -> Regret {
        self.0.iter().copied().fold(Regret::INFINITY, Regret::min)
    }
    pub fn max(&self) -> Regret {
        self.0.iter().copied().fold(Regret::NEG_INFINITY, Regret::max)
    }
    pub fn is_nonnegative(&self) -> bool {
        self.0.iter().all(|r| *r >= 0.)
    }
    pub fn scale(&self, k: Regret) -> Self {
        Self(self.0.map(|r| r * k))
    }

    /// the six budgets the adversary can leave behind after one round of `prob`.
    pub fn successors(&self, prob: &ProbabilityVector) -> [Self; 6] {
        successors(self.0, prob.weights(), 1.).map(Self)
    }

    /// the largest coordinate-wise gap to another vector
    pub fn distance(&self, other: &Self) -> Regret {
        (0..3)
            .map(|i| (self.0[i] - other.0[i]).abs())
            .fold(0., Regret::max)
    }
}

impl From<[Regret; 3]> for RegretVector {
    fn from(coords: [Regret; 3]) -> Self {
        Self(coords)
    }
}

impl From<RegretVector> for [Regret; 3] {
    fn from(regret: RegretVector) -> Self {
        regret.0
    }
}

impl std::ops::Index<usize> for RegretVector {
    type Output = Regret;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

/// a basis combination c0·b0 + c1·b1 + c2·b2
impl From<([Regret; 3], [RegretVector; 3])> for RegretVector {
    fn from((coefficients, basis): ([Regret; 3], [RegretVector; 3])) -> Self {
        Self(std::array::from_fn(|i| {
            (0..3).map(|j| coefficients[j] * basis[j].0[i]).sum()
        }))
    }
}

/// accepts "a b c", "a, b, c", "(a, b, c)" and numpy's "[a b c]"
impl TryFrom<&str> for RegretVector {
    type Error = FrontierError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let coords = s
            .trim()
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']'])
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<Regret>()
                    .map_err(|e| FrontierError::Parse(format!("{:?}: {}", token, e)))
            })
            .collect::<Result<Vec<Regret>, _>>()?;
        <[Regret; 3]>::try_from(coords)
            .map(Self)
            .map_err(|v| FrontierError::Parse(format!("expected 3 coordinates, found {}", v.len())))
    }
}

impl std::fmt::Display for RegretVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.0[0], self.0[1], self.0[2])
    }
}

impl Arbitrary for RegretVector {
    fn random() -> Self {
        Self(std::array::from_fn(|_| rand::random_range(0. ..2.)))
    }
}
