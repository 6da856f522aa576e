use super::Scalar;

/// A 0/1 loss assignment across the three experts, 1 meaning "wrong".
///
/// <1,1,1> is left out: shifting every expert's loss by the same amount
/// leaves every regret where <0,0,0> leaves it, and counting it twice
/// would duplicate a successor state.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum LossPattern {
    L000,
    L100,
    L010,
    L001,
    L110,
    L101,
    L011,
}

impl LossPattern {
    pub const fn all() -> [Self; 7] {
        [
            Self::L000,
            Self::L100,
            Self::L010,
            Self::L001,
            Self::L110,
            Self::L101,
            Self::L011,
        ]
    }

    /// the adversary's six moves that actually shift the regret vector,
    /// in the order their successors are enumerated.
    pub const fn moves() -> [Self; 6] {
        [
            Self::L011,
            Self::L101,
            Self::L110,
            Self::L100,
            Self::L010,
            Self::L001,
        ]
    }

    pub const fn bits(&self) -> [u8; 3] {
        match self {
            Self::L000 => [0, 0, 0],
            Self::L100 => [1, 0, 0],
            Self::L010 => [0, 1, 0],
            Self::L001 => [0, 0, 1],
            Self::L110 => [1, 1, 0],
            Self::L101 => [1, 0, 1],
            Self::L011 => [0, 1, 1],
        }
    }

    /// where this loss pattern sends the remaining budget `regret` when the
    /// player mixes with `prob`. `unit` is the total probability mass, i.e.
    /// 1 for real strategies and G on a granularity-G lattice. only p1 and
    /// p2 enter, p0 being whatever mass is left.
    ///
    /// each successor is r_i - (p·l - l_i), written out per pattern.
    pub fn successor<S>(&self, regret: [S; 3], prob: [S; 3], unit: S) -> [S; 3]
    where
        S: Scalar,
    {
        let [r0, r1, r2] = regret;
        let [_, p1, p2] = prob;
        let u = unit;
        match self {
            Self::L000 => [r0, r1, r2],
            Self::L011 => [r0 - (p1 + p2), r1 - ((p1 - u) + p2), r2 - (p1 + (p2 - u))],
            Self::L101 => [r0 + p1, r1 + (p1 - u), r2 + p1],
            Self::L110 => [r0 + p2, r1 + p2, r2 + (p2 - u)],
            Self::L100 => [r0 + (p1 + p2), r1 + ((p1 - u) + p2), r2 + (p1 + (p2 - u))],
            Self::L010 => [r0 - p1, r1 - (p1 - u), r2 - p1],
            Self::L001 => [r0 - p2, r1 - p2, r2 - (p2 - u)],
        }
    }
}

/// the six budgets the adversary can leave behind after one round.
pub fn successors<S>(regret: [S; 3], prob: [S; 3], unit: S) -> [[S; 3]; 6]
where
    S: Scalar,
{
    LossPattern::moves().map(|pattern| pattern.successor(regret, prob, unit))
}

impl std::fmt::Display for LossPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.bits();
        write!(f, "<{},{},{}>", a, b, c)
    }
}
