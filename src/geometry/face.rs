use crate::EPSILON;
use crate::Regret;
use crate::game::RegretVector;

/// One of the four planar pieces of the one-round frontier.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Face {
    /// x + y + z = 2 with every coordinate in [0, 1]
    Central,
    /// the two coordinates other than `expert` sum to 1, while
    /// `expert`'s own coordinate is at least 1
    Prism(usize),
}

impl Face {
    pub const fn all() -> [Self; 4] {
        [Self::Central, Self::Prism(0), Self::Prism(1), Self::Prism(2)]
    }

    /// the face whose plane decides the position of `regret`.
    /// points in the unit cube belong to the central triangle. otherwise
    /// the prism of the largest budget decides: the other two coordinates
    /// then carry the whole shortfall.
    pub fn locate(regret: &RegretVector) -> Self {
        if regret.max() <= 1. {
            return Self::Central;
        }
        (0..3)
            .filter(|i| regret[*i] >= 1.)
            .max_by(|a, b| regret[*a].total_cmp(&regret[*b]))
            .map(Self::Prism)
            .unwrap_or(Self::Central)
    }

    pub fn normal(&self) -> [Regret; 3] {
        match self {
            Self::Central => [1., 1., 1.],
            Self::Prism(expert) => std::array::from_fn(|i| if i == *expert { 0. } else { 1. }),
        }
    }

    pub fn offset(&self) -> Regret {
        match self {
            Self::Central => 2.,
            Self::Prism(_) => 1.,
        }
    }

    /// the plane's left-hand side, before subtracting the offset
    pub fn level(&self, regret: &RegretVector) -> Regret {
        let normal = self.normal();
        (0..3).map(|i| normal[i] * regret[i]).sum()
    }

    /// signed distance along the normal, positive on the slack side
    pub fn residual(&self, regret: &RegretVector) -> Regret {
        self.level(regret) - self.offset()
    }

    /// whether `regret` lies on this face, within tolerance
    pub fn contains(&self, regret: &RegretVector) -> bool {
        regret.is_nonnegative()
            && self.residual(regret).abs() < EPSILON
            && match self {
                Self::Central => regret.max() <= 1. + EPSILON,
                Self::Prism(expert) => regret[*expert] >= 1. - EPSILON,
            }
    }

    /// corners of the face's bounded part (prisms truncated at 2)
    pub fn corners(&self) -> Vec<RegretVector> {
        match self {
            Self::Central => vec![
                RegretVector::new(0., 1., 1.),
                RegretVector::new(1., 0., 1.),
                RegretVector::new(1., 1., 0.),
            ],
            Self::Prism(expert) => [(1., 1., 0.), (1., 0., 1.), (2., 1., 0.), (2., 0., 1.)]
                .into_iter()
                .map(|(x, a, b)| {
                    let mut others = [a, b].into_iter();
                    RegretVector::from(std::array::from_fn(|i| match i == *expert {
                        true => x,
                        false => others.next().unwrap_or_default(),
                    }))
                })
                .collect(),
        }
    }
}

/// the least z such that (x, y, z) can be guaranteed with one round left,
/// or None when no z works.
///
/// the player needs weight at least 1 - r_i on every expert whose budget
/// is short of 1, so the shortfalls of x and y leave 1 - (shortfall) for z.
pub fn boundary(x: Regret, y: Regret) -> Option<Regret> {
    if x < 0. || y < 0. {
        return None;
    }
    let shortfall = (1. - x).max(0.) + (1. - y).max(0.);
    if shortfall > 1. { None } else { Some(shortfall) }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Central => write!(f, "x + y + z = 2"),
            Self::Prism(0) => write!(f, "y + z = 1, x >= 1"),
            Self::Prism(1) => write!(f, "x + z = 1, y >= 1"),
            Self::Prism(_) => write!(f, "x + y = 1, z >= 1"),
        }
    }
}
