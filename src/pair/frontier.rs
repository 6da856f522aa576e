use super::*;
use crate::Regret;
use crate::Round;
use crate::error::FrontierError;
use crate::game::RegretVector;

/// Vertices of the two-expert frontier with `rounds` rounds left,
/// ordered by the first coordinate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PairFrontier {
    rounds: Round,
    vertices: Vec<[Regret; 2]>,
}

impl PairFrontier {
    pub fn new(rounds: Round) -> Result<Self, FrontierError> {
        let f = (0..=rounds)
            .map(|i| vertex(i, rounds))
            .collect::<Result<Vec<Regret>, FrontierError>>()?;
        let vertices = (0..=rounds).map(|i| [f[i], f[rounds - i]]).collect();
        log::debug!("two-expert frontier for {} rounds", rounds);
        Ok(Self { rounds, vertices })
    }

    pub fn rounds(&self) -> Round {
        self.rounds
    }
    pub fn vertices(&self) -> &[[Regret; 2]] {
        &self.vertices
    }

    /// least second budget given the first, interpolating between vertices
    pub fn boundary(&self, x: Regret) -> Option<Regret> {
        self.vertices
            .windows(2)
            .find(|w| w[0][0] <= x && x <= w[1][0])
            .map(|w| {
                let t = (x - w[0][0]) / (w[1][0] - w[0][0]);
                w[0][1] + t * (w[1][1] - w[0][1])
            })
    }

    /// vertices as three-expert points, the third budget never binding
    pub fn embed(&self) -> impl Iterator<Item = RegretVector> + '_ {
        let z = self.rounds as Regret;
        self.vertices.iter().map(move |[x, y]| RegretVector::new(*x, *y, z))
    }
}

impl std::fmt::Display for PairFrontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "two experts, {} rounds", self.rounds)?;
        for [x, y] in self.vertices.iter() {
            writeln!(f, "{:>10.6} {:>10.6}", x, y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Classification;
    use crate::oracle::Closed;
    use crate::oracle::Frontier;
    use crate::oracle::Oracle;

    #[test]
    fn one_round_is_a_segment() {
        let pair = PairFrontier::new(1).unwrap();
        assert!(pair.vertices() == [[0., 1.], [1., 0.]]);
        assert!(pair.boundary(0.25) == Some(0.75));
    }

    #[test]
    fn two_round_vertices() {
        let pair = PairFrontier::new(2).unwrap();
        assert!(pair.vertices() == [[0., 2.], [0.5, 0.5], [2., 0.]]);
        assert!(pair.boundary(0.25) == Some(1.25));
        assert!(pair.boundary(2.5).is_none());
        assert!(pair.boundary(-0.5).is_none());
    }

    #[test]
    fn vertices_are_symmetric_and_convex() {
        let pair = PairFrontier::new(6).unwrap();
        let v = pair.vertices();
        let n = v.len();
        assert!((0..n).all(|i| v[i][0] == v[n - 1 - i][1]));
        let slopes = v
            .windows(2)
            .map(|w| (w[1][1] - w[0][1]) / (w[1][0] - w[0][0]))
            .collect::<Vec<_>>();
        assert!(slopes.windows(2).all(|s| s[0] <= s[1]));
    }

    #[test]
    fn long_horizon_vertices() {
        let rounds = 40;
        let pair = PairFrontier::new(rounds).unwrap();
        let v = pair.vertices();
        let n = v.len();
        assert!(n == rounds + 1);
        assert!(v[0] == [0., rounds as Regret]);
        assert!(v[n - 1] == [rounds as Regret, 0.]);
        assert!((0..n).all(|i| v[i][0] == v[n - 1 - i][1]));
        assert!(v.windows(2).all(|w| w[0][0] < w[1][0]));
    }

    #[test]
    fn one_round_embeds_on_prism_face() {
        let pair = PairFrontier::new(1).unwrap();
        for point in pair.embed() {
            assert!(Closed.position(&point) == Classification::Optimal, "{}", point);
        }
    }

    #[test]
    fn embeds_on_three_expert_frontier() {
        let oracle = Oracle::new(4);
        for rounds in [2, 3] {
            let pair = PairFrontier::new(rounds).unwrap();
            for point in pair.embed() {
                let class = oracle.classify(&point, rounds);
                assert!(class == Classification::Optimal, "{} rounds {}", point, rounds);
            }
        }
    }
}
