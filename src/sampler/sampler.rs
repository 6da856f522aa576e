use super::*;
use crate::PROGRESS_CHECKPOINTS;
use crate::RESOLUTION_CEILING;
use crate::Regret;
use crate::Round;
use crate::Tick;
use crate::error::FrontierError;
use crate::game::Classification;
use crate::game::ProbabilityVector;
use crate::game::RegretVector;
use crate::game::successors;
use crate::oracle::Oracle;
use crate::oracle::Origin;
use crate::progress::Progress;
use rayon::prelude::*;

/// "one expert wrong" directions. each lies on the one-round frontier.
const BASIS: [RegretVector; 3] = [
    RegretVector::new(0., 1., 1.),
    RegretVector::new(1., 0., 1.),
    RegretVector::new(1., 1., 0.),
];

/// Corners and edges of the two-round frontier that a rational sweep
/// cannot land on exactly. Closed under relabelling.
pub const SEEDS: [RegretVector; 9] = [
    RegretVector::new(2., 0.5, 0.5),
    RegretVector::new(0.5, 2., 0.5),
    RegretVector::new(0.5, 0.5, 2.),
    RegretVector::new(0., 2., 2.),
    RegretVector::new(2., 0., 2.),
    RegretVector::new(2., 2., 0.),
    RegretVector::new(1.5, 1.5, 1. / 3.),
    RegretVector::new(1. / 3., 1.5, 1.5),
    RegretVector::new(1.5, 1. / 3., 1.5),
];

/// no two-round budget summing below this is feasible
const FLOOR: Regret = 2.;

/// Brute-force classification of basis combinations.
///
/// One round sweeps a uniform mesh of coefficients and decides each point
/// exactly in integer arithmetic. Two rounds sweep sorted triples of
/// rational coefficients and defer to the closed-form one-round frontier.
#[derive(Debug, Clone)]
pub struct Sampler {
    rounds: Round,
    resolution: usize,
    oracle: Oracle,
}

impl Sampler {
    pub fn new(rounds: Round, resolution: usize) -> Result<Self, FrontierError> {
        let floor = match rounds {
            1 => 2,
            2 => 1,
            _ => return Err(FrontierError::Rounds(rounds)),
        };
        if resolution < floor || resolution >= RESOLUTION_CEILING {
            return Err(FrontierError::Resolution {
                value: resolution,
                floor,
            });
        }
        Ok(Self {
            rounds,
            resolution,
            oracle: Oracle::default(),
        })
    }

    pub fn rounds(&self) -> Round {
        self.rounds
    }
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn sample(&self) -> Result<PointSet, FrontierError> {
        log::info!(
            "sampling {} round frontier at resolution {}",
            self.rounds,
            self.resolution
        );
        let points = match self.rounds {
            1 => self.mesh(),
            2 => self.sweep()?,
            rounds => return Err(FrontierError::Rounds(rounds)),
        };
        log::info!(
            "sampled {} points (impossible, optimal, suboptimal) = {:?}",
            points.len(),
            points.counts()
        );
        Ok(points)
    }

    /// one round over the coefficient mesh {0, 1/m, .., 1}^3
    fn mesh(&self) -> PointSet {
        let m = (self.resolution - 1) as Tick;
        let progress = Progress::new("mesh", self.resolution, PROGRESS_CHECKPOINTS);
        let rows = (0..=m)
            .into_par_iter()
            .map(|k0| {
                let row = (0..=m)
                    .flat_map(|k1| (0..=m).map(move |k2| [k0, k1, k2]))
                    .filter(|k| k.iter().any(|x| *x > 0))
                    .map(|k| (Self::exact(k, m), Self::point(k, m)))
                    .collect::<PointSet>();
                progress.tick();
                row
            })
            .collect::<Vec<PointSet>>();
        Self::concat(rows)
    }

    /// round-0 rule on successors scaled by m·K, so that ties are exact
    fn exact(k: [Tick; 3], m: Tick) -> Classification {
        let total = k.iter().sum::<Tick>();
        let regret = k.map(|x| (total - x) * total);
        let prob = k.map(|x| m * x);
        Classification::judge(
            successors(regret, prob, m * total)
                .iter()
                .map(|s| Origin::locate(s)),
        )
    }

    fn point(k: [Tick; 3], m: Tick) -> RegretVector {
        RegretVector::from((k.map(|x| x as Regret / m as Regret), BASIS))
    }

    /// two rounds over sorted rational triples, seeded with known corners
    fn sweep(&self) -> Result<PointSet, FrontierError> {
        let values = rationals(self.resolution);
        let basis = BASIS.map(|b| b.scale(2.));
        let progress = Progress::new("rationals", values.len(), PROGRESS_CHECKPOINTS);
        let mut points = PointSet::default();
        for seed in SEEDS {
            points.push(Classification::Optimal, seed);
        }
        let rows = (0..values.len())
            .into_par_iter()
            .map(|i| -> Result<PointSet, FrontierError> {
                let mut row = PointSet::default();
                for j in i..values.len() {
                    for k in j..values.len() {
                        let c = [values[i], values[j], values[k]];
                        let point = RegretVector::from((c, basis));
                        if point.sum() < FLOOR {
                            continue;
                        }
                        match self.classify(&point, c)? {
                            Classification::Optimal => row.push_replicated(point),
                            class => row.push(class, point),
                        }
                    }
                }
                progress.tick();
                Ok(row)
            })
            .collect::<Result<Vec<PointSet>, FrontierError>>()?;
        points.merge(Self::concat(rows));
        Ok(points)
    }

    fn classify(&self, point: &RegretVector, c: [Regret; 3]) -> Result<Classification, FrontierError> {
        let prob = ProbabilityVector::normalize(c).map_err(|e| FrontierError::Point {
            point: point.to_string(),
            source: Box::new(e),
        })?;
        Ok(self.oracle.classify_with_strategy(point, &prob, self.rounds))
    }

    fn concat(rows: Vec<PointSet>) -> PointSet {
        rows.into_iter().fold(PointSet::default(), |mut acc, row| {
            acc.merge(row);
            acc
        })
    }
}

/// classify basis combinations by brute force
pub fn sample_frontier(rounds: Round, resolution: usize) -> Result<PointSet, FrontierError> {
    Sampler::new(rounds, resolution)?.sample()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_configuration() {
        assert!(matches!(Sampler::new(3, 10), Err(FrontierError::Rounds(3))));
        assert!(matches!(Sampler::new(0, 10), Err(FrontierError::Rounds(0))));
        assert!(matches!(
            Sampler::new(1, 1),
            Err(FrontierError::Resolution { value: 1, floor: 2 })
        ));
        assert!(matches!(
            Sampler::new(2, 1000),
            Err(FrontierError::Resolution { value: 1000, .. })
        ));
        assert!(Sampler::new(2, 1).is_ok());
    }

    #[test]
    fn mesh_covers_every_nonzero_coefficient() {
        let points = sample_frontier(1, 5).unwrap();
        assert!(points.len() == 5 * 5 * 5 - 1);
    }

    #[test]
    fn mesh_optimal_points_are_the_central_face() {
        // the mesh meets the frontier exactly where coefficients sum to one
        let points = sample_frontier(1, 7).unwrap();
        assert!(points.optimal().len() == 7 * 8 / 2);
        assert!(points.optimal().iter().all(|p| (p.sum() - 2.).abs() < 1e-9));
        assert!(
            points
                .get(Classification::Impossible)
                .iter()
                .all(|p| p.sum() < 2. - 1e-9)
        );
        assert!(
            points
                .get(Classification::Suboptimal)
                .iter()
                .all(|p| p.sum() > 2. + 1e-9)
        );
    }

    #[test]
    fn mesh_hits_symmetric_center() {
        let points = sample_frontier(1, 4).unwrap();
        let center = RegretVector::new(2. / 3., 2. / 3., 2. / 3.);
        assert!(points.optimal().iter().any(|p| p.distance(&center) < 1e-9));
    }

    #[test]
    fn sweep_starts_with_seeds() {
        let points = sample_frontier(2, 4).unwrap();
        assert!(points.optimal()[..SEEDS.len()] == SEEDS);
    }

    #[test]
    fn sweep_counts() {
        // 7 rationals of order 4 give 84 sorted triples, 3 fall below the floor
        let points = sample_frontier(2, 4).unwrap();
        assert!(points.get(Classification::Impossible).len() == 6);
        assert!(points.get(Classification::Suboptimal).len() == 73);
        assert!(points.optimal().len() == SEEDS.len() + 9);
    }

    #[test]
    fn sweep_finds_edge_between_corners() {
        // an edge point off the seed list, reachable with quarters
        let points = sample_frontier(2, 4).unwrap();
        let target = RegretVector::new(0.5, 1., 1.5);
        assert!(points.optimal()[SEEDS.len()..].contains(&target));
    }

    #[test]
    fn sweep_optimal_set_is_closed_under_relabelling() {
        let points = sample_frontier(2, 6).unwrap();
        let optimal = points.optimal();
        for point in optimal {
            for image in crate::symmetry::replicate(point) {
                assert!(optimal.contains(&image), "{} missing {}", point, image);
            }
        }
    }

    #[test]
    fn sweep_is_deterministic() {
        assert!(sample_frontier(2, 5).unwrap() == sample_frontier(2, 5).unwrap());
    }
}
