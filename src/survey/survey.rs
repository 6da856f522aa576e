use crate::Round;
use crate::game::Classification;
use crate::pair::PairFrontier;
use crate::sampler::PointSet;
use crate::table::FrontierTable;

/// The typed outcome of one [`super::Explorer`] pass.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Survey {
    Tables(Vec<FrontierTable>),
    Points(PointSet),
    Pair(PairFrontier),
}

impl Survey {
    /// flatten into classified points. table cells of the last round and
    /// pair vertices are boundary points, hence optimal.
    pub fn points(&self) -> PointSet {
        match self {
            Self::Points(points) => points.clone(),
            Self::Tables(tables) => tables
                .last()
                .into_iter()
                .flat_map(|table| table.points())
                .map(|point| (Classification::Optimal, point))
                .collect(),
            Self::Pair(pair) => pair
                .embed()
                .map(|point| (Classification::Optimal, point))
                .collect(),
        }
    }

    /// rounds covered by the survey, when it records them
    pub fn rounds(&self) -> Option<Round> {
        match self {
            Self::Tables(tables) => tables.last().map(|table| table.round()),
            Self::Points(_) => None,
            Self::Pair(pair) => Some(pair.rounds()),
        }
    }
}

impl std::fmt::Display for Survey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tables(tables) => {
                for table in tables {
                    writeln!(
                        f,
                        "round {} table: {} boundary cells at granularity {}",
                        table.round(),
                        table.defined(),
                        table.granularity()
                    )?;
                }
                Ok(())
            }
            Self::Points(points) => write!(f, "{}", points),
            Self::Pair(pair) => write!(f, "{}", pair),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::build_table;

    #[test]
    fn table_cells_flatten_to_optimal_points() {
        let table = build_table(1, 4).unwrap();
        let defined = table.defined();
        let survey = Survey::Tables(vec![table]);
        let points = survey.points();
        assert!(points.counts() == [0, defined, 0]);
        assert!(points.optimal().iter().all(|p| p.sum() >= 2. - 1e-12));
    }

    #[test]
    fn pair_flattens_with_constant_third_budget() {
        let survey = Survey::Pair(PairFrontier::new(3).unwrap());
        let points = survey.points();
        assert!(points.optimal().len() == 4);
        assert!(points.optimal().iter().all(|p| p[2] == 3.));
        assert!(survey.rounds() == Some(3));
    }
}
