use super::*;
use crate::GRANULARITY_DEFAULT;
use crate::Round;
use crate::error::FrontierError;
use crate::pair::PairFrontier;
use crate::sampler::Sampler;
use crate::table::GridBuilder;

/// Which pass to run, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Table { rounds: Round, granularity: usize },
    Sample { rounds: Round, resolution: usize },
    Pair { rounds: Round },
}

impl Default for Mode {
    fn default() -> Self {
        Self::Table {
            rounds: 1,
            granularity: GRANULARITY_DEFAULT,
        }
    }
}

impl Mode {
    /// validates parameters before any computation starts
    pub fn explorer(&self) -> Result<Box<dyn Explorer>, FrontierError> {
        match *self {
            Self::Table {
                rounds,
                granularity,
            } => Ok(Box::new(GridBuilder::new(rounds, granularity)?)),
            Self::Sample { rounds, resolution } => Ok(Box::new(Sampler::new(rounds, resolution)?)),
            Self::Pair { rounds } => Ok(Box::new(PairFrontier::new(rounds)?)),
        }
    }

    pub fn run(&self) -> Result<Survey, FrontierError> {
        let explorer = self.explorer()?;
        log::info!("running {}", explorer.name());
        let survey = explorer.explore()?;
        log::info!("{}", survey);
        Ok(survey)
    }
}
