use super::*;
use crate::error::FrontierError;
use crate::pair::PairFrontier;
use crate::sampler::Sampler;
use crate::table::GridBuilder;

/// A configured pass over the frontier.
pub trait Explorer {
    fn name(&self) -> String;
    fn explore(&self) -> Result<Survey, FrontierError>;
}

impl Explorer for GridBuilder {
    fn name(&self) -> String {
        format!("table (rounds {}, granularity {})", self.rounds(), self.granularity())
    }
    fn explore(&self) -> Result<Survey, FrontierError> {
        Ok(Survey::Tables(self.tables()))
    }
}

impl Explorer for Sampler {
    fn name(&self) -> String {
        format!("sample (rounds {}, resolution {})", self.rounds(), self.resolution())
    }
    fn explore(&self) -> Result<Survey, FrontierError> {
        self.sample().map(Survey::Points)
    }
}

impl Explorer for PairFrontier {
    fn name(&self) -> String {
        format!("pair (rounds {})", self.rounds())
    }
    fn explore(&self) -> Result<Survey, FrontierError> {
        Ok(Survey::Pair(self.clone()))
    }
}
