use crate::game::Classification;
use crate::game::RegretVector;
use crate::symmetry::replicate;

/// Sampled regret vectors bucketed by classification.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointSet {
    impossible: Vec<RegretVector>,
    suboptimal: Vec<RegretVector>,
    optimal: Vec<RegretVector>,
}

impl PointSet {
    pub fn push(&mut self, class: Classification, point: RegretVector) {
        self.bucket_mut(class).push(point);
    }

    /// push an optimal point together with its relabellings
    pub fn push_replicated(&mut self, point: RegretVector) {
        self.optimal.extend(replicate(&point));
    }

    /// append another set bucket by bucket, keeping order
    pub fn merge(&mut self, other: Self) {
        self.impossible.extend(other.impossible);
        self.suboptimal.extend(other.suboptimal);
        self.optimal.extend(other.optimal);
    }

    pub fn get(&self, class: Classification) -> &[RegretVector] {
        match class {
            Classification::Impossible => &self.impossible,
            Classification::Suboptimal => &self.suboptimal,
            Classification::Optimal => &self.optimal,
        }
    }

    pub fn optimal(&self) -> &[RegretVector] {
        &self.optimal
    }

    pub fn len(&self) -> usize {
        self.impossible.len() + self.suboptimal.len() + self.optimal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// bucket sizes in worst-to-best order
    pub fn counts(&self) -> [usize; 3] {
        [
            self.impossible.len(),
            self.optimal.len(),
            self.suboptimal.len(),
        ]
    }

    fn bucket_mut(&mut self, class: Classification) -> &mut Vec<RegretVector> {
        match class {
            Classification::Impossible => &mut self.impossible,
            Classification::Suboptimal => &mut self.suboptimal,
            Classification::Optimal => &mut self.optimal,
        }
    }
}

impl FromIterator<(Classification, RegretVector)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (Classification, RegretVector)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (class, point) in iter {
            set.push(class, point);
        }
        set
    }
}

impl std::fmt::Display for PointSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for class in Classification::all() {
            writeln!(f, "{:<12}{:>8}", class.to_string(), self.get(*class).len())?;
        }
        Ok(())
    }
}
