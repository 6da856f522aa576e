use crate::Arbitrary;
use crate::game::RegretVector;

/// an array of 3 distinct expert indices represents
/// any of the 3! = 6 elements in the expert permutation group.
/// the image of a point takes coordinate P[i] into slot i.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Permutation([usize; 3]);

impl Permutation {
    pub const fn identity() -> Self {
        Self([0, 1, 2])
    }

    /// the identity first, then transpositions and rotations in the order
    /// replicate emits them.
    pub const fn exhaust() -> [Self; 6] {
        [
            Self([0, 1, 2]),
            Self([0, 2, 1]),
            Self([1, 0, 2]),
            Self([1, 2, 0]),
            Self([2, 0, 1]),
            Self([2, 1, 0]),
        ]
    }

    pub fn image(&self, regret: &RegretVector) -> RegretVector {
        RegretVector::from(self.0.map(|i| regret[i]))
    }

    pub fn inverse(&self) -> Self {
        let mut inverse = [0; 3];
        self.0
            .iter()
            .enumerate()
            .for_each(|(slot, source)| inverse[*source] = slot);
        Self(inverse)
    }
}

/// every distinct rearrangement of the point's coordinates,
/// the point itself first. exact duplicates (coinciding coordinates)
/// are dropped, so there are 1, 3 or 6 of them.
pub fn replicate(point: &RegretVector) -> Vec<RegretVector> {
    let mut images = Vec::with_capacity(6);
    for image in Permutation::exhaust().iter().map(|p| p.image(point)) {
        if !images.contains(&image) {
            images.push(image);
        }
    }
    images
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::exhaust()
            .choose(rng)
            .copied()
            .unwrap_or(Self::identity())
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({} {} {})", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Regret;

    fn sorted(point: &RegretVector) -> [Regret; 3] {
        let mut coords = point.coords();
        coords.sort_by(|a, b| a.total_cmp(b));
        coords
    }

    #[test]
    fn replicate_distinct() {
        let images = replicate(&RegretVector::new(1., 2., 3.));
        assert!(images.len() == 6);
        assert!(images[0] == RegretVector::new(1., 2., 3.));
        assert!(images.contains(&RegretVector::new(3., 2., 1.)));
        assert!(images.contains(&RegretVector::new(2., 3., 1.)));
    }

    #[test]
    fn replicate_coinciding() {
        assert!(replicate(&RegretVector::new(1., 1., 1.)).len() == 1);
        assert!(replicate(&RegretVector::new(0.5, 2., 0.5)).len() == 3);
    }

    #[test]
    fn replicate_closed_under_itself() {
        for _ in 0..100 {
            let point = RegretVector::random();
            let images = replicate(&point);
            assert!(images.contains(&point));
            assert!((1..=6).contains(&images.len()));
            assert!(images.iter().all(|image| sorted(image) == sorted(&point)));
            for image in images.iter() {
                assert!(replicate(image).iter().all(|again| images.contains(again)));
            }
        }
    }

    #[test]
    fn inverse_undoes_image() {
        let point = RegretVector::new(0.1, 0.2, 0.3);
        for permutation in Permutation::exhaust() {
            let there = permutation.image(&point);
            assert!(permutation.inverse().image(&there) == point);
        }
    }

    #[test]
    fn random_is_member() {
        assert!(Permutation::exhaust().contains(&Permutation::random()));
    }
}
