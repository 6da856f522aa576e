use super::Frontier;
use crate::EPSILON;
use crate::Regret;
use crate::game::Classification;
use crate::game::RegretVector;
use crate::geometry::Face;

/// The one-round frontier in closed form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Closed;

impl Closed {
    /// above 2/3 in every coordinate the budget clears the central
    /// triangle's tightest point (2/3, 2/3, 2/3)
    const CLEARANCE: Regret = 2. / 3.;
}

impl Frontier for Closed {
    fn position(&self, regret: &RegretVector) -> Classification {
        if !regret.is_nonnegative() {
            return Classification::Impossible;
        }
        if regret.coords().iter().all(|r| *r > Self::CLEARANCE) {
            return Classification::Suboptimal;
        }
        let face = Face::locate(regret);
        let level = face.level(regret);
        let offset = face.offset();
        if level > offset - EPSILON && level < offset + EPSILON {
            Classification::Optimal
        } else if level < offset {
            Classification::Impossible
        } else if regret.min() < EPSILON {
            // a spent budget is tight whatever the others hold
            Classification::Optimal
        } else {
            Classification::Suboptimal
        }
    }
}
