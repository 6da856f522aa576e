/// Position of a regret vector relative to a frontier.
///
/// The derived order runs from worst to best for the player:
/// a budget that cannot be guaranteed, one that is exactly tight,
/// and one that leaves slack in every coordinate.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Classification {
    Impossible,
    Optimal,
    Suboptimal,
}

impl Classification {
    pub const fn all() -> &'static [Self] {
        &[Self::Impossible, Self::Optimal, Self::Suboptimal]
    }

    /// one step of backward induction.
    /// any Impossible successor sinks the whole point, since the adversary
    /// will pick it. otherwise a single tight successor pins the point to
    /// the boundary. only when every successor has slack is the point loose.
    pub fn judge<I>(successors: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut class = Self::Suboptimal;
        for next in successors {
            match next {
                Self::Impossible => return Self::Impossible,
                _ => class = class.min(next),
            }
        }
        class
    }

    pub fn is_feasible(&self) -> bool {
        !matches!(self, Self::Impossible)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Impossible => write!(f, "Impossible"),
            Self::Optimal => write!(f, "Optimal"),
            Self::Suboptimal => write!(f, "Suboptimal"),
        }
    }
}
