use crate::Regret;
use crate::Round;
use crate::Tick;
use crate::game::Classification;
use crate::game::RegretVector;

/// Least realizable r2 index for every (r0, r1) index pair on a lattice of
/// step 1/granularity, with `round` rounds left.
///
/// `None` marks cells where no r2 up to the table's extent is realizable.
/// The table is symmetric in its two axes and non-increasing along each.
/// Built once by [`GridBuilder`](super::GridBuilder), read-only afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrontierTable {
    round: Round,
    granularity: usize,
    cells: Vec<Option<Tick>>,
}

impl FrontierTable {
    pub(super) fn new(round: Round, granularity: usize) -> Self {
        let side = granularity * round + 1;
        Self {
            round,
            granularity,
            cells: vec![None; side * side],
        }
    }

    pub fn round(&self) -> Round {
        self.round
    }
    pub fn granularity(&self) -> usize {
        self.granularity
    }
    /// largest index along each axis. a budget of `round` never binds,
    /// so coordinates past this are as good as this.
    pub fn extent(&self) -> Tick {
        (self.granularity * self.round) as Tick
    }
    pub fn side(&self) -> usize {
        self.granularity * self.round + 1
    }

    fn index(&self, r0: Tick, r1: Tick) -> Option<usize> {
        let extent = self.extent();
        match (0..=extent).contains(&r0) && (0..=extent).contains(&r1) {
            true => Some(r0 as usize * self.side() + r1 as usize),
            false => None,
        }
    }

    /// the stored boundary index, None if undefined or out of range
    pub fn get(&self, r0: Tick, r1: Tick) -> Option<Tick> {
        self.index(r0, r1).and_then(|i| self.cells[i])
    }

    pub(super) fn set(&mut self, r0: Tick, r1: Tick, value: Option<Tick>) {
        if let Some(i) = self.index(r0, r1) {
            self.cells[i] = value;
        }
    }

    /// the boundary r2 at real coordinates, snapped to the nearest cell
    pub fn boundary(&self, x: Regret, y: Regret) -> Option<Regret> {
        let scale = self.granularity as Regret;
        let snap = |v: Regret| (v * scale).round() as Tick;
        self.get(snap(x), snap(y)).map(|h| h as Regret / scale)
    }

    /// where a lattice budget with `round` rounds left sits relative to
    /// this table's frontier. coordinates past the extent are clamped.
    pub fn position(&self, cell: &[Tick; 3]) -> Classification {
        if cell.iter().any(|x| *x < 0) {
            return Classification::Impossible;
        }
        let [r0, r1, r2] = cell.map(|x| x.min(self.extent()));
        match self.get(r0, r1) {
            None => Classification::Impossible,
            Some(h) => match r2.cmp(&h) {
                std::cmp::Ordering::Less => Classification::Impossible,
                std::cmp::Ordering::Equal => Classification::Optimal,
                std::cmp::Ordering::Greater => Classification::Suboptimal,
            },
        }
    }

    /// every defined cell as a real boundary point (i/G, j/G, h/G)
    pub fn points(&self) -> impl Iterator<Item = RegretVector> + '_ {
        let scale = self.granularity as Regret;
        let extent = self.extent();
        (0..=extent)
            .flat_map(move |r0| (0..=extent).map(move |r1| (r0, r1)))
            .filter_map(move |(r0, r1)| self.get(r0, r1).map(|h| [r0, r1, h]))
            .map(move |cell| RegretVector::from(cell.map(|x| x as Regret / scale)))
    }

    pub fn defined(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_symmetric(&self) -> bool {
        let extent = self.extent();
        (0..=extent).all(|r0| (0..=extent).all(|r1| self.get(r0, r1) == self.get(r1, r0)))
    }
}

impl std::fmt::Display for FrontierTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let extent = self.extent();
        for r0 in 0..=extent {
            let row = (0..=extent)
                .map(|r1| match self.get(r0, r1) {
                    Some(h) => format!("{:>4}", h),
                    None => format!("{:>4}", "·"),
                })
                .collect::<Vec<_>>()
                .join("");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
