use std::ops::Add;
use std::ops::Sub;

/// Any number the successor formulas can run on.
///
/// Reals (`f64`) carry the sampled points, while exact lattice arithmetic
/// (`i64`) carries the grid table and the one-round mesh. The formulas only
/// ever add and subtract, so both worlds share one implementation. `Default`
/// supplies zero.
pub trait Scalar: Copy + PartialOrd + Default + Add<Output = Self> + Sub<Output = Self> {
    fn zero() -> Self {
        Self::default()
    }
}

impl<T> Scalar for T where T: Copy + PartialOrd + Default + Add<Output = T> + Sub<Output = T> {}
