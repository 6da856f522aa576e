use crate::Tick;

/// Integer points (p0, p1, p2) with p_i >= 0 and p0 + p1 + p2 = n.
///
/// Enumerated with p0 outermost and p1 ascending, p2 taking the remainder.
/// There are (n+1)(n+2)/2 of them.
#[derive(Debug, Clone)]
pub struct Simplex {
    n: Tick,
    p0: Tick,
    p1: Tick,
}

impl Simplex {
    pub fn new(n: usize) -> Self {
        Self {
            n: n as Tick,
            p0: 0,
            p1: 0,
        }
    }
    pub fn size(n: usize) -> usize {
        (n + 1) * (n + 2) / 2
    }
}

impl Iterator for Simplex {
    type Item = [Tick; 3];
    fn next(&mut self) -> Option<Self::Item> {
        if self.p0 > self.n {
            return None;
        }
        let item = [self.p0, self.p1, self.n - self.p0 - self.p1];
        self.p1 += 1;
        if self.p1 > self.n - self.p0 {
            self.p1 = 0;
            self.p0 += 1;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausts_simplex() {
        for n in [0, 1, 4, 12] {
            let points = Simplex::new(n).collect::<Vec<_>>();
            assert!(points.len() == Simplex::size(n));
            assert!(points.iter().all(|p| p.iter().sum::<Tick>() == n as Tick));
            assert!(points.iter().flatten().all(|x| *x >= 0));
        }
    }

    #[test]
    fn unique_points() {
        let ref mut seen = std::collections::HashSet::new();
        assert!(Simplex::new(9).all(|p| seen.insert(p)));
    }
}
