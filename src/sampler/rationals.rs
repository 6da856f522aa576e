use crate::Regret;

/// The Farey sequence of order `n`: every reduced fraction p/q in [0, 1]
/// with q <= n, ascending and without repeats.
pub struct Farey {
    order: i64,
    a: i64,
    b: i64,
    c: i64,
    d: i64,
}

impl Farey {
    pub fn new(order: usize) -> Self {
        let order = order.max(1) as i64;
        Self {
            order,
            a: 0,
            b: 1,
            c: 1,
            d: order,
        }
    }

    /// number of terms of order n, 1 + sum of Euler's totient up to n
    pub fn size(order: usize) -> usize {
        1 + (1..=order.max(1))
            .map(|q| (1..=q).filter(|p| gcd(*p, q) == 1).count())
            .sum::<usize>()
    }
}

impl Iterator for Farey {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<Self::Item> {
        if self.a > self.b {
            return None;
        }
        let term = (self.a, self.b);
        if self.c > self.order {
            // past 1/1, mark exhausted
            self.a = 1;
            self.b = 0;
        } else {
            let k = (self.order + self.b) / self.d;
            let (c, d) = (k * self.c - self.a, k * self.d - self.b);
            self.a = self.c;
            self.b = self.d;
            self.c = c;
            self.d = d;
        }
        Some(term)
    }
}

/// rational coefficients for the two-round sampler
pub fn rationals(order: usize) -> Vec<Regret> {
    Farey::new(order)
        .map(|(p, q)| p as Regret / q as Regret)
        .collect()
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_five() {
        let terms = Farey::new(5).collect::<Vec<_>>();
        assert!(
            terms
                == vec![
                    (0, 1),
                    (1, 5),
                    (1, 4),
                    (1, 3),
                    (2, 5),
                    (1, 2),
                    (3, 5),
                    (2, 3),
                    (3, 4),
                    (4, 5),
                    (1, 1),
                ]
        );
    }

    #[test]
    fn order_one_is_endpoints() {
        assert!(rationals(1) == vec![0., 1.]);
    }

    #[test]
    fn strictly_ascending() {
        let values = rationals(30);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(values.first() == Some(&0.));
        assert!(values.last() == Some(&1.));
        assert!(values.len() == Farey::size(30));
    }

    #[test]
    fn sizes() {
        assert!(Farey::size(4) == 7);
        assert!(Farey::size(6) == 13);
        assert!(Farey::size(10) == 33);
    }
}
