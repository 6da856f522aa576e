use crate::Regret;
use crate::Round;
use crate::error::FrontierError;

pub fn factorial(n: i64) -> Result<u128, FrontierError> {
    if n < 0 {
        return Err(FrontierError::Domain(format!("factorial of {}", n)));
    }
    (2..=n as u128).try_fold(1u128, |acc, k| {
        acc.checked_mul(k)
            .ok_or_else(|| FrontierError::Domain(format!("factorial of {} overflows", n)))
    })
}

/// n choose k, extended with (-1 choose -1) = 1 and (n choose -1) = 0.
/// built up one factor at a time, so it stays finite far past where n!
/// leaves u128.
pub fn choose(n: i64, k: i64) -> Result<Regret, FrontierError> {
    if k == -1 {
        return Ok(if n == -1 { 1. } else { 0. });
    }
    if n < 0 || k < 0 || k > n {
        return Err(FrontierError::Domain(format!("{} choose {}", n, k)));
    }
    let k = k.min(n - k);
    Ok((1..=k).fold(1., |acc, j| {
        acc * (n - k + j) as Regret / j as Regret
    }))
}

/// f_T(i), the i-th vertex coordinate of the two-expert frontier
pub fn vertex(i: usize, rounds: Round) -> Result<Regret, FrontierError> {
    if i > rounds {
        return Err(FrontierError::Domain(format!(
            "vertex {} of a {} round frontier",
            i, rounds
        )));
    }
    let t = rounds as i64;
    let i = i as i64;
    (1..=i).try_fold(0., |sum, j| {
        let weight = choose(t - j - 1, t - i - 1)?;
        Ok(sum + j as Regret * (2 as Regret).powi((j - t) as i32) * weight)
    })
}
