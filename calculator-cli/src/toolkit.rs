use anyhow::{ensure, Context, Result};
use calculator::numbers::{self, Matrix};
use itertools::Itertools;

/// Largest bound `primes` will sieve up to.
pub const MAX_PRIME_BOUND: usize = 100_000_000;

/// Parses `"1, 2.5,3"` into numbers.
pub fn parse_numbers(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .with_context(|| format!("'{}' is not a number", part))
        })
        .collect()
}

pub fn primes(n: usize) -> Result<String> {
    ensure!(
        n <= MAX_PRIME_BOUND,
        "the bound {} is larger than {}",
        n,
        MAX_PRIME_BOUND
    );
    Ok(format!("[{}]", numbers::prime_sieve(n).iter().join(", ")))
}

pub fn lcm(a: i64, b: i64) -> Result<u64> {
    numbers::lcm(a, b).with_context(|| format!("lcm({}, {}) does not fit in 64 bits", a, b))
}

pub fn mean(text: &str) -> Result<f64> {
    Ok(numbers::mean(&parse_numbers(text)?))
}

pub fn variance(text: &str) -> Result<String> {
    let values = parse_numbers(text)?;
    Ok(format!(
        "pop={} sample={}",
        numbers::variance_population(&values),
        numbers::variance_sample(&values)
    ))
}

pub fn matmul() -> Result<Matrix> {
    let a = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let b = Matrix::new(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]])?;
    a.multiply(&b)
}
