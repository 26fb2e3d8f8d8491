use num_bigint::BigUint;
use num_traits::One;

/// Greatest common divisor of the absolute values, by Euclid's algorithm.
/// `gcd(0, 0)` is `0`. Unsigned, as `|i64::MIN|` does not fit in an `i64`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of the absolute values. Zero if either argument is
/// zero, `None` if the result does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use calculator::numbers::lcm;
///
/// assert_eq!(lcm(-4, 6), Some(12));
/// assert_eq!(lcm(i64::MAX, i64::MAX - 1), None);
/// ```
pub fn lcm(a: i64, b: i64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a.unsigned_abs() / gcd(a, b)).checked_mul(b.unsigned_abs())
}

/// Exact `n!`.
///
/// # Examples
///
/// ```
/// use calculator::numbers::factorial;
///
/// assert_eq!(factorial(5).to_string(), "120");
/// ```
pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |product, i| product * i)
}

/// All primes up to and including `n`, by the sieve of Eratosthenes.
pub fn prime_sieve(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let mut composite = vec![false; n + 1];
    let mut primes = Vec::new();
    for i in 2..=n {
        if composite[i] {
            continue;
        }
        primes.push(i);
        for multiple in (i.saturating_mul(i)..=n).step_by(i) {
            composite[multiple] = true;
        }
    }
    primes
}
