//! Number-theory, statistics and matrix helpers offered next to the evaluator.

pub mod matrix;
pub mod statistics;
pub mod toolkit;

pub use matrix::Matrix;
pub use statistics::{mean, summary, variance_population, variance_sample, Summary};
pub use toolkit::{factorial, gcd, lcm, prime_sieve};
