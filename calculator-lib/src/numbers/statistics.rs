use itertools::{Itertools, MinMaxResult};

/// Arithmetic mean, NaN for no values.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Variance of the values as a whole population, NaN for no values.
pub fn variance_population(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    squared_deviations(values) / values.len() as f64
}

/// Unbiased sample variance, NaN for fewer than two values.
pub fn variance_sample(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    squared_deviations(values) / (values.len() - 1) as f64
}

fn squared_deviations(values: &[f64]) -> f64 {
    let mean = mean(values);
    values.iter().map(|value| (value - mean).powi(2)).sum()
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Count, sum, extremes and average in one pass over the values.
///
/// With no values, `min` is positive infinity, `max` negative infinity and the
/// average zero.
pub fn summary(values: &[f64]) -> Summary {
    let (min, max) = match values.iter().copied().minmax() {
        MinMaxResult::NoElements => (f64::INFINITY, f64::NEG_INFINITY),
        MinMaxResult::OneElement(value) => (value, value),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let sum: f64 = values.iter().sum();
    let average = if values.is_empty() {
        0.0
    } else {
        sum / values.len() as f64
    };
    Summary {
        count: values.len(),
        sum,
        min,
        max,
        average,
    }
}
