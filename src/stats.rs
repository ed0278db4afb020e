//! Descriptive statistics over trial results.
//!
//! Undefined results (mean of nothing, spread of a single value) come back as
//! `NaN` rather than an error, so callers can print them as-is.

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation (n - 1 denominator), via Welford's update.
pub fn stddev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let mut count = 0.0;
    let mut running_mean = 0.0;
    let mut m2 = 0.0;
    for &x in data {
        count += 1.0;
        let delta = x - running_mean;
        running_mean += delta / count;
        m2 += delta * (x - running_mean);
    }
    (m2 / (count - 1.0)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[0.5]), 0.5);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn sample_stddev() {
        // variance of 2, 4, 4, 4, 5, 5, 7, 9 with n - 1 is 32 / 7
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((stddev(&data) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(stddev(&[3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn stddev_needs_two_values() {
        assert!(stddev(&[0.6]).is_nan());
        assert!(stddev(&[]).is_nan());
    }
}
