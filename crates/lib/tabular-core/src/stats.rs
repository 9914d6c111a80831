//! Numeric statistics over slices of non-missing values.
//!
//! All helpers operate on plain `f64` slices after missing values have
//! been dropped by the caller. Degenerate inputs (too few observations,
//! zero variance) yield `NaN` instead of panicking, and the formatter
//! renders `NaN` verbatim.

/// Returns the values sorted ascending with a total order over floats.
#[must_use]
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Arithmetic mean; `NaN` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator); `NaN` when n < 2.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let center = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - center).powi(2)).sum();
    (sum_sq / (n - 1) as f64).sqrt()
}

/// Percentile by linear interpolation between order statistics.
///
/// `p` is in `[0, 100]` and `sorted_values` must already be sorted
/// ascending. `NaN` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let rank = p / 100.0 * (sorted_values.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - rank.floor();
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * fraction
}

/// Median of a sorted slice.
#[must_use]
pub fn median(sorted_values: &[f64]) -> f64 {
    percentile(sorted_values, 50.0)
}

/// First modal value: the smallest value among the most frequent ones.
///
/// `NaN` for an empty slice. Operates on a sorted slice so ties resolve
/// to the smallest value, matching the conventional "first mode".
#[must_use]
pub fn mode(sorted_values: &[f64]) -> f64 {
    let mut best_value = f64::NAN;
    let mut best_count = 0usize;
    let mut index = 0usize;
    while index < sorted_values.len() {
        let value = sorted_values[index];
        let mut run = index + 1;
        while run < sorted_values.len() && sorted_values[run].total_cmp(&value).is_eq() {
            run += 1;
        }
        if run - index > best_count {
            best_count = run - index;
            best_value = value;
        }
        index = run;
    }
    best_value
}

/// Bias-corrected sample skewness; `NaN` when n < 3 or variance is zero.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn skewness(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 3 {
        return f64::NAN;
    }
    let n_f = n as f64;
    let center = mean(values);
    let m2: f64 = values.iter().map(|v| (v - center).powi(2)).sum::<f64>() / n_f;
    let m3: f64 = values.iter().map(|v| (v - center).powi(3)).sum::<f64>() / n_f;
    if m2 == 0.0 {
        return f64::NAN;
    }
    let g1 = m3 / m2.powf(1.5);
    g1 * (n_f * (n_f - 1.0)).sqrt() / (n_f - 2.0)
}

/// Bias-corrected excess kurtosis; `NaN` when n < 4 or variance is zero.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 4 {
        return f64::NAN;
    }
    let n_f = n as f64;
    let center = mean(values);
    let m2: f64 = values.iter().map(|v| (v - center).powi(2)).sum::<f64>() / n_f;
    let m4: f64 = values.iter().map(|v| (v - center).powi(4)).sum::<f64>() / n_f;
    if m2 == 0.0 {
        return f64::NAN;
    }
    let g2 = m4 / m2.powi(2) - 3.0;
    ((n_f + 1.0) * g2 + 6.0) * (n_f - 1.0) / ((n_f - 2.0) * (n_f - 3.0))
}

/// Pearson product-moment correlation coefficient.
///
/// `NaN` when fewer than two paired observations exist or either side has
/// zero variance.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len(), "paired observations required");
    if xs.len() < 2 {
        return f64::NAN;
    }
    let mean_x = mean(xs);
    let mean_y = mean(ys);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    cov / denominator
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const FIVE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn linear_percentiles_over_one_to_five() {
        let values = sorted(&FIVE);
        assert_eq!(mean(&values), 3.0);
        assert_eq!(median(&values), 3.0);
        assert_eq!(percentile(&values, 25.0), 2.0);
        assert_eq!(percentile(&values, 75.0), 4.0);
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 100.0), 5.0);
    }

    #[test]
    fn percentile_interpolates_between_order_statistics() {
        let values = sorted(&[1.0, 2.0, 3.0, 4.0]);
        assert!(close(percentile(&values, 25.0), 1.75));
        assert!(close(median(&values), 2.5));
    }

    #[test]
    fn sample_std_uses_n_minus_one() {
        assert!(close(sample_std(&FIVE), (2.5f64).sqrt()));
        assert!(sample_std(&[42.0]).is_nan());
    }

    #[test]
    fn mode_prefers_the_smallest_most_frequent_value() {
        let values = sorted(&[5.0, 1.0, 5.0, 1.0, 2.0]);
        assert_eq!(mode(&values), 1.0);
        assert_eq!(mode(&sorted(&[3.0, 3.0, 7.0])), 3.0);
        assert!(mode(&[]).is_nan());
    }

    #[test]
    fn skewness_of_a_symmetric_sample_is_zero() {
        assert!(close(skewness(&FIVE), 0.0));
        assert!(skewness(&[1.0, 2.0]).is_nan());
        assert!(skewness(&[2.0, 2.0, 2.0]).is_nan());
    }

    #[test]
    fn excess_kurtosis_matches_the_corrected_estimator() {
        // Uniform 1..=5 has corrected excess kurtosis of -1.2.
        assert!(close(excess_kurtosis(&FIVE), -1.2));
        assert!(excess_kurtosis(&[1.0, 2.0, 3.0]).is_nan());
    }

    #[test]
    fn pearson_handles_perfect_and_degenerate_correlation() {
        let ys: Vec<f64> = FIVE.iter().map(|v| 2.0 * v + 1.0).collect();
        assert!(close(pearson(&FIVE, &ys), 1.0));
        let flipped: Vec<f64> = FIVE.iter().map(|v| -v).collect();
        assert!(close(pearson(&FIVE, &flipped), -1.0));
        let constant = [7.0; 5];
        assert!(pearson(&FIVE, &constant).is_nan());
    }
}
