//! Number formatting for the report and the summary table

/// Placeholder for a value that could not be computed
pub const NOT_AVAILABLE: &str = "n/a";

/// Percentage of `count` in `total`, 0.0 when the total is zero
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Format a count with comma thousands separators
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

/// Format `count` as `"n (p%)"` with one decimal over `total`
#[must_use]
pub fn format_count_pct(count: usize, total: usize) -> String {
    format!(
        "{} ({:.1}%)",
        format_count(count),
        percentage(count, total)
    )
}

/// Format `"mean ± SD"` with one decimal
///
/// Returns [`NOT_AVAILABLE`] without a mean; a missing SD is shown as `n/a`.
#[must_use]
pub fn format_mean_sd(mean: Option<f64>, std_dev: Option<f64>) -> String {
    match (mean, std_dev) {
        (Some(mean), Some(sd)) => format!("{mean:.1} ± {sd:.1}"),
        (Some(mean), None) => format!("{mean:.1} ± {NOT_AVAILABLE}"),
        (None, _) => NOT_AVAILABLE.to_string(),
    }
}
