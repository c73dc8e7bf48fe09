//! Descriptive statistics over continuous variables

/// Descriptive statistics summarizing a set of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of observations
    pub count: usize,
    /// The minimum value
    pub min: f64,
    /// The maximum value
    pub max: f64,
    /// The arithmetic mean
    pub mean: f64,
    /// The median; the mean of the two middle values for an even count
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator), `None` below two observations
    pub std_dev: Option<f64>,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// Non-finite values are ignored.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if at least one finite value is present
    /// * `None` - otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// # use ohca_report::algorithm::statistics::DescriptiveStats;
    /// let stats = DescriptiveStats::new([4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 4.0);
    /// assert_eq!(stats.median, 2.5);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;

        let mid = count / 2;
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
        } else {
            sorted_values[mid]
        };

        let std_dev = (count > 1).then(|| {
            let variance = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0);
            variance.sqrt()
        });

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            std_dev,
        })
    }
}
