//! Age bands for stratified outcomes

use std::fmt;

/// Age in years at which the older band starts
pub const AGE_BAND_THRESHOLD: f64 = 65.0;

/// Two-way age stratification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeBand {
    /// Younger than 65
    Under65,
    /// 65 or older
    From65,
}

impl AgeBand {
    /// Both bands in report order
    pub const ALL: [Self; 2] = [Self::Under65, Self::From65];

    /// Report label of the band
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under65 => "<65",
            Self::From65 => "≥65",
        }
    }

    /// Labels of both bands in report order
    #[must_use]
    pub fn labels() -> [&'static str; 2] {
        Self::ALL.map(Self::label)
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band of an age, `None` when the age is missing or not a finite number
///
/// Records without a band are left out of every age-stratified statistic.
#[must_use]
pub fn age_band(age: Option<f64>) -> Option<AgeBand> {
    let age = age.filter(|a| a.is_finite())?;
    Some(if age < AGE_BAND_THRESHOLD {
        AgeBand::Under65
    } else {
        AgeBand::From65
    })
}
