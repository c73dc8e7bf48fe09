//! Cerebral performance category
//!
//! CPC values are read leniently: anything that is not an integral number
//! between 1 and 5 has no category and is never favorable.

/// Lowest CPC category (normal cerebral function)
pub const CPC_MIN: u8 = 1;
/// Highest CPC category (brain death)
pub const CPC_MAX: u8 = 5;

/// Report labels of CPC categories 1 to 5
pub const CPC_LABELS: [&str; 5] = [
    "CPC 1 (normal cerebral function)",
    "CPC 2 (mild disability)",
    "CPC 3 (moderate disability)",
    "CPC 4 (severe disability)",
    "CPC 5 (vegetative state/death)",
];

/// Parse a CPC value into its category
///
/// Accepts integral numbers written as integers or floats (`2`, `2.0`).
/// Returns `None` for missing, non-numeric, non-integral or out-of-range values.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_cpc(value: Option<&str>) -> Option<u8> {
    let number = value?.trim().parse::<f64>().ok()?;
    if number.fract() != 0.0 || number < f64::from(CPC_MIN) || number > f64::from(CPC_MAX) {
        return None;
    }
    Some(number as u8)
}

/// 1 when the CPC category is 1 or 2, otherwise 0
///
/// Values [`parse_cpc`] rejects count as unfavorable rather than missing.
#[must_use]
pub fn favorable_cpc(value: Option<&str>) -> u8 {
    parse_cpc(value).map_or(0, |category| u8::from(category <= 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cpc() {
        assert_eq!(parse_cpc(Some("1")), Some(1));
        assert_eq!(parse_cpc(Some("5")), Some(5));
        assert_eq!(parse_cpc(Some(" 3.0 ")), Some(3));
        assert_eq!(parse_cpc(Some("0")), None);
        assert_eq!(parse_cpc(Some("6")), None);
        assert_eq!(parse_cpc(Some("2.5")), None);
        assert_eq!(parse_cpc(Some("unknown")), None);
        assert_eq!(parse_cpc(Some("NaN")), None);
        assert_eq!(parse_cpc(None), None);
    }

    #[test]
    fn test_favorable_cpc() {
        assert_eq!(favorable_cpc(Some("1")), 1);
        assert_eq!(favorable_cpc(Some("2.0")), 1);
        assert_eq!(favorable_cpc(Some("3")), 0);
        assert_eq!(favorable_cpc(Some("5")), 0);
        assert_eq!(favorable_cpc(Some("n/a")), 0);
        assert_eq!(favorable_cpc(Some("")), 0);
        assert_eq!(favorable_cpc(None), 0);
    }
}
