//! The single conversion boundary between raw table cells and typed stats.
//!
//! Statsguru cells are loosely typed: `"-"` for no data, `"254*"` for a
//! not-out high score, `"1839+"` for keeper dismissals, plain decimals for
//! averages. Both functions here are total: every input produces a value of
//! the target kind, falling back to the caller's default. No other module
//! may coerce cell text to numbers.

/// Trim the cell and strip sentinel/suffix markers.
///
/// Returns `None` when the cell carries no numeric value at all.
fn cleaned(raw: &str) -> Option<&str> {
    let value = raw.trim();
    if value.is_empty() || value == "-" {
        return None;
    }
    Some(value.trim_end_matches(['*', '+']))
}

/// Normalize a raw cell to an integer, truncating decimals.
pub fn to_i64(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(cleaned)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v as i64)
        .unwrap_or(default)
}

/// Normalize a raw cell to a float.
pub fn to_f64(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(cleaned)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_return_default() {
        for raw in [None, Some(""), Some("-"), Some("  "), Some("NaN")] {
            assert_eq!(to_i64(raw, 0), 0, "int default for {raw:?}");
            assert_eq!(to_i64(raw, 7), 7, "int custom default for {raw:?}");
            assert_eq!(to_f64(raw, 0.0), 0.0, "float default for {raw:?}");
            assert_eq!(to_f64(raw, 1.5), 1.5, "float custom default for {raw:?}");
        }
    }

    #[test]
    fn test_not_out_and_plus_markers_stripped() {
        assert_eq!(to_i64(Some("45*"), 0), 45);
        assert_eq!(to_i64(Some("100+"), 0), 100);
        assert_eq!(to_f64(Some("45*"), 0.0), 45.0);
        assert_eq!(to_f64(Some("100+"), 0.0), 100.0);
    }

    #[test]
    fn test_decimal_strings_truncate_to_int() {
        assert_eq!(to_i64(Some("45.50"), 0), 45);
        assert_eq!(to_f64(Some("45.50"), 0.0), 45.50);
    }

    #[test]
    fn test_garbage_returns_default() {
        assert_eq!(to_i64(Some("dnb"), 0), 0);
        assert_eq!(to_f64(Some("12a"), 0.0), 0.0);
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert_eq!(to_i64(Some(" 186 "), 0), 186);
        assert_eq!(to_f64(Some(" 53.78 "), 0.0), 53.78);
    }
}
