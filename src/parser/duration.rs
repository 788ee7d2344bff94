//! Compact duration syntax
//!
//! Durations are written as an optionally signed sequence of decimal numbers,
//! each followed by a unit suffix, e.g. `"1h30m"`, `"0h50m00s"`, `"1.5h"` or
//! `"-2m"`. The bare string `"0"` is accepted as zero.

use crate::error::{ActivityError, Result};
use crate::types::ActivityDuration;

/// Longest representable duration, in nanoseconds (about 2562047h47m16s)
const MAX_DURATION_NANOS: f64 = i64::MAX as f64;

/// Seconds per unit suffix
fn unit_seconds(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1e-9),
        "us" | "µs" | "μs" => Some(1e-6),
        "ms" => Some(1e-3),
        "s" => Some(1.0),
        "m" => Some(60.0),
        "h" => Some(3600.0),
        _ => None,
    }
}

/// Parse a compact duration string into an [`ActivityDuration`]
pub fn parse_duration(input: &str) -> Result<ActivityDuration> {
    let invalid = || ActivityError::InvalidDuration(format!("{:?}", input));

    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if body == "0" {
        return Ok(ActivityDuration::ZERO);
    }
    if body.is_empty() {
        return Err(invalid());
    }

    let mut total = 0.0;
    let mut rest = body;
    while !rest.is_empty() {
        let (value, after_number) = take_number(rest).ok_or_else(invalid)?;

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        if unit_len == 0 {
            return Err(ActivityError::InvalidDuration(format!(
                "missing unit in duration {:?}",
                input
            )));
        }
        let unit = &after_number[..unit_len];
        let scale = unit_seconds(unit).ok_or_else(|| {
            ActivityError::InvalidDuration(format!(
                "unknown unit {:?} in duration {:?}",
                unit, input
            ))
        })?;

        total += value * scale;
        rest = &after_number[unit_len..];
    }

    if !total.is_finite() || total * 1e9 > MAX_DURATION_NANOS {
        return Err(invalid());
    }

    Ok(ActivityDuration::from_secs(if negative { -total } else { total }))
}

/// Split a leading `digits[.digits]` number off `s`
///
/// Returns `None` when there is no digit on either side of the point.
fn take_number(s: &str) -> Option<(f64, &str)> {
    let bytes = s.as_bytes();
    let int_end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());

    let mut end = int_end;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).map_or(false, |b| b.is_ascii_digit()) {
            end += 1;
            frac_digits += 1;
        }
    }

    if int_end == 0 && frac_digits == 0 {
        return None;
    }

    let value = s[..end].parse::<f64>().ok()?;
    Some((value, &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(input: &str) -> f64 {
        parse_duration(input).unwrap().as_secs()
    }

    #[test]
    fn test_parse_compound_durations() {
        assert_eq!(secs("1h30m"), 5400.0);
        assert_eq!(secs("0h50m00s"), 3000.0);
        assert_eq!(secs("3h00m00s"), 10800.0);
        assert_eq!(secs("45s"), 45.0);
        assert_eq!(secs("2h"), 7200.0);
    }

    #[test]
    fn test_parse_fractional_and_small_units() {
        assert_eq!(secs("1.5h"), 5400.0);
        assert_eq!(secs(".5m"), 30.0);
        assert_eq!(secs("1500ms"), 1.5);
        assert!((secs("250us") - 0.00025).abs() < 1e-12);
        assert!((secs("250µs") - 0.00025).abs() < 1e-12);
        assert!((secs("10ns") - 1e-8).abs() < 1e-15);
    }

    #[test]
    fn test_parse_signs_and_zero() {
        assert_eq!(secs("-1h"), -3600.0);
        assert_eq!(secs("+1m"), 60.0);
        assert_eq!(secs("0"), 0.0);
        assert_eq!(secs("-0"), 0.0);
        assert_eq!(secs("0s"), 0.0);
    }

    #[test]
    fn test_reject_malformed_durations() {
        for input in ["", "-", "1", "h", "1x", "1h30", ".h", "1hh", "abc", " 1h", "1h "] {
            let err = parse_duration(input).unwrap_err();
            assert!(
                matches!(err, ActivityError::InvalidDuration(_)),
                "{:?} should be rejected, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_reject_out_of_range_durations() {
        assert_eq!(secs("2562047h"), 2562047.0 * 3600.0);
        for input in ["2562048h", "3000000h", "-3000000h", "9999999999999999999s"] {
            assert!(
                matches!(parse_duration(input), Err(ActivityError::InvalidDuration(_))),
                "{:?} should be out of range",
                input
            );
        }
    }

    #[test]
    fn test_from_str_delegates() {
        let d: ActivityDuration = "1h".parse().unwrap();
        assert_eq!(d.hours(), 1.0);
    }
}
