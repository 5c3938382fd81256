//! Capture extraction for date-shape productions.

use regex::Captures;

/// Parse capture group `idx` as an unsigned integer.
pub fn group_u32(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// A month capture; rejects anything outside the calendar instead of letting
/// it wrap into a neighboring year.
pub fn month_group(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    let month = group_u32(caps, idx)?;
    (1..=12).contains(&month).then_some(month)
}

/// Expand a year capture. Two-digit years pivot at 50: "51" is 1951, "49" is
/// 2049. Anything longer parses as written.
pub fn year_group(caps: &Captures<'_>, idx: usize) -> Option<i32> {
    let raw = caps.get(idx)?.as_str();
    let value: i32 = raw.parse().ok()?;
    if raw.len() == 2 {
        Some(if value > 50 { 1900 + value } else { 2000 + value })
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps<'t>(pattern: &str, text: &'t str) -> Captures<'t> {
        regex::Regex::new(pattern).unwrap().captures(text).unwrap()
    }

    #[test]
    fn two_digit_years_pivot_at_fifty() {
        let c = caps(r"(\d{2,4})", "49");
        assert_eq!(year_group(&c, 1), Some(2049));
        let c = caps(r"(\d{2,4})", "51");
        assert_eq!(year_group(&c, 1), Some(1951));
        let c = caps(r"(\d{2,4})", "50");
        assert_eq!(year_group(&c, 1), Some(2050));
    }

    #[test]
    fn four_digit_years_parse_as_written() {
        let c = caps(r"(\d{2,4})", "2025");
        assert_eq!(year_group(&c, 1), Some(2025));
    }

    #[test]
    fn month_must_be_in_calendar() {
        let c = caps(r"(\d{1,2})", "13");
        assert_eq!(month_group(&c, 1), None);
        let c = caps(r"(\d{1,2})", "12");
        assert_eq!(month_group(&c, 1), Some(12));
        let c = caps(r"(\d{1,2})", "0");
        assert_eq!(month_group(&c, 1), None);
    }
}
