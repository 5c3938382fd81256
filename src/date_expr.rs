use chrono::NaiveDate;
use std::fmt;

/// A date shape recognized in guest text, before calendar resolution.
///
/// Shapes carry exactly what the guest wrote: day numbers, an optional month
/// and an optional (already pivot-expanded) year. Defaulting against "now",
/// day clamping and the past-month check all happen later, in
/// [`crate::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateExpr {
    /// Both endpoints carry a month: "20.09.–24.09.2025", "20.9. až 2.10."
    DottedRange { from_day: u32, from_month: u32, to_day: u32, to_month: u32, year: Option<i32> },
    /// Day pair with at most one trailing month/year: "od 15 do 17. 8. 2025",
    /// "15–17.8". Month and year, when present, apply to both days.
    DayRange { from_day: u32, to_day: u32, month: Option<u32>, year: Option<i32> },
    /// One day: "15. 8. 2025", "12/09/2025".
    SingleDay { day: u32, month: u32, year: Option<i32> },
}

/// A stay interval: arrival and departure calendar dates, `from <= to`.
///
/// Whether `to` counts as a stayed night is the caller's convention; the
/// helpers here ([`nights`](DateInterval::nights), [`days`](DateInterval::days))
/// treat the departure day as not stayed, i.e. they cover `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateInterval {
    /// Build an interval from two dates in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b { Self { from: a, to: b } } else { Self { from: b, to: a } }
    }

    /// A one-day interval (`from == to`).
    pub fn single(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    /// Number of nights, departure day not counted.
    pub fn nights(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// The dates in `[from, to)`, one per night.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take_while(move |d| *d < self.to)
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn new_orders_endpoints() {
        let iv = DateInterval::new(d(2025, 9, 24), d(2025, 9, 20));
        assert_eq!(iv.from, d(2025, 9, 20));
        assert_eq!(iv.to, d(2025, 9, 24));
    }

    #[test]
    fn nights_do_not_count_departure_day() {
        let iv = DateInterval::new(d(2025, 9, 20), d(2025, 9, 24));
        assert_eq!(iv.nights(), 4);
        let days: Vec<_> = iv.days().collect();
        assert_eq!(days, vec![d(2025, 9, 20), d(2025, 9, 21), d(2025, 9, 22), d(2025, 9, 23)]);
    }

    #[test]
    fn single_day_has_no_nights() {
        let iv = DateInterval::single(d(2025, 2, 28));
        assert_eq!(iv.nights(), 0);
        assert_eq!(iv.days().count(), 0);
    }

    #[test]
    fn renders_iso_pair() {
        let iv = DateInterval::new(d(2025, 9, 20), d(2025, 9, 24));
        assert_eq!(iv.to_string(), "2025-09-20 → 2025-09-24");
    }
}
