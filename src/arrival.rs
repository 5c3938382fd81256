//! Arrival stamps ("28.09.2025 18:30") and one-night stays.
//!
//! Onboarding asks guests for an exact arrival date and time in the
//! `DD.MM.YYYY HH:MM` form, so this extraction is strict on purpose; the
//! tolerant free-form shapes live in the rule scanner, not here.

use chrono::{NaiveDate, NaiveTime};

use crate::date_expr::DateInterval;
use crate::resolve::clamped;
use crate::text;

/// An arrival stamp: the date, plus the time of day when the guest gave one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl Arrival {
    /// The stay implied by an arrival alone: one night, `[date, date + 1)`.
    pub fn one_night(&self) -> Option<DateInterval> {
        let departure = self.date.succ_opt()?;
        Some(DateInterval::new(self.date, departure))
    }
}

/// Extract a strict `DD.MM.YYYY [HH:MM]` arrival stamp from free text.
///
/// The day is clamped into the month; hour and minute are clamped into the
/// clock (chat transcripts contain things like "24:30"). A month outside the
/// calendar means no arrival.
pub fn extract_arrival(input: &str) -> Option<Arrival> {
    let folded = text::normalize(input);
    let caps = regex!(r"\b(\d{2})\.(\d{2})\.(\d{4})(?:[ t]+(\d{1,2})[:.](\d{2}))?\b").captures(&folded)?;

    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    let date = clamped(year, month, day)?;

    let time = match (caps.get(4), caps.get(5)) {
        (Some(hour), Some(minute)) => {
            let hour: u32 = hour.as_str().parse().ok()?;
            let minute: u32 = minute.as_str().parse().ok()?;
            NaiveTime::from_hms_opt(hour.min(23), minute.min(59), 0)
        }
        _ => None,
    };

    Some(Arrival { date, time })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn extracts_date_and_time() {
        let arrival = extract_arrival("Přijedu 28.09.2025 18:30, jedna noc").unwrap();
        assert_eq!(arrival.date, d(2025, 9, 28));
        assert_eq!(arrival.time, NaiveTime::from_hms_opt(18, 30, 0));
    }

    #[test]
    fn time_is_optional() {
        let arrival = extract_arrival("28.09.2025").unwrap();
        assert_eq!(arrival.date, d(2025, 9, 28));
        assert_eq!(arrival.time, None);
    }

    #[test]
    fn dotted_time_separator_works() {
        let arrival = extract_arrival("28.09.2025 18.30").unwrap();
        assert_eq!(arrival.time, NaiveTime::from_hms_opt(18, 30, 0));
    }

    #[test]
    fn out_of_clock_time_is_clamped() {
        let arrival = extract_arrival("28.09.2025 24:75").unwrap();
        assert_eq!(arrival.time, NaiveTime::from_hms_opt(23, 59, 0));
    }

    #[test]
    fn day_is_clamped_into_the_month() {
        let arrival = extract_arrival("31.02.2025").unwrap();
        assert_eq!(arrival.date, d(2025, 2, 28));
    }

    #[test]
    fn month_outside_calendar_means_no_arrival() {
        assert!(extract_arrival("28.13.2025").is_none());
    }

    #[test]
    fn one_night_spans_to_the_next_day() {
        let arrival = extract_arrival("28.09.2025").unwrap();
        let stay = arrival.one_night().unwrap();
        assert_eq!(stay, DateInterval::new(d(2025, 9, 28), d(2025, 9, 29)));
        assert_eq!(stay.nights(), 1);
    }

    #[test]
    fn one_night_crosses_month_boundaries() {
        let arrival = extract_arrival("30.09.2025").unwrap();
        assert_eq!(arrival.one_night().unwrap(), DateInterval::new(d(2025, 9, 30), d(2025, 10, 1)));
    }

    #[test]
    fn loose_dates_are_not_arrival_stamps() {
        assert!(extract_arrival("15.8.").is_none());
        assert!(extract_arrival("dorazíme večer").is_none());
    }
}
