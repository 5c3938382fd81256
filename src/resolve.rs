//! Calendar resolution: turn a recognized shape into an [`Outcome`].
//!
//! Resolution is where "now" enters: missing months default to the current
//! month, missing years to the current year, and a month that already passed
//! this year (written without a year) produces a clarification instead of a
//! silent guess. Day numbers are clamped into the resolved month, so
//! "31.2.2025" lands on February 28 rather than erroring.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::api::{Clarification, Outcome};
use crate::date_expr::{DateExpr, DateInterval};

/// Resolve `expr` against the reference time. `None` means the shape did not
/// land on real calendar dates and the match should count as no match.
pub(crate) fn resolve(expr: &DateExpr, reference: NaiveDateTime) -> Option<Outcome> {
    let today = reference.date();
    let (current_year, current_month) = (today.year(), today.month());

    match *expr {
        DateExpr::SingleDay { day, month, year } => {
            if year.is_none() && month < current_month {
                let this_month = DateInterval::single(clamped(current_year, current_month, day)?);
                let next_year = DateInterval::single(clamped(current_year + 1, month, day)?);
                return Some(Outcome::NeedsClarification(clarify_single(this_month, next_year)));
            }
            let date = clamped(year.unwrap_or(current_year), month, day)?;
            Some(Outcome::Confirmed(DateInterval::single(date)))
        }
        DateExpr::DayRange { from_day, to_day, month, year } => {
            let month = month.unwrap_or(current_month);
            if year.is_none() && month < current_month {
                let this_month = DateInterval::new(
                    clamped(current_year, current_month, from_day)?,
                    clamped(current_year, current_month, to_day)?,
                );
                let next_year = DateInterval::new(
                    clamped(current_year + 1, month, from_day)?,
                    clamped(current_year + 1, month, to_day)?,
                );
                return Some(Outcome::NeedsClarification(clarify_range(this_month, next_year)));
            }
            let year = year.unwrap_or(current_year);
            let interval = DateInterval::new(clamped(year, month, from_day)?, clamped(year, month, to_day)?);
            Some(Outcome::Confirmed(interval))
        }
        DateExpr::DottedRange { from_day, from_month, to_day, to_month, year } => {
            if year.is_none() && from_month < current_month {
                let this_month = DateInterval::new(
                    clamped(current_year, current_month, from_day)?,
                    clamped(current_year, current_month, to_day)?,
                );
                let next_year = DateInterval::new(
                    clamped(current_year + 1, from_month, from_day)?,
                    clamped(current_year + 1, to_month, to_day)?,
                );
                return Some(Outcome::NeedsClarification(clarify_range(this_month, next_year)));
            }
            let year = year.unwrap_or(current_year);
            let interval =
                DateInterval::new(clamped(year, from_month, from_day)?, clamped(year, to_month, to_day)?);
            Some(Outcome::Confirmed(interval))
        }
    }
}

/// Last day of `month`, leap-February aware.
pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let last = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?.pred_opt()?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };
    Some(last.day())
}

/// Build a date with `day` clamped into the month (0 clamps up to 1).
pub(crate) fn clamped(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.clamp(1, last))
}

fn clarify_range(this_month: DateInterval, next_year: DateInterval) -> Clarification {
    let prompt = format!(
        "Zadal jste měsíc, který už proběhl. Myslíte spíš **{} až {}** (tento měsíc), \
         nebo **{} až {}** (příští rok)? Odpovězte prosím \"tento měsíc\" nebo \"příští rok\", \
         případně napište přesná data.",
        this_month.from, this_month.to, next_year.from, next_year.to
    );
    Clarification { prompt, this_month, next_year }
}

fn clarify_single(this_month: DateInterval, next_year: DateInterval) -> Clarification {
    let prompt = format!(
        "Zadal jste měsíc, který už proběhl. Myslíte spíš **{}** (tento měsíc), \
         nebo **{}** (příští rok)? Odpovězte prosím \"tento měsíc\" nebo \"příští rok\", \
         případně napište přesná data.",
        this_month.from, next_year.from
    );
    Clarification { prompt, this_month, next_year }
}
