//! Resolving the guest's answer to a clarification prompt.
//!
//! The resolver never re-derives dates from the clock: it extracts the literal
//! ISO dates the clarification already rendered and showed the guest, so what
//! gets confirmed is exactly what was offered, even when the answer arrives on
//! a later day than the question.

use chrono::NaiveDate;
use regex::Match;

use crate::date_expr::DateInterval;
use crate::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChoiceKind {
    ThisMonth,
    NextYear,
}

fn classify(choice: &str) -> Option<ChoiceKind> {
    let folded = text::normalize(choice);
    if folded.contains("tento mesic") {
        Some(ChoiceKind::ThisMonth)
    } else if folded.contains("pristi rok") {
        Some(ChoiceKind::NextYear)
    } else {
        None
    }
}

fn iso_date(m: Match<'_>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok()
}

/// Pick the interval the guest chose out of a previously rendered
/// clarification prompt.
///
/// `choice` is classified as "tento měsíc" or "příští rok" (diacritics
/// optional); anything else returns `None`, and the caller should re-run
/// the parser on the reply, since the guest may have typed an explicit date
/// instead. The prompt is scanned for `**ISO až ISO**` pairs first, falling
/// back to bare `**ISO**` dates; candidates are picked by position (this-month
/// first, next-year second). Markers that are not real calendar dates are
/// skipped. A prompt without markers returns `None`.
pub fn resolve_choice(choice: &str, prompt: &str) -> Option<DateInterval> {
    let kind = classify(choice)?;

    let pairs: Vec<DateInterval> = regex!(r"\*\*(\d{4}-\d{2}-\d{2})\s+(?:až|az)\s+(\d{4}-\d{2}-\d{2})\*\*")
        .captures_iter(prompt)
        .filter_map(|caps| Some(DateInterval::new(iso_date(caps.get(1)?)?, iso_date(caps.get(2)?)?)))
        .collect();

    if !pairs.is_empty() {
        // A prompt that offered a single candidate is unambiguous whatever
        // the guest picked.
        if pairs.len() == 1 {
            return pairs.first().copied();
        }
        return match kind {
            ChoiceKind::ThisMonth => pairs.first().copied(),
            ChoiceKind::NextYear => pairs.get(1).copied(),
        };
    }

    let singles: Vec<NaiveDate> = regex!(r"\*\*(\d{4}-\d{2}-\d{2})\*\*")
        .captures_iter(prompt)
        .filter_map(|caps| iso_date(caps.get(1)?))
        .collect();

    let date = match kind {
        ChoiceKind::ThisMonth => singles.first()?,
        ChoiceKind::NextYear => singles.get(1).or_else(|| singles.first())?,
    };
    Some(DateInterval::single(*date))
}

/// Recover the interval a previous turn already rendered, scanning the
/// transcript newest-first for an availability header of the form
/// `Dostupnost pro **2025-09-20 → 2025-09-24**` (Czech or English wording).
pub fn interval_from_transcript<'a, I>(messages: I) -> Option<DateInterval>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: DoubleEndedIterator,
{
    let header = regex!(r"(?:Dostupnost pro|Availability for)\s+\*\*(\d{4}-\d{2}-\d{2})\s*→\s*(\d{4}-\d{2}-\d{2})\*\*");
    for message in messages.into_iter().rev() {
        if let Some(caps) = header.captures(message) {
            return Some(DateInterval::new(iso_date(caps.get(1)?)?, iso_date(caps.get(2)?)?));
        }
    }
    None
}
