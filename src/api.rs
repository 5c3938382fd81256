use crate::date_expr::DateInterval;
use crate::engine::Scanner;
use crate::{Rule, resolve, text};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::date::get);

/// Parsing context.
///
/// Holds the reference "now" used to default missing months/years and to
/// decide whether an expressed month already passed. Captured once per call;
/// never re-read mid-parse.
#[derive(Debug, Clone)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2025, 9, 20).unwrap();
            let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// Options that affect parsing behavior.
///
/// Intentionally minimal today; will grow (prompt wording, locale) as needed.
#[derive(Debug, Clone, Default)]
pub struct Options {}

/// A pending question about an underspecified date, with the two candidate
/// readings carried structurally alongside the rendered prompt.
///
/// The prompt embeds both candidates in `**…**` markers, this-month first,
/// next-year second; [`crate::resolve_choice`] relies on exactly that
/// rendering to recover them across a conversational turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clarification {
    /// Guest-facing Czech question.
    pub prompt: String,
    /// The guest's day numbers under the current month and year.
    pub this_month: DateInterval,
    /// The guest's day and month, one year ahead.
    pub next_year: DateInterval,
}

/// Result of parsing one guest utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An unambiguous interval; processing can continue downstream.
    Confirmed(DateInterval),
    /// The expressed month looks past and no year was given: ask the guest.
    NeedsClarification(Clarification),
    /// No date shape anywhere in the text.
    NoMatch,
}

impl Outcome {
    /// The confirmed interval, when there is one.
    pub fn confirmed(&self) -> Option<&DateInterval> {
        match self {
            Outcome::Confirmed(interval) => Some(interval),
            _ => None,
        }
    }

    /// The pending question's prompt, when there is one.
    pub fn prompt(&self) -> Option<&str> {
        match self {
            Outcome::NeedsClarification(clarification) => Some(&clarification.prompt),
            _ => None,
        }
    }
}

/// Parse `input` using the default ruleset and a default [`Context`].
///
/// # Example
/// ```
/// use termin::{Outcome, parse};
///
/// let out = parse("hello");
/// assert_eq!(out, Outcome::NoMatch);
/// ```
pub fn parse(input: &str) -> Outcome {
    parse_with(input, &Context::default(), &Options::default())
}

/// Parse `input` with the provided `context`/`options`.
///
/// Use this to make parsing deterministic by supplying the reference time.
pub fn parse_with(input: &str, context: &Context, _options: &Options) -> Outcome {
    let normalized = text::normalize(input);
    let scanner = Scanner::new(&normalized, &DEFAULT_RULES);
    scanner
        .run()
        .and_then(|matched| resolve::resolve(&matched.expr, context.reference_time))
        .unwrap_or(Outcome::NoMatch)
}

/// Extra details from a verbose parse, for debugging and the CLI report.
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// The normalized input the rules actually ran against.
    pub normalized: String,
    /// Rule that produced the outcome, if any.
    pub matched_rule: Option<&'static str>,
    /// Byte span of the match within `normalized`.
    pub span: Option<(usize, usize)>,
    /// Rules that survived bucket gating, in trial order.
    pub active_rules: Vec<&'static str>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseRun {
    pub outcome: Outcome,
    pub details: ParseDetails,
}

/// Parse `input` and return extra (compact) debug details alongside the
/// outcome. The default [`parse_with`] path does not allocate these.
pub fn parse_verbose_with(input: &str, context: &Context, _options: &Options) -> ParseRun {
    let started = Instant::now();
    let normalized = text::normalize(input);
    let scanner = Scanner::new(&normalized, &DEFAULT_RULES);
    let active_rules = scanner.active_rule_names();

    let matched = scanner.run();
    let (matched_rule, span) = match &matched {
        Some(m) => (Some(m.rule_name), Some((m.range.start, m.range.end))),
        None => (None, None),
    };
    let outcome = matched
        .and_then(|m| resolve::resolve(&m.expr, context.reference_time))
        .unwrap_or(Outcome::NoMatch);

    ParseRun {
        outcome,
        details: ParseDetails { normalized, matched_rule, span, active_rules, elapsed: started.elapsed() },
    }
}
