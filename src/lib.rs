extern crate self as termin;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod arrival;
mod choice;
mod date_expr;
mod details;
mod engine;
mod intent;
mod resolve;
mod rules;
mod text;

pub use api::{
    Clarification, Context, Options, Outcome, ParseDetails, ParseRun, parse, parse_verbose_with, parse_with,
};
pub use arrival::{Arrival, extract_arrival};
pub use choice::{interval_from_transcript, resolve_choice};
pub use date_expr::DateInterval;
pub use details::{GuestDetails, MissingDetail, extract_details};
pub use intent::{Intent, detect_intent, says_one_night};

use crate::date_expr::DateExpr;
use crate::engine::BucketMask;

// --- Internal types ---------------------------------------------------------

/// Production function of a rule: turn the regex captures into a shape.
///
/// Returning `None` rejects this candidate match (e.g. a month outside 1–12)
/// and lets the scan fall through to the next occurrence or the next rule.
pub(crate) type Production = fn(&regex::Captures<'_>) -> Option<DateExpr>;

/// A recognition rule: one compiled pattern over the normalized input plus a
/// production. Rules are tried highest-priority first and the first accepted
/// match wins.
pub(crate) struct Rule {
    pub name: &'static str,
    /// Pattern matched against the normalized input (created via the `regex!`
    /// macro in `src/macros.rs`, so it is compiled once).
    pub pattern: &'static Regex,
    /// Coarse input requirements; the rule is skipped when the input's bucket
    /// scan does not cover all of them.
    pub buckets: BucketMask,
    /// Higher wins; more specific shapes carry higher priorities.
    pub priority: u16,
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("buckets", &self.buckets)
            .field("priority", &self.priority)
            .field("production", &"<function>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Range {
    /// Start byte index into the normalized input (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// A successful rule application: the produced shape plus provenance for
/// debugging.
#[derive(Debug, Clone)]
pub(crate) struct MatchedExpr {
    pub expr: DateExpr,
    pub range: Range,
    pub rule_name: &'static str,
}
