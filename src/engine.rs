//! Shape scanning engine.
//!
//! Parsing an input is a short pipeline:
//!
//! ```text
//! rules (all) ──────────────┐
//!                           │
//! input ── TriggerInfo::scan ┼─ select active rules (buckets)
//!          (trigger.rs)     │
//!                           v
//!                  Scanner::run (scanner.rs)
//!                    - rules in priority order, most specific first
//!                    - first accepted match wins
//!                           │
//!                           v
//!                    MatchedExpr (shape + span + rule name)
//! ```
//!
//! Calendar resolution of the matched shape against a reference time lives in
//! `crate::resolve`, not here: the scan is purely lexical and needs no clock.
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: scans the normalized input for coarse buckets (digits,
//!   range separators) used to gate rule activation.
//! - `scanner.rs`: orders active rules by priority and runs their patterns
//!   until one production accepts.

#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/trigger.rs"]
mod trigger;

pub use scanner::Scanner;
pub use trigger::{BucketMask, TriggerInfo};
