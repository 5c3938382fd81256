//! Priority-ordered shape scan.
//!
//! The scanner applies the active rules most-specific-first and stops at the
//! first match whose production accepts. A production may reject a candidate
//! (say, a two-digit "month" of 99), in which case the scan continues with
//! the next occurrence of the same pattern and then with lower-priority
//! rules, so "15-17.99" falls all the way through instead of confirming a
//! nonsense interval.

use super::trigger::TriggerInfo;
use crate::{MatchedExpr, Range, Rule};

/// Scanner orchestrates applying `Rule`s against one normalized input.
///
/// Usage: create with `Scanner::new(input, &rules)` then call `run()`.
#[derive(Debug)]
pub struct Scanner<'a> {
    /// Normalized input text.
    input: &'a str,
    /// Rules whose bucket requirements the input satisfies, sorted by
    /// descending priority (rule name breaks ties deterministically).
    active: Vec<&'a Rule>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, rules: &'a [Rule]) -> Self {
        let trigger = TriggerInfo::scan(input);

        let mut active: Vec<&'a Rule> =
            rules.iter().filter(|rule| trigger.buckets.contains(rule.buckets)).collect();
        active.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.name.cmp(b.name)));

        Scanner { input, active }
    }

    /// Names of the rules that survived bucket gating, in trial order.
    pub fn active_rule_names(&self) -> Vec<&'static str> {
        self.active.iter().map(|rule| rule.name).collect()
    }

    /// Run the scan; the first accepted match wins.
    pub fn run(&self) -> Option<MatchedExpr> {
        for rule in &self.active {
            for caps in rule.pattern.captures_iter(self.input) {
                if let Some(expr) = (rule.production)(&caps) {
                    if let Some(whole) = caps.get(0) {
                        return Some(MatchedExpr {
                            expr,
                            range: Range { start: whole.start(), end: whole.end() },
                            rule_name: rule.name,
                        });
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_expr::DateExpr;

    #[test]
    fn higher_priority_rule_wins() {
        let rules = crate::rules::date::get();
        let scanner = Scanner::new("20.09.–24.09.2025", &rules);
        let matched = scanner.run().unwrap();
        assert_eq!(matched.rule_name, "<day>.<month> to <day>.<month> [year]");
    }

    #[test]
    fn rejected_production_does_not_confirm() {
        let rules = crate::rules::date::get();
        // "15-17" is a day pair; ".99" is not a month, so the range rule's
        // production rejects and nothing else matches either.
        let scanner = Scanner::new("15-17.99", &rules);
        assert!(scanner.run().is_none());
    }

    #[test]
    fn no_digits_means_no_active_rules() {
        let rules = crate::rules::date::get();
        let scanner = Scanner::new("dobry den", &rules);
        assert!(scanner.active_rule_names().is_empty());
        assert!(scanner.run().is_none());
    }

    #[test]
    fn single_day_matched_when_no_range_separator() {
        let rules = crate::rules::date::get();
        let scanner = Scanner::new("prijedu 15. 8. 2025", &rules);
        let matched = scanner.run().unwrap();
        assert!(matches!(matched.expr, DateExpr::SingleDay { day: 15, month: 8, year: Some(2025) }));
    }
}
