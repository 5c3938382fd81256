mod helpers;
mod rules_ranges;
mod rules_single;

#[cfg(test)]
mod tests;

use crate::Rule;

/// The full date-shape ruleset, most specific shape first.
pub fn get() -> Vec<Rule> {
    vec![rules_ranges::rule_dotted_range(), rules_ranges::rule_day_range(), rules_single::rule_single_day()]
}
