//! Single-day shape.

use super::helpers::{group_u32, month_group, year_group};
use crate::date_expr::DateExpr;
use crate::engine::BucketMask;
use crate::Rule;

/// "15. 8. 2025", "15.8", "12/09/2025": one day, one month, optional year.
pub fn rule_single_day() -> Rule {
    rule! {
        name: "<day>.<month> [year]",
        pattern: r"(\d{1,2})\s*[.\-/ ]\s*(\d{1,2})(?:\s*[.\-/ ]\s*(\d{2,4}))?",
        buckets: BucketMask::HAS_DIGITS,
        priority: 10,
        prod: |caps| {
            let day = group_u32(caps, 1)?;
            let month = month_group(caps, 2)?;
            let year = if caps.get(3).is_some() { Some(year_group(caps, 3)?) } else { None };
            Some(DateExpr::SingleDay { day, month, year })
        },
    }
}
