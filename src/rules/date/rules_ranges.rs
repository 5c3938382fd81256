//! Range shapes: two day tokens joined by a dash, en-dash, or "az"/"do".

use super::helpers::{group_u32, month_group, year_group};
use crate::date_expr::DateExpr;
use crate::engine::BucketMask;
use crate::Rule;

/// "20.09.–24.09.2025", "20.9. az 2.10.": both endpoints carry a month, the
/// year (optional) trails the pair and applies to both.
pub fn rule_dotted_range() -> Rule {
    rule! {
        name: "<day>.<month> to <day>.<month> [year]",
        pattern: r"(\d{1,2})\s*[./]\s*(\d{1,2})\s*\.?\s*(?:-|–|az|do)\s*(\d{1,2})\s*[./]\s*(\d{1,2})\s*\.?\s*(\d{2,4})?",
        buckets: BucketMask::HAS_DIGITS.union(BucketMask::HAS_RANGE_SEP),
        priority: 30,
        prod: |caps| {
            let from_day = group_u32(caps, 1)?;
            let from_month = month_group(caps, 2)?;
            let to_day = group_u32(caps, 3)?;
            let to_month = month_group(caps, 4)?;
            let year = if caps.get(5).is_some() { Some(year_group(caps, 5)?) } else { None };
            Some(DateExpr::DottedRange { from_day, from_month, to_day, to_month, year })
        },
    }
}

/// "od 15 do 17. 8. 2025", "15–17.8", "15 - 17": a bare day pair with an
/// optional trailing month and year shared by both days.
pub fn rule_day_range() -> Rule {
    rule! {
        name: "<day> to <day> [month [year]]",
        pattern: r"(?:od\s*)?(\d{1,2})\s*(?:-|–|az|do)\s*(\d{1,2})\s*[.\-/ ]*\s*(\d{1,2})?(?:\s*[.\-/ ]*\s*(\d{2,4}))?",
        buckets: BucketMask::HAS_DIGITS.union(BucketMask::HAS_RANGE_SEP),
        priority: 20,
        prod: |caps| {
            let from_day = group_u32(caps, 1)?;
            let to_day = group_u32(caps, 2)?;
            let month = if caps.get(3).is_some() { Some(month_group(caps, 3)?) } else { None };
            let year = if caps.get(4).is_some() { Some(year_group(caps, 4)?) } else { None };
            Some(DateExpr::DayRange { from_day, to_day, month, year })
        },
    }
}
