//! Trigger scanning (input pre-classification).
//!
//! A cheap pass over the normalized input producing coarse signals that let
//! the scanner skip rules which cannot possibly match. This is a *heuristic*
//! scan: false positives are acceptable because the rule patterns still have
//! to match in full, they only cost one extra regex run.

bitflags::bitflags! {
    /// Coarse input characteristics.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BucketMask: u32 {
        /// Input contains at least one ASCII digit.
        const HAS_DIGITS = 1 << 0;
        /// Input contains a range separator: dash, en-dash, or the folded
        /// words "az" / "do".
        const HAS_RANGE_SEP = 1 << 1;
    }
}

/// Input characteristics detected from the normalized input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` (already normalized, see `crate::text::normalize`) for
    /// coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        // Substring checks for "az"/"do" overshoot ("dobry den"), which is
        // fine here; the range patterns require digits around the separator.
        if input.contains('-') || input.contains('–') || input.contains("az") || input.contains("do") {
            buckets |= BucketMask::HAS_RANGE_SEP;
        }

        TriggerInfo { buckets }
    }
}
