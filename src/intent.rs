//! Keyword intent classification for guest messages.
//!
//! The booking flow only needs a coarse routing signal: does this message
//! belong to the parking/stay thread, or is it one of the static-answer
//! topics? Keywords cover both Czech (diacritics folded) and English, since
//! guests mix freely.

use crate::text;

/// Coarse topic of a guest message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Stay/parking booking thread: a date-looking message or parking talk.
    Parking,
    Wifi,
    Taxi,
    Stairs,
    AirConditioning,
    Power,
    Luggage,
    Balcony,
    CheckIn,
    Unknown,
}

/// True when the message mentions a one-night stay ("1 noc", "jednu noc",
/// "one night").
pub fn says_one_night(input: &str) -> bool {
    regex!(r"(1\s*noc|jednu\s*noc|one\s*night)").is_match(&text::normalize(input))
}

fn mentions_parking(folded: &str) -> bool {
    regex!(r"park|parking|parkovani|garaz|garage|auto").is_match(folded)
}

fn looks_like_booking(folded: &str) -> bool {
    // A strict date anywhere pulls the message into the booking thread even
    // without parking words.
    regex!(r"\d{2}\.\d{2}\.\s*[–-]\s*\d{2}\.\d{2}\.\d{4}").is_match(folded)
        || regex!(r"\b\d{2}\.\d{2}\.\d{4}\b").is_match(folded)
        || mentions_parking(folded)
}

/// Classify one guest message. First matching topic wins, in the routing
/// order of the booking flow.
pub fn detect_intent(input: &str) -> Intent {
    let folded = text::normalize(input);

    if looks_like_booking(&folded) || says_one_night(input) {
        return Intent::Parking;
    }
    if regex!(r"wifi|wi-?fi|internet").is_match(&folded) {
        return Intent::Wifi;
    }
    if regex!(r"taxi|airport|letiste|pick ?up|transfer").is_match(&folded) {
        return Intent::Taxi;
    }
    if regex!(r"schod|stairs|handicap|wheelchair|invalid").is_match(&folded) {
        return Intent::Stairs;
    }
    if regex!(r"\bac\b|klima|air ?con|airconditioning|air-conditioning").is_match(&folded) {
        return Intent::AirConditioning;
    }
    if regex!(r"elektr|jistic|fuse|breaker|power|electric").is_match(&folded) {
        return Intent::Power;
    }
    if regex!(r"zavazad|bag|luggage|storage|uschov").is_match(&folded) {
        return Intent::Luggage;
    }
    if regex!(r"balkon|balcony").is_match(&folded) {
        return Intent::Balcony;
    }
    if regex!(r"check[- ]?in|check[- ]?out|arrival|prijezd|odjezd|welcome|instructions?").is_match(&folded) {
        return Intent::CheckIn;
    }
    Intent::Unknown
}
