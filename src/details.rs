//! Guest detail extraction from one free-text message.
//!
//! Once an interval is confirmed, the flow needs a guest name and a license
//! plate (arrival time optional) and asks for them in one message, e.g.
//! "Jan Novák, 7AZ 1234, 18:30". This module pulls the three fields out of
//! such a message without imposing an order.

use chrono::NaiveTime;

/// Details extracted from a guest message. Original casing is kept for the
/// name; the plate is normalized (spaces stripped, uppercased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDetails {
    pub name: Option<String>,
    pub plate: Option<String>,
    pub arrival_time: Option<NaiveTime>,
}

/// A required detail the guest has not provided yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDetail {
    Name,
    Plate,
}

impl GuestDetails {
    /// Required details still missing (arrival time is optional).
    pub fn missing(&self) -> Vec<MissingDetail> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(MissingDetail::Name);
        }
        if self.plate.is_none() {
            missing.push(MissingDetail::Plate);
        }
        missing
    }
}

fn normalize_plate(segment: &str) -> String {
    segment.split_whitespace().collect::<String>().to_uppercase()
}

/// Extract name / plate / arrival time from `input`. Segments are separated
/// by commas, semicolons or newlines. Returns `None` when nothing at all was
/// found.
pub fn extract_details(input: &str) -> Option<GuestDetails> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let time_raw = regex!(r"\b\d{1,2}[:.]\d{2}\b").find(trimmed).map(|m| m.as_str());
    let arrival_time =
        time_raw.and_then(|raw| NaiveTime::parse_from_str(&raw.replace('.', ":"), "%H:%M").ok());

    let segments: Vec<&str> =
        trimmed.split(['\n', ',', ';']).map(str::trim).filter(|s| !s.is_empty()).collect();

    // Plate: letters/digits with optional spaces and dashes, at least one
    // digit (keeps "Jan Novak" from being read as a plate).
    let mut plate: Option<String> = None;
    for segment in &segments {
        if regex!(r"^[A-Za-z0-9 -]{5,}$").is_match(segment) && segment.bytes().any(|b| b.is_ascii_digit()) {
            let normalized = normalize_plate(segment);
            if regex!(r"^[A-Z0-9-]{5,}$").is_match(&normalized) {
                plate = Some(normalized);
                break;
            }
        }
    }

    let mut name: Option<String> = None;
    for segment in &segments {
        let clean = segment.split_whitespace().collect::<Vec<_>>().join(" ");
        if let Some(raw) = time_raw {
            if clean.contains(raw) {
                continue;
            }
        }
        if let Some(ref plate) = plate {
            if normalize_plate(&clean) == *plate {
                continue;
            }
        }
        if clean.chars().count() >= 3 {
            name = Some(clean);
            break;
        }
    }

    if name.is_none() && plate.is_none() && time_raw.is_none() {
        return None;
    }
    Some(GuestDetails { name, plate, arrival_time })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_three_fields() {
        let details = extract_details("Jan Novák, 7AZ 1234, 18:30").unwrap();
        assert_eq!(details.name.as_deref(), Some("Jan Novák"));
        assert_eq!(details.plate.as_deref(), Some("7AZ1234"));
        assert_eq!(details.arrival_time, NaiveTime::from_hms_opt(18, 30, 0));
        assert!(details.missing().is_empty());
    }

    #[test]
    fn order_does_not_matter() {
        let details = extract_details("18:30; 7az 1234; Jan Novák").unwrap();
        assert_eq!(details.name.as_deref(), Some("Jan Novák"));
        assert_eq!(details.plate.as_deref(), Some("7AZ1234"));
    }

    #[test]
    fn plate_needs_a_digit() {
        let details = extract_details("John Smith, ABC1234").unwrap();
        assert_eq!(details.name.as_deref(), Some("John Smith"));
        assert_eq!(details.plate.as_deref(), Some("ABC1234"));
    }

    #[test]
    fn reports_missing_required_fields() {
        let details = extract_details("přijedeme v 18:30").unwrap();
        assert_eq!(details.missing(), vec![MissingDetail::Name, MissingDetail::Plate]);
    }

    #[test]
    fn dotted_time_is_read_as_clock_time() {
        let details = extract_details("Jan Novák, 7AZ 1234, 18.30").unwrap();
        assert_eq!(details.arrival_time, NaiveTime::from_hms_opt(18, 30, 0));
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(extract_details("   "), None);
    }
}
