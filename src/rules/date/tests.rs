use crate::api::{Context, Options, Outcome, parse_with};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn reference_context() -> Context {
    // Saturday 2025-09-20: August is past, October ahead.
    let date = NaiveDate::from_ymd_opt(2025, 9, 20).unwrap();
    let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    Context { reference_time: NaiveDateTime::new(date, time) }
}

#[test]
fn confirmed_shape_examples() {
    // Array of (input, expected_from, expected_to)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("20.09.–24.09.2025", "2025-09-20", "2025-09-24"),
        ("20.09.-24.09.2025", "2025-09-20", "2025-09-24"),
        ("20.9. až 24.9.2025", "2025-09-20", "2025-09-24"),
        ("30.9. do 2.10.", "2025-09-30", "2025-10-02"),
        ("od 15 do 17. 10. 2025", "2025-10-15", "2025-10-17"),
        ("15–17.10", "2025-10-15", "2025-10-17"),
        ("15-17.10.25", "2025-10-15", "2025-10-17"),
        ("15 - 17", "2025-09-15", "2025-09-17"),
        ("17–15.10", "2025-10-15", "2025-10-17"),
        ("15. 10. 2025", "2025-10-15", "2025-10-15"),
        ("15.10", "2025-10-15", "2025-10-15"),
        ("12/10/2025", "2025-10-12", "2025-10-12"),
        ("31.2.2025", "2025-02-28", "2025-02-28"),
        ("31.4.2026", "2026-04-30", "2026-04-30"),
        ("15.8.49", "2049-08-15", "2049-08-15"),
        ("15.8.51", "1951-08-15", "1951-08-15"),
        ("15.8.2025", "2025-08-15", "2025-08-15"),
        ("máme zájem o termín 15–17.10, dva hosté", "2025-10-15", "2025-10-17"),
    ];

    let ctx = reference_context();
    for (input, from, to) in cases {
        let outcome = parse_with(input, &ctx, &Options::default());
        let interval = match outcome {
            Outcome::Confirmed(interval) => interval,
            other => panic!("{input:?}: expected confirmed interval, got {other:?}"),
        };
        assert_eq!(interval.from.to_string(), from, "from of {input:?}");
        assert_eq!(interval.to.to_string(), to, "to of {input:?}");
    }
}

#[test]
fn clarification_shape_examples() {
    // Array of (input, this_month marker, next_year marker)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("15–17.8", "**2025-09-15 až 2025-09-17**", "**2026-08-15 až 2026-08-17**"),
        ("od 15 do 17. 8.", "**2025-09-15 až 2025-09-17**", "**2026-08-15 až 2026-08-17**"),
        ("20.3.–25.3.", "**2025-09-20 až 2025-09-25**", "**2026-03-20 až 2026-03-25**"),
        ("15. 8.", "**2025-09-15**", "**2026-08-15**"),
        ("31.8", "**2025-09-30**", "**2026-08-31**"),
    ];

    let ctx = reference_context();
    for (input, this_marker, next_marker) in cases {
        let outcome = parse_with(input, &ctx, &Options::default());
        let clarification = match outcome {
            Outcome::NeedsClarification(clarification) => clarification,
            other => panic!("{input:?}: expected clarification, got {other:?}"),
        };
        let this_pos = clarification
            .prompt
            .find(this_marker)
            .unwrap_or_else(|| panic!("{input:?}: prompt missing {this_marker:?}: {}", clarification.prompt));
        let next_pos = clarification
            .prompt
            .find(next_marker)
            .unwrap_or_else(|| panic!("{input:?}: prompt missing {next_marker:?}: {}", clarification.prompt));
        assert!(this_pos < next_pos, "{input:?}: this-month candidate must come first");
    }
}

#[test]
fn rejected_shape_examples() {
    let cases: Vec<&str> = vec![
        "Hello, how are you?",
        "dobrý den, máte volno?",
        "15.13.2025",
        "pokoj pro 2 osoby",
    ];

    let ctx = reference_context();
    for input in cases {
        let outcome = parse_with(input, &ctx, &Options::default());
        assert_eq!(outcome, Outcome::NoMatch, "input {input:?}");
    }
}
