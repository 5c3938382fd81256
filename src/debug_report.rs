use termin::{DateInterval, Intent, Outcome, ParseRun, detect_intent, extract_arrival, extract_details, says_one_night};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, run: &ParseRun, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Scan ━━━", ansi::GRAY));
    println!("  normalized: {}", palette.dim(format!("\"{}\"", run.details.normalized)));
    if run.details.active_rules.is_empty() {
        println!("  active rules: {}", palette.dim("none"));
    } else {
        println!("  active rules: {}", palette.paint(run.details.active_rules.join(", "), ansi::BLUE));
    }
    match (run.details.matched_rule, run.details.span) {
        (Some(rule), Some((start, end))) => {
            println!(
                "  matched: {} {}",
                palette.paint(rule, ansi::CYAN),
                palette.paint(format!("span {start}..{end}"), ansi::YELLOW)
            );
        }
        _ => println!("  matched: {}", palette.dim("no rule matched")),
    }

    println!("\n{}", palette.paint("━━━ Outcome ━━━", ansi::GRAY));
    match &run.outcome {
        Outcome::Confirmed(interval) => print_interval(interval, &palette),
        Outcome::NeedsClarification(clarification) => {
            println!("  {}", palette.paint("Needs clarification:", ansi::YELLOW));
            println!("  {}", clarification.prompt);
            println!(
                "      {} {}",
                palette.dim("this month:"),
                palette.paint(clarification.this_month.to_string(), ansi::GREEN)
            );
            println!(
                "      {} {}",
                palette.dim("next year: "),
                palette.paint(clarification.next_year.to_string(), ansi::GREEN)
            );
        }
        Outcome::NoMatch => {
            println!("{}", palette.dim("  No date found"));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • Rules were filtered out (check bucket requirements)");
            println!("  • Patterns didn't match any day/month pair");
            println!("  • A production rejected the candidate (month outside 1–12)");
        }
    }

    print_message_signals(input, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", run.details.elapsed), ansi::GREEN));
    println!();
}

pub fn print_choice(choice: &str, resolved: Option<DateInterval>, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Resolving choice: \"{}\"", choice), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Outcome ━━━", ansi::GRAY));
    match resolved {
        Some(interval) => print_interval(&interval, &palette),
        None => {
            println!("{}", palette.dim("  No interval chosen"));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • The reply is neither \"tento měsíc\" nor \"příští rok\" (try parsing it as a date)");
            println!("  • The prompt carries no **…** date markers");
        }
    }
    println!();
}

fn print_interval(interval: &DateInterval, palette: &ansi::Palette) {
    println!(
        "  {} {} {}",
        palette.paint("Confirmed:", ansi::GREEN),
        palette.bold(palette.paint(interval.to_string(), ansi::GREEN)),
        palette.dim(format!("({} nights)", interval.nights())),
    );
    let nights: Vec<_> = interval.days().collect();
    for night in nights.iter().take(8) {
        println!("      • {night}");
    }
    if nights.len() > 8 {
        println!("      {}", palette.dim(format!("... +{} more", nights.len() - 8)));
    }
}

fn print_message_signals(input: &str, palette: &ansi::Palette) {
    println!("\n{}", palette.paint("━━━ Guest message ━━━", ansi::GRAY));

    let intent = detect_intent(input);
    println!(
        "  intent: {}{}",
        palette.paint(format!("{intent:?}"), ansi::BLUE),
        if says_one_night(input) { palette.dim("  (one night)") } else { String::new() }
    );

    if let Some(arrival) = extract_arrival(input) {
        let time = arrival.time.map(|t| format!(" {t}")).unwrap_or_default();
        print!("  arrival: {}{}", palette.paint(arrival.date.to_string(), ansi::GREEN), palette.dim(time));
        if let Some(stay) = arrival.one_night() {
            print!("  {} {}", palette.dim("│ one night →"), palette.paint(stay.to_string(), ansi::GREEN));
        }
        println!();
    }

    if intent == Intent::Parking {
        if let Some(details) = extract_details(input) {
            println!(
                "  details: name={} plate={} time={}",
                palette.paint(details.name.as_deref().unwrap_or("?"), ansi::CYAN),
                palette.paint(details.plate.as_deref().unwrap_or("?"), ansi::CYAN),
                palette.dim(
                    details.arrival_time.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string())
                ),
            );
            if !details.missing().is_empty() {
                println!("      {}", palette.dim(format!("missing: {:?}", details.missing())));
            }
        }
    }
}
