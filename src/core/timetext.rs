use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// One raw availability line split into its day marker and the canonical
/// start times extracted from the rest of the line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub day_token: String,
    pub times: Vec<String>,
}

/// One extraction rule: an anchored pattern and the times it yields.
/// Rules are evaluated in priority order per token, first match wins.
struct TimeRule {
    pattern: Regex,
    extract: fn(&Captures) -> Vec<String>,
}

/// Zero-pad the hour to two digits. Minutes are kept exactly as captured,
/// including out-of-range values like "75".
fn canonical(hour: &str, minutes: &str) -> String {
    match hour.parse::<u32>() {
        Ok(h) => format!("{:02}:{}", h, minutes),
        Err(_) => format!("{}:{}", hour, minutes),
    }
}

fn extract_single(caps: &Captures) -> Vec<String> {
    vec![canonical(&caps[1], &caps[2])]
}

// For "6h30 às 8h00" both endpoints count as independent start times,
// while "8:00 às 12:00" keeps only the start. The asymmetry is inherited
// from the seeded data and kept intact.
fn extract_both_endpoints(caps: &Captures) -> Vec<String> {
    vec![canonical(&caps[1], &caps[2]), canonical(&caps[3], &caps[4])]
}

fn time_rules() -> Vec<TimeRule> {
    vec![
        TimeRule {
            pattern: Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap(),
            extract: extract_single,
        },
        TimeRule {
            pattern: Regex::new(r"^(\d{1,2})h(\d{2})$").unwrap(),
            extract: extract_single,
        },
        TimeRule {
            pattern: Regex::new(r"^(\d{1,2}):(\d{2})\s*às\b.*$").unwrap(),
            extract: extract_single,
        },
        TimeRule {
            pattern: Regex::new(r"^(\d{1,2})h(\d{2})\s*às\s*(\d{1,2})h(\d{2})$").unwrap(),
            extract: extract_both_endpoints,
        },
    ]
}

/// Parse one raw availability line ("2a - 8:00, 10:00 e 19:30") into its day
/// token and the deduplicated, lexicographically sorted start times.
/// Lines without the day-dash shape yield `None`.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let line_re = Regex::new(r"^\s*(.+?)\s*-\s+(.+)$").unwrap();
    let caps = line_re.captures(line)?;

    let day_token = caps[1].to_string();
    let rules = time_rules();
    let separator = Regex::new(r"\s*(?:,|\be\b)\s*").unwrap();

    let mut times = BTreeSet::new();
    for token in separator.split(&caps[2]) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        for rule in &rules {
            if let Some(token_caps) = rule.pattern.captures(token) {
                times.extend((rule.extract)(&token_caps));
                break;
            }
        }
    }

    Some(ParsedLine {
        day_token,
        times: times.into_iter().collect(),
    })
}

/// Canonical start times for one raw line; empty when the line has no
/// day-dash shape or no recognizable time tokens.
pub fn extract_times(line: &str) -> Vec<String> {
    parse_line(line).map(|parsed| parsed.times).unwrap_or_default()
}

/// Build a legacy day-keyed schedule map from a batch of raw availability
/// lines, preserving line order. Unparseable lines contribute nothing.
pub fn schedule_from_lines(lines: &[&str]) -> Map<String, Value> {
    let mut schedule = Map::new();
    for line in lines {
        if let Some(parsed) = parse_line(line) {
            let times = parsed.times.into_iter().map(Value::String).collect();
            schedule.insert(parsed.day_token, Value::Array(times));
        }
    }
    schedule
}
