use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref NEWLINE_RUNS: Regex = Regex::new(r"\n+").unwrap();
    static ref DATE_LINE: Regex = Regex::new(r"Date: ([^\n]+)").unwrap();
}

// Structured response built from the raw model output plus the original notes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub summary: String,
    #[serde(rename = "meetingDate")]
    pub meeting_date: String,
    #[serde(rename = "keyParticipants")]
    pub key_participants: Vec<String>,
}

// Pure per-request transformation - no state, no I/O
pub fn shape(raw_summary: &str, notes: &str) -> SummaryResult {
    SummaryResult {
        summary: normalize_summary(raw_summary),
        meeting_date: extract_date(notes),
        key_participants: extract_participants(notes),
    }
}

// Collapse newline runs to a single newline, then trim
fn normalize_summary(raw: &str) -> String {
    NEWLINE_RUNS.replace_all(raw, "\n").trim().to_string()
}

// Remainder of the first "Date: " line, or a fixed fallback
fn extract_date(notes: &str) -> String {
    DATE_LINE
        .captures(notes)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| "Not specified".to_string())
}

// Lines of the "Attendees:" block, up to the first blank line or end of input
fn extract_participants(notes: &str) -> Vec<String> {
    let Some(idx) = notes.find("Attendees:") else {
        return Vec::new();
    };

    let rest = &notes[idx + "Attendees:".len()..];
    let block = match rest.find("\n\n") {
        Some(end) => &rest[..end],
        None => rest,
    };

    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
