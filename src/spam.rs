use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One compiled pattern per spam category. Matching ANY of them rejects
    // the content; callers never learn which category fired.
    static ref SPAM_PATTERNS: Vec<Regex> = vec![
        // Common spam keywords
        Regex::new(r"(?i)\b(viagra|casino|lottery|prize|crypto|bitcoin|forex|porn|xxx|sex|dating)\b").unwrap(),
        // URLs and links
        Regex::new(r"(?i)\b(http|https|www\.)\S+").unwrap(),
        // Excessive capitalization
        Regex::new(r"[A-Z]{5,}").unwrap(),
        // Common spam phrases
        Regex::new(r"(?i)\b(make money|get rich|earn fast|free offer|winner|you won|congratulation)\b").unwrap(),
        // Email addresses
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap(),
        // Phone numbers
        Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap(),
        // Excessive punctuation
        Regex::new(r"[!?]{3,}|\.{4,}").unwrap(),
        // Cryptocurrency wallet addresses
        Regex::new(r"\b(0x[a-fA-F0-9]{40}|bc1[a-zA-Z0-9]{25,39})\b").unwrap(),
        // Promotional content unrelated to meetings
        Regex::new(r"(?i)\b(discount|sale|offer|limited time|buy now|click here|subscribe|sign up today)\b").unwrap(),
    ];
}

// Content classifier - true when the text trips any spam category
pub fn is_spam(text: &str) -> bool {
    SPAM_PATTERNS.iter().any(|pattern| pattern.is_match(text))
        || has_repeated_run(text, 5)
        || text.contains("$$$")
}

// Runs of n+ identical characters ("aaaaa"). The regex crate has no
// backreferences, so this category is a plain scan.
fn has_repeated_run(text: &str, n: u32) -> bool {
    let mut last = None;
    let mut run = 0;

    for c in text.chars() {
        if Some(c) == last {
            run += 1;
            if run >= n {
                return true;
            }
        } else {
            last = Some(c);
            run = 1;
        }
    }
    false
}
