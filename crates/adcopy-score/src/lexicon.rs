//! Word lists and patterns used by the copy scorer.
//!
//! All list entries are lowercase; the scorer lowercases the text once and
//! counts substring occurrences, so an entry also matches inside longer words.

use lazy_static::lazy_static;
use regex::Regex;

/// Emotional trigger words
pub const EMOTION_TRIGGERS: [&str; 30] = [
    "secret",
    "discover",
    "finally",
    "guarantee",
    "limited",
    "urgent",
    "today",
    "proven",
    "exclusive",
    "instant",
    "free",
    "imagine",
    "breakthrough",
    "revealed",
    "hidden",
    "shocking",
    "effortless",
    "transform",
    "unlock",
    "powerful",
    "hurry",
    "deadline",
    "last chance",
    "never",
    "fear",
    "love",
    "struggle",
    "frustrat",
    "results",
    "easy",
];

/// AIDA / PAS structure markers plus proof elements
pub const STRUCTURE_MARKERS: [&str; 13] = [
    "attention",
    "interest",
    "desire",
    "action",
    "problem",
    "agitate",
    "solution",
    "benefit",
    "testimonial",
    "proof",
    "bonus",
    "faq",
    "guarantee",
];

/// Call-to-action phrases
pub const CTA_PHRASES: [&str; 12] = [
    "click here",
    "buy now",
    "order now",
    "sign up",
    "get started",
    "join now",
    "register",
    "subscribe",
    "download",
    "call now",
    "add to cart",
    "claim your",
];

lazy_static! {
    /// Word tokenizer: runs of letters and digits
    pub static ref WORD: Regex = Regex::new(r"[\p{L}\p{N}]+").unwrap();

    /// Percentages such as "50%"
    pub static ref PERCENT: Regex = Regex::new(r"\d+%").unwrap();

    /// Day / week / month timeframes
    pub static ref TIMEFRAME: Regex = Regex::new(r"(?i)\b(?:days?|weeks?|months?)\b").unwrap();
}

/// Sum of non-overlapping occurrences of every term in `haystack`
pub fn count_terms(haystack: &str, terms: &[&str]) -> usize {
    terms.iter().map(|term| haystack.matches(term).count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_terms_is_substring_based() {
        // "secret" inside "secretary" still counts
        assert_eq!(count_terms("the secretary kept a secret", &["secret"]), 2);
        assert_eq!(count_terms("nothing here", &EMOTION_TRIGGERS), 0);
    }

    #[test]
    fn test_timeframe_pattern() {
        let text = "Results in 7 days, 2 Weeks or one month. Today is not a timeframe.";
        assert_eq!(TIMEFRAME.find_iter(text).count(), 3);
    }

    #[test]
    fn test_word_tokenizer_splits_contractions() {
        let words: Vec<&str> = WORD.find_iter("you've tried it").map(|m| m.as_str()).collect();
        assert_eq!(words, vec!["you", "ve", "tried", "it"]);
    }
}
