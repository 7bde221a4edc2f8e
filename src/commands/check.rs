//! Word validity command
//!
//! Answers whether a word counts for scoring, taking administrator
//! override lists into account.

use crate::dictionary::{Dictionary, MIN_WORD_LENGTH, OverrideLists, is_word_valid};

/// Outcome of a validity check, with the rule that decided it
pub struct CheckReport {
    pub word: String,
    pub valid: bool,
    pub reason: CheckReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckReason {
    TooShort,
    Blocklisted,
    AdminAddition,
    InDictionary,
    NotInDictionary,
}

/// Check a single word against the dictionary and override lists
#[must_use]
pub fn check_word(word: &str, overrides: &OverrideLists, dictionary: &Dictionary) -> CheckReport {
    let normalized = word.trim().to_lowercase();
    let valid = is_word_valid(&normalized, overrides, dictionary);

    let reason = if normalized.len() < MIN_WORD_LENGTH {
        CheckReason::TooShort
    } else if overrides.blocklist.contains(&normalized) {
        CheckReason::Blocklisted
    } else if overrides.additions.contains(&normalized) {
        CheckReason::AdminAddition
    } else if valid {
        CheckReason::InDictionary
    } else {
        CheckReason::NotInDictionary
    };

    CheckReport {
        word: normalized,
        valid,
        reason,
    }
}
