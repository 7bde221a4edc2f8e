//! Admin override lists
//!
//! The game layer maintains an allow-list and a block-list of lowercase
//! words that take precedence over dictionary membership during live play.
//! The lists round-trip through JSON as `{"additions": [], "blocklist": []}`.

use super::Dictionary;
use super::MIN_WORD_LENGTH;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Allow-list and block-list of lowercase words
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideLists {
    #[serde(default)]
    pub additions: FxHashSet<String>,
    #[serde(default)]
    pub blocklist: FxHashSet<String>,
}

impl OverrideLists {
    /// Parse from the persisted JSON shape
    ///
    /// # Errors
    /// Returns a `serde_json` error on malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to the persisted JSON shape
    ///
    /// # Errors
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Add a word to the allow-list, removing it from the block-list
    pub fn allow(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        self.blocklist.remove(&word);
        self.additions.insert(word);
    }

    /// Add a word to the block-list, removing it from the allow-list
    pub fn block(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        self.additions.remove(&word);
        self.blocklist.insert(word);
    }
}

/// Live word-validity predicate for submitted words
///
/// Checked in order: minimum length, block-list, allow-list, dictionary
/// membership. The block-list always wins over the allow-list; both win
/// over the dictionary.
#[must_use]
pub fn is_word_valid(word: &str, overrides: &OverrideLists, dictionary: &Dictionary) -> bool {
    if word.trim().len() < MIN_WORD_LENGTH {
        return false;
    }

    let lower = word.trim().to_lowercase();
    if overrides.blocklist.contains(&lower) {
        return false;
    }
    if overrides.additions.contains(&lower) {
        return true;
    }

    dictionary.is_valid_word(&lower)
}
