//! Dictionary building and word validation
//!
//! Loads an affix ruleset and a base lexicon, expands them into the flat
//! set of admissible game words (including synthesized inflections), and
//! answers membership queries. Loading happens at most once per process;
//! concurrent loads coalesce into a single in-flight operation.

mod affix;
mod embedded;
mod inflect;
mod loader;
mod overrides;

pub use affix::{AffixRules, SpellChecker};
pub use embedded::{EN_AFF, EN_AFF_LINES, EN_DIC, EN_DIC_LINES};
pub use inflect::{build_word_set, inflection_candidates};
pub use loader::{Dictionary, DictionaryError, DictionarySource, WordSet};
pub use overrides::{OverrideLists, is_word_valid};

/// Shortest admissible word
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest admissible word
pub const MAX_WORD_LENGTH: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_aff_has_suffix_classes() {
        assert!(EN_AFF.contains("SFX S"));
        assert!(EN_AFF.contains("SFX G"));
        assert!(EN_AFF.contains("PFX A"));
    }

    #[test]
    fn embedded_dic_count_header_matches() {
        let mut lines = EN_DIC.lines();
        let declared: usize = lines.next().unwrap().trim().parse().unwrap();
        let actual = lines.filter(|l| !l.trim().is_empty()).count();
        assert_eq!(declared, actual);
        // the generated line counts include the header
        assert_eq!(EN_DIC_LINES, actual + 1);
        assert!(EN_AFF_LINES > 0);
    }

    #[test]
    fn embedded_dic_entries_are_lowercase_words() {
        for line in EN_DIC.lines().skip(1).take(50) {
            let base = line.split('/').next().unwrap().trim();
            assert!(!base.is_empty());
            assert!(
                base.chars().all(|c| c.is_ascii_lowercase()),
                "Entry '{base}' is not lowercase ASCII"
            );
        }
    }
}
