//! Inflection expansion
//!
//! Synthesizes candidate inflected forms (plural, past tense, comparative,
//! etc.) from each base lexicon word via a fixed suffix set plus three
//! orthographic transforms. Candidates are only that: every single one must
//! be independently confirmed by the affix checker before it enters the
//! admissible word set.

use super::affix::{SpellChecker, dic_entries, split_entry};
use super::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use rustc_hash::FxHashSet;

/// Suffixes tried on every base word
pub const INFLECTION_SUFFIXES: [&str; 12] = [
    "s", "es", "ed", "ing", "er", "est", "ly", "ies", "ied", "ier", "iest", "y",
];

/// Final consonants that double before a suffix (run -> running)
const DOUBLING_CONSONANTS: [char; 11] = ['b', 'd', 'f', 'g', 'l', 'm', 'n', 'p', 'r', 's', 't'];

/// All inflection candidates for one base word
///
/// For each suffix, up to four spellings are generated: plain
/// concatenation, drop-trailing-`e` (when the suffix does not start with
/// `e`), `y`-to-`i`, and final-consonant doubling. Duplicates are fine;
/// the caller deduplicates through a set.
#[must_use]
pub fn inflection_candidates(base: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let last = base.chars().last();

    for suffix in INFLECTION_SUFFIXES {
        candidates.push(format!("{base}{suffix}"));

        // bake + ing -> baking
        if last == Some('e') && !suffix.starts_with('e') {
            candidates.push(format!("{}{suffix}", &base[..base.len() - 1]));
        }

        // pony + s -> ponis is wrong, but pony + es -> ponies is right;
        // the checker sorts the wheat from the chaff.
        if last == Some('y') && base.len() > 2 {
            candidates.push(format!("{}i{suffix}", &base[..base.len() - 1]));
        }

        // run + ing -> running
        if let Some(c) = last {
            if DOUBLING_CONSONANTS.contains(&c) && base.len() > 2 {
                candidates.push(format!("{base}{c}{suffix}"));
            }
        }
    }

    candidates
}

/// Build the admissible word set from lexicon text
///
/// Keeps every checker-confirmed base word of admissible length, then every
/// checker-confirmed synthesized inflection of admissible length.
#[must_use]
pub fn build_word_set(checker: &SpellChecker, dic_text: &str) -> FxHashSet<String> {
    let admissible_len = MIN_WORD_LENGTH..=MAX_WORD_LENGTH;
    let mut words = FxHashSet::default();

    for entry in dic_entries(dic_text) {
        let (base, _) = split_entry(entry);
        let base = base.to_lowercase();

        if admissible_len.contains(&base.len()) && checker.correct(&base) {
            words.insert(base.clone());
        }

        for candidate in inflection_candidates(&base) {
            if admissible_len.contains(&candidate.len()) && checker.correct(&candidate) {
                words.insert(candidate);
            }
        }
    }

    words
}
