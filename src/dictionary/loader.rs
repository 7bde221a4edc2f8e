//! One-shot dictionary loading with single-flight semantics
//!
//! The first `load` call reads the affix and lexicon sources, builds the
//! spell checker, and expands the admissible word set. Callers that arrive
//! while a load is in flight block on the same operation instead of
//! starting a duplicate one; a failed load reaches every waiter and leaves
//! the dictionary retryable.

use super::affix::SpellChecker;
use super::inflect::build_word_set;
use super::{EN_AFF, EN_DIC, MIN_WORD_LENGTH};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Condvar, Mutex};

/// The admissible word set: lowercase words, length 3..=20
pub type WordSet = FxHashSet<String>;

/// Error type for dictionary loading and querying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    LoadFailed(String),
    NotLoaded,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadFailed(reason) => write!(f, "Dictionary load failed: {reason}"),
            Self::NotLoaded => write!(f, "Dictionary has not been loaded"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Where the affix and lexicon text come from
#[derive(Debug, Clone, Default)]
pub enum DictionarySource {
    /// The resources compiled into the binary
    #[default]
    Embedded,
    /// Two text files on disk
    Files { aff: PathBuf, dic: PathBuf },
}

impl DictionarySource {
    /// Read the (affix, lexicon) text pair
    ///
    /// # Errors
    /// Returns `DictionaryError::LoadFailed` if either file is unreadable.
    pub fn read(&self) -> Result<(String, String), DictionaryError> {
        match self {
            Self::Embedded => Ok((EN_AFF.to_string(), EN_DIC.to_string())),
            Self::Files { aff, dic } => {
                let aff_text = fs::read_to_string(aff).map_err(|e| {
                    DictionaryError::LoadFailed(format!("{}: {e}", aff.display()))
                })?;
                let dic_text = fs::read_to_string(dic).map_err(|e| {
                    DictionaryError::LoadFailed(format!("{}: {e}", dic.display()))
                })?;
                Ok((aff_text, dic_text))
            }
        }
    }
}

#[derive(Debug)]
enum LoadState {
    NotLoaded,
    Loading,
    Loaded(Arc<WordSet>),
    Failed(String),
}

/// Lazily-loaded admissible word set with membership queries
///
/// Queries made before a successful load fail safe (report "not a valid
/// word"); only `load` itself fails loudly.
#[derive(Debug)]
pub struct Dictionary {
    state: Mutex<LoadState>,
    settled: Condvar,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LoadState::NotLoaded),
            settled: Condvar::new(),
        }
    }

    /// Load and expand the word set, at most once
    ///
    /// Concurrent callers during a load block on the in-flight operation
    /// and observe its outcome. After a failure the dictionary stays
    /// unloaded and a later call retries.
    ///
    /// # Errors
    /// Returns `DictionaryError::LoadFailed` if the sources are unreadable;
    /// the same error reaches every caller awaiting that load.
    ///
    /// # Panics
    /// Panics if the state mutex is poisoned.
    pub fn load(&self, source: &DictionarySource) -> Result<Arc<WordSet>, DictionaryError> {
        let mut state = self.state.lock().unwrap();
        loop {
            match &*state {
                LoadState::Loaded(words) => return Ok(Arc::clone(words)),
                LoadState::Loading => {
                    state = self.settled.wait(state).unwrap();
                    match &*state {
                        LoadState::Loaded(words) => return Ok(Arc::clone(words)),
                        LoadState::Failed(reason) => {
                            return Err(DictionaryError::LoadFailed(reason.clone()));
                        }
                        // A retry raced in; keep waiting on it
                        LoadState::Loading | LoadState::NotLoaded => {}
                    }
                }
                LoadState::NotLoaded | LoadState::Failed(_) => {
                    *state = LoadState::Loading;
                    break;
                }
            }
        }
        drop(state);

        // The slow part runs outside the lock
        let outcome = load_and_expand(source);

        let mut state = self.state.lock().unwrap();
        let result = match outcome {
            Ok(words) => {
                let words = Arc::new(words);
                *state = LoadState::Loaded(Arc::clone(&words));
                Ok(words)
            }
            Err(err) => {
                let reason = match &err {
                    DictionaryError::LoadFailed(r) => r.clone(),
                    DictionaryError::NotLoaded => err.to_string(),
                };
                *state = LoadState::Failed(reason);
                Err(err)
            }
        };
        drop(state);
        self.settled.notify_all();
        result
    }

    /// The loaded word set, if any
    ///
    /// # Panics
    /// Panics if the state mutex is poisoned.
    #[must_use]
    pub fn word_set(&self) -> Option<Arc<WordSet>> {
        match &*self.state.lock().unwrap() {
            LoadState::Loaded(words) => Some(Arc::clone(words)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.word_set().is_some()
    }

    /// Membership query, failing safe before a successful load
    ///
    /// Enforces the minimum word length; never panics or errors.
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        let normalized = word.trim().to_lowercase();
        if normalized.len() < MIN_WORD_LENGTH {
            return false;
        }
        self.word_set()
            .is_some_and(|words| words.contains(&normalized))
    }
}

/// Read sources, build the checker, expand the admissible set
fn load_and_expand(source: &DictionarySource) -> Result<WordSet, DictionaryError> {
    let (aff_text, dic_text) = source.read()?;
    let checker = SpellChecker::from_sources(&aff_text, &dic_text);
    if checker.form_count() == 0 {
        return Err(DictionaryError::LoadFailed(
            "lexicon contains no entries".to_string(),
        ));
    }
    Ok(build_word_set(&checker, &dic_text))
}
