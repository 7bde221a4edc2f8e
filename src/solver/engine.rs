//! Trie-pruned board search with per-seed memoization
//!
//! For each of the 16 starting cells the engine runs a backtracking
//! depth-first traversal carrying the current trie node, the accumulated
//! path string, and a 16-bit visited mask. Branches die as soon as no
//! dictionary word shares the current prefix.

use crate::core::{DIRECTIONS, GRID_SIZE, Grid, Position};
use crate::dictionary::{MIN_WORD_LENGTH, WordSet};
use crate::solver::{Trie, TrieNode};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// Everything the solver found on one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResult {
    /// All found words, sorted lexicographically
    pub all_words: Vec<String>,
    /// Length of the longest found word (0 if none)
    pub longest_length: usize,
    /// All found words of the longest length, sorted lexicographically
    pub longest_words: Vec<String>,
    /// Count of longest words
    pub longest_count: usize,
}

impl SolverResult {
    /// Derive longest-word statistics from the deduplicated found set
    fn from_found(found: BTreeSet<String>) -> Self {
        let all_words: Vec<String> = found.into_iter().collect();
        let longest_length = all_words.iter().map(String::len).max().unwrap_or(0);
        let longest_words: Vec<String> = all_words
            .iter()
            .filter(|word| word.len() == longest_length)
            .cloned()
            .collect();
        let longest_count = longest_words.len();

        Self {
            all_words,
            longest_length,
            longest_words,
            longest_count,
        }
    }
}

/// Owned solving state: word set, lazily-built trie, per-seed result cache
///
/// An explicit, injectable object rather than ambient globals, so tests
/// never leak state into each other. Caches are mutex-guarded; the first
/// trie build and each seed's first solve happen at most once.
#[derive(Debug)]
pub struct SearchEngine {
    word_set: Arc<WordSet>,
    min_word_length: usize,
    trie: Mutex<Option<Arc<Trie>>>,
    results: Mutex<FxHashMap<String, Arc<SolverResult>>>,
}

impl SearchEngine {
    /// Engine over a word set with the default minimum word length (3)
    #[must_use]
    pub fn new(word_set: Arc<WordSet>) -> Self {
        Self::with_min_word_length(word_set, MIN_WORD_LENGTH)
    }

    /// Engine with an explicit minimum word length
    #[must_use]
    pub fn with_min_word_length(word_set: Arc<WordSet>, min_word_length: usize) -> Self {
        Self {
            word_set,
            min_word_length,
            trie: Mutex::new(None),
            results: Mutex::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub const fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// The trie over the word set, built on first use and cached
    ///
    /// Words shorter than the minimum word length are not inserted.
    ///
    /// # Panics
    /// Panics if the trie mutex is poisoned.
    #[must_use]
    pub fn trie(&self) -> Arc<Trie> {
        let mut slot = self.trie.lock().unwrap();
        if let Some(trie) = slot.as_ref() {
            return Arc::clone(trie);
        }
        let trie: Trie = self
            .word_set
            .iter()
            .filter(|word| word.len() >= self.min_word_length)
            .collect();
        let trie = Arc::new(trie);
        *slot = Some(Arc::clone(&trie));
        trie
    }

    /// Solve a board, memoized by seed
    ///
    /// A cache hit returns exactly what a fresh computation would produce;
    /// cached entries are never evicted.
    ///
    /// # Panics
    /// Panics if the result-cache mutex is poisoned.
    #[must_use]
    pub fn solve(&self, grid: &Grid, seed: &str) -> Arc<SolverResult> {
        if let Some(hit) = self.results.lock().unwrap().get(seed) {
            return Arc::clone(hit);
        }

        let trie = self.trie();
        let found = solve_board(grid, &trie, self.min_word_length);
        let result = Arc::new(SolverResult::from_found(found));

        self.results
            .lock()
            .unwrap()
            .insert(seed.to_string(), Arc::clone(&result));
        result
    }

    /// Drop all memoized results (testing hook)
    ///
    /// # Panics
    /// Panics if the result-cache mutex is poisoned.
    pub fn clear_cache(&self) {
        self.results.lock().unwrap().clear();
    }

    /// Re-check a solved board against the word set
    ///
    /// Returns a description of every found word that is not a member of
    /// the admissible set; an empty result means the solve is sound.
    #[must_use]
    pub fn verify(&self, grid: &Grid, seed: &str) -> Vec<String> {
        self.solve(grid, seed)
            .all_words
            .iter()
            .filter(|word| !self.word_set.contains(*word))
            .map(|word| format!("Solver found inadmissible word: {word:?}"))
            .collect()
    }
}

/// Exhaustive search from every starting cell
fn solve_board(grid: &Grid, trie: &Trie, min_word_length: usize) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut path = String::new();

    for start in Grid::positions() {
        // Each starting cell gets its own fresh visited mask
        let mut visited: u16 = 0;
        dfs(
            grid,
            start,
            trie.root(),
            &mut path,
            &mut visited,
            min_word_length,
            &mut found,
        );
        debug_assert!(path.is_empty());
        debug_assert_eq!(visited, 0);
    }

    found
}

/// One backtracking step: walk the cell's token through the trie, record a
/// complete word, recurse into unvisited neighbors, restore state on exit.
fn dfs(
    grid: &Grid,
    pos: Position,
    node: &TrieNode,
    path: &mut String,
    visited: &mut u16,
    min_word_length: usize,
    found: &mut BTreeSet<String>,
) {
    // A token may be two characters (QU); prune on any missing edge
    let mut next = node;
    let before_len = path.len();
    for c in grid.tile(pos).chars_lower() {
        match next.child(c) {
            Some(child) => {
                next = child;
                path.push(c);
            }
            None => {
                path.truncate(before_len);
                return;
            }
        }
    }

    let bit = 1u16 << (pos.row * GRID_SIZE + pos.col);
    *visited |= bit;

    if next.is_word() && path.len() >= min_word_length {
        found.insert(path.clone());
    }

    for (dr, dc) in DIRECTIONS {
        let row = pos.row as i8 + dr;
        let col = pos.col as i8 + dc;
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            continue;
        }
        let neighbor = Position::new(row as usize, col as usize);
        if *visited & (1u16 << (neighbor.row * GRID_SIZE + neighbor.col)) != 0 {
            continue;
        }
        dfs(grid, neighbor, next, path, visited, min_word_length, found);
    }

    // Unmark on exit so other paths may reuse this cell
    *visited &= !bit;
    path.truncate(before_len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn word_set(words: &[&str]) -> Arc<WordSet> {
        Arc::new(words.iter().map(|w| (*w).to_string()).collect::<FxHashSet<_>>())
    }

    fn grid(letters: &str) -> Grid {
        let chars: Vec<char> = letters.chars().collect();
        Grid::from_letters(&chars).unwrap()
    }

    #[test]
    fn finds_word_and_its_extension() {
        // c a t s in the top row: both "cat" and "cats" are reachable
        let engine = SearchEngine::new(word_set(&["cat", "cats"]));
        let board = grid("catsxxxxxxxxxxxx");

        let result = engine.solve(&board, "seed");
        assert_eq!(result.all_words, vec!["cat", "cats"]);
        assert_eq!(result.longest_length, 4);
        assert_eq!(result.longest_words, vec!["cats"]);
        assert_eq!(result.longest_count, 1);
    }

    #[test]
    fn respects_non_repeating_tiles() {
        // "tot" needs two t tiles; this board has only one
        let engine = SearchEngine::new(word_set(&["tot"]));
        let board = grid("toxxxxxxxxxxxxxx");

        let result = engine.solve(&board, "seed");
        assert!(result.all_words.is_empty());
        assert_eq!(result.longest_length, 0);
        assert_eq!(result.longest_count, 0);
    }

    #[test]
    fn finds_word_through_qu_tile() {
        // q plays as QU, so q-i-t spells "quit"
        let engine = SearchEngine::new(word_set(&["quit"]));
        let board = grid("qitxxxxxxxxxxxxx");

        let result = engine.solve(&board, "seed");
        assert_eq!(result.all_words, vec!["quit"]);
    }

    #[test]
    fn min_word_length_filters_short_words() {
        let engine = SearchEngine::new(word_set(&["at", "ate"]));
        let board = grid("atexxxxxxxxxxxxx");

        let result = engine.solve(&board, "seed");
        assert_eq!(result.all_words, vec!["ate"]);
    }

    #[test]
    fn words_must_use_adjacent_tiles() {
        // c at (0,0) and t at (0,3) are not adjacent; a sits between
        let engine = SearchEngine::new(word_set(&["cot"]));
        let board = grid("cxxtxxxxxxxxxxxo");

        let result = engine.solve(&board, "seed");
        assert!(result.all_words.is_empty());
    }

    #[test]
    fn diagonal_paths_count() {
        // c(0,0) -> a(1,1) -> t(2,2) is a diagonal path
        let engine = SearchEngine::new(word_set(&["cat"]));
        let board = grid("cxxxxaxxxxtxxxxx");

        let result = engine.solve(&board, "seed");
        assert_eq!(result.all_words, vec!["cat"]);
    }

    #[test]
    fn duplicate_paths_counted_once() {
        // two a tiles adjacent to c and t: "cat" is reachable twice
        let engine = SearchEngine::new(word_set(&["cat"]));
        let board = grid("catxaxxxxxxxxxxx");

        let result = engine.solve(&board, "seed");
        assert_eq!(result.all_words, vec!["cat"]);
    }

    /// Brute-force check that a word is spellable as an adjacent,
    /// non-repeating tile path on the grid.
    fn path_exists(board: &Grid, word: &str) -> bool {
        fn step(
            board: &Grid,
            pos: Position,
            word: &[char],
            idx: usize,
            visited: &mut Vec<Position>,
        ) -> bool {
            let mut idx = idx;
            for c in board.tile(pos).chars_lower() {
                if word.get(idx) != Some(&c) {
                    return false;
                }
                idx += 1;
            }

            visited.push(pos);
            let done = idx == word.len()
                || Grid::positions().any(|next| {
                    pos.is_adjacent(next)
                        && !next.is_in_path(visited)
                        && step(board, next, word, idx, visited)
                });
            visited.pop();
            done
        }

        let chars: Vec<char> = word.chars().collect();
        Grid::positions().any(|start| step(board, start, &chars, 0, &mut Vec::new()))
    }

    #[test]
    fn every_found_word_has_a_realizable_path() {
        let engine = SearchEngine::new(word_set(&["cat", "cats", "ate", "quit", "east"]));
        let board = grid("catsexxiqxxtxxxx");

        let result = engine.solve(&board, "seed");
        assert!(!result.all_words.is_empty());
        for word in &result.all_words {
            assert!(path_exists(&board, word), "no path spells {word:?}");
        }
    }

    #[test]
    fn cache_hit_returns_identical_result() {
        let engine = SearchEngine::new(word_set(&["cat", "cats"]));
        let board = grid("catsxxxxxxxxxxxx");

        let first = engine.solve(&board, "seed");
        let second = engine.solve(&board, "seed");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn cache_is_keyed_by_seed() {
        let engine = SearchEngine::new(word_set(&["cat"]));
        let with_cat = grid("catxxxxxxxxxxxxx");
        let without = grid("xxxxxxxxxxxxxxxx");

        let first = engine.solve(&with_cat, "seed-a");
        let second = engine.solve(&without, "seed-b");
        assert_eq!(first.all_words, vec!["cat"]);
        assert!(second.all_words.is_empty());
    }

    #[test]
    fn clear_cache_forces_recomputation() {
        let engine = SearchEngine::new(word_set(&["cat"]));
        let board = grid("catxxxxxxxxxxxxx");

        let first = engine.solve(&board, "seed");
        engine.clear_cache();
        let second = engine.solve(&board, "seed");
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.all_words, second.all_words);
    }

    #[test]
    fn trie_build_is_idempotent() {
        let engine = SearchEngine::new(word_set(&["cat"]));
        let first = engine.trie();
        let second = engine.trie();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn trie_excludes_sub_minimum_words() {
        let engine = SearchEngine::new(word_set(&["at", "ate"]));
        let trie = engine.trie();
        assert!(!trie.contains("at"));
        assert!(trie.contains("ate"));
    }

    #[test]
    fn verify_accepts_sound_results() {
        let engine = SearchEngine::new(word_set(&["cat", "cats"]));
        let board = grid("catsxxxxxxxxxxxx");
        assert!(engine.verify(&board, "seed").is_empty());
    }

    #[test]
    fn longest_stats_with_ties() {
        let engine = SearchEngine::new(word_set(&["cat", "act"]));
        // c a t with a adjacent to both: "cat" and "act" both reachable
        let board = grid("catxxxxxxxxxxxxx");

        let result = engine.solve(&board, "seed");
        assert_eq!(result.longest_length, 3);
        assert_eq!(result.longest_words, vec!["act", "cat"]);
        assert_eq!(result.longest_count, 2);
    }
}
