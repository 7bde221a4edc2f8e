//! Board solving
//!
//! A prefix trie over the admissible word set prunes a backtracking
//! depth-first search across the board; results are memoized per seed.

mod engine;
mod trie;

pub use engine::{SearchEngine, SolverResult};
pub use trie::{Trie, TrieNode};
