//! Prefix tree over lowercase words
//!
//! The solver only needs child lookup by character and the complete-word
//! flag; there is no delete.

use rustc_hash::FxHashMap;

/// One trie node: children keyed by character plus a word marker
#[derive(Debug, Default)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// Child node for a character, if any word continues this way
    #[inline]
    #[must_use]
    pub fn child(&self, c: char) -> Option<&Self> {
        self.children.get(&c)
    }

    /// Whether the path from the root to this node spells a complete word
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }
}

/// Prefix tree; the root represents the empty prefix
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, lowercased, one node per character
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.to_lowercase().chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct complete words inserted
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether a complete word is present
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.to_lowercase().chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut trie = Trie::new();
        trie.insert("cat");
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("cats"));
    }

    #[test]
    fn prefix_nodes_are_not_words() {
        let mut trie = Trie::new();
        trie.insert("cats");
        let c = trie.root().child('c').unwrap();
        let a = c.child('a').unwrap();
        let t = a.child('t').unwrap();
        assert!(!t.is_word());
        assert!(t.child('s').unwrap().is_word());
    }

    #[test]
    fn word_and_its_extension_both_marked() {
        let mut trie = Trie::new();
        trie.insert("cat");
        trie.insert("cats");
        assert!(trie.contains("cat"));
        assert!(trie.contains("cats"));
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn insert_lowercases() {
        let mut trie = Trie::new();
        trie.insert("CAT");
        assert!(trie.contains("cat"));
    }

    #[test]
    fn duplicate_insert_counted_once() {
        let mut trie = Trie::new();
        trie.insert("cat");
        trie.insert("cat");
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn from_iterator_builds_all_words() {
        let trie: Trie = ["one", "two", "three"].into_iter().collect();
        assert_eq!(trie.word_count(), 3);
        assert!(trie.contains("two"));
    }

    #[test]
    fn missing_edge_means_absent() {
        let trie: Trie = ["quit"].into_iter().collect();
        assert!(trie.root().child('q').is_some());
        assert!(trie.root().child('z').is_none());
    }
}
