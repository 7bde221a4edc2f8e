//! Boggle board generator and solver
//!
//! Generates seeded 4x4 letter boards, solves them exhaustively with a
//! trie-pruned search, and validates word submissions against an expanded
//! dictionary with admin override lists. The same seed always produces the
//! same board and the same word list.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use boggle_solver::dictionary::{Dictionary, DictionarySource};
//! use boggle_solver::generator::generate_validated_grid;
//! use boggle_solver::solver::SearchEngine;
//!
//! let dictionary = Dictionary::new();
//! let words = dictionary.load(&DictionarySource::Embedded).unwrap();
//! let engine = SearchEngine::new(words);
//!
//! let (grid, result) = generate_validated_grid("abc12345", &engine);
//! println!("{grid}");
//! println!("longest: {:?}", result.longest_words);
//! ```

// Core domain types
pub mod core;

// Dictionary loading and word validity
pub mod dictionary;

// Board search
pub mod solver;

// Seeded board generation
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
