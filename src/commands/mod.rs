//! Command implementations

pub mod benchmark;
pub mod check;
pub mod generate;

pub use benchmark::{BenchmarkReport, run_benchmark};
pub use check::{CheckReason, CheckReport, check_word};
pub use generate::{BoardReport, generate_board};
