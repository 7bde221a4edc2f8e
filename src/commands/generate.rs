//! Board generation command
//!
//! Produces the validated board and its solved-word metrics for a seed.

use crate::core::Grid;
use crate::generator::generate_validated_grid;
use crate::solver::{SearchEngine, SolverResult};
use std::sync::Arc;

/// A generated board together with its authoritative solve
pub struct BoardReport {
    pub seed: String,
    pub grid: Grid,
    pub result: Arc<SolverResult>,
}

/// Generate the validated board for a seed
///
/// Seeds are lower-cased by convention before use, so `ABC` and `abc`
/// name the same board.
#[must_use]
pub fn generate_board(seed: &str, engine: &SearchEngine) -> BoardReport {
    let seed = seed.trim().to_lowercase();
    let (grid, result) = generate_validated_grid(&seed, engine);
    BoardReport { seed, grid, result }
}
