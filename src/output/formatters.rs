//! Small formatting helpers for terminal display

use crate::core::{GRID_SIZE, Grid, Position};

/// Render a grid as aligned rows of letter tokens
///
/// Each cell is padded to two columns so the QU digraph lines up with
/// single letters.
#[must_use]
pub fn grid_rows(grid: &Grid) -> Vec<String> {
    (0..GRID_SIZE)
        .map(|row| {
            (0..GRID_SIZE)
                .map(|col| format!("{:<2}", grid.tile(Position::new(row, col)).token()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// A proportional bar for distribution charts
#[must_use]
pub fn distribution_bar(count: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let filled = (count * width).div_ceil(total).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
