//! Core domain types for the letter grid
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod grid;
mod rng;

pub use grid::{DIRECTIONS, GRID_SIZE, Grid, GridError, Position, Tile};
pub use rng::SeededRng;
