//! Board generation benchmark
//!
//! Generates many boards in parallel and reports acceptance quality
//! and throughput.

use crate::generator::{MIN_LONGEST_LENGTH, generate_validated_grid};
use crate::solver::SearchEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Aggregate results from a benchmark run
pub struct BenchmarkReport {
    pub boards: usize,
    /// Boards whose longest word met the acceptance bar
    pub accepted: usize,
    /// Boards that fell back to a best-effort or default grid
    pub fallbacks: usize,
    /// How many boards had each longest-word length, sorted by length
    pub longest_distribution: Vec<(usize, usize)>,
    pub elapsed: Duration,
}

impl BenchmarkReport {
    #[must_use]
    pub fn boards_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.boards as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.boards > 0 {
            self.accepted as f64 / self.boards as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Generate `count` boards from seeds `{prefix}-0 .. {prefix}-{count-1}`
///
/// Boards are independent, so generation runs across all cores. Each
/// derived seed goes through the full validation loop, making this a
/// realistic measure of end-to-end board cost.
pub fn run_benchmark(prefix: &str, count: usize, engine: &SearchEngine) -> BenchmarkReport {
    let progress = ProgressBar::new(count as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    progress.set_message("generating boards");

    let start = Instant::now();

    let lengths: Vec<usize> = (0..count)
        .into_par_iter()
        .map(|i| {
            let seed = format!("{prefix}-{i}");
            let (_, result) = generate_validated_grid(&seed, engine);
            progress.inc(1);
            result.longest_length
        })
        .collect();

    let elapsed = start.elapsed();
    progress.finish_with_message("done");

    let accepted = lengths
        .iter()
        .filter(|&&len| len >= MIN_LONGEST_LENGTH)
        .count();

    let mut distribution: Vec<(usize, usize)> = Vec::new();
    let mut sorted = lengths;
    sorted.sort_unstable();
    for len in sorted {
        match distribution.last_mut() {
            Some((l, n)) if *l == len => *n += 1,
            _ => distribution.push((len, 1)),
        }
    }

    BenchmarkReport {
        boards: count,
        accepted,
        fallbacks: count - accepted,
        longest_distribution: distribution,
        elapsed,
    }
}
