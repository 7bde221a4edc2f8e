//! Grid generation and validation
//!
//! Candidate boards are filled from a frequency-weighted letter pool using
//! the seeded stream, filtered by vowel count, and solved; the first board
//! whose longest word meets the acceptance bar wins. The same top-level
//! seed always yields the same accepted board and result.

use crate::core::{GRID_SIZE, Grid, SeededRng};
use crate::solver::{SearchEngine, SolverResult};
use rand::Rng;
use std::sync::{Arc, LazyLock};

/// Fewest vowel tiles an acceptable board may have
pub const MIN_VOWELS: usize = 4;

/// Most vowel tiles an acceptable board may have
pub const MAX_VOWELS: usize = 7;

/// A board is accepted once its longest solvable word reaches this length
pub const MIN_LONGEST_LENGTH: usize = 6;

/// Candidate boards tried before falling back to the best seen
pub const MAX_GENERATION_ATTEMPTS: usize = 200;

/// English letter frequencies (percent), in pool order
const LETTER_FREQUENCIES: [(char, f64); 26] = [
    ('E', 12.7),
    ('T', 9.1),
    ('A', 8.2),
    ('O', 7.5),
    ('I', 7.0),
    ('N', 6.7),
    ('S', 6.3),
    ('H', 6.1),
    ('R', 6.0),
    ('D', 4.3),
    ('L', 4.0),
    ('C', 2.8),
    ('U', 2.8),
    ('M', 2.4),
    ('W', 2.4),
    ('F', 2.2),
    ('G', 2.0),
    ('Y', 2.0),
    ('P', 1.9),
    ('B', 1.5),
    ('V', 1.0),
    ('K', 0.8),
    ('J', 0.15),
    ('X', 0.15),
    ('Q', 0.10),
    ('Z', 0.07),
];

/// Weighted draw pool: each letter appears `round(freq * 10)` times, so
/// common letters are proportionally more likely. Pool order is part of
/// the reproducibility contract.
static WEIGHTED_LETTERS: LazyLock<Vec<char>> = LazyLock::new(|| {
    let mut pool = Vec::new();
    for (letter, freq) in LETTER_FREQUENCIES {
        let count = (freq * 10.0).round() as usize;
        for _ in 0..count {
            pool.push(letter);
        }
    }
    pool
});

/// Fill a board with 16 draws from the weighted pool
fn fill_grid<F: FnMut(usize) -> usize>(mut draw_index: F) -> Grid {
    let pool = &*WEIGHTED_LETTERS;
    let letters: Vec<char> = (0..GRID_SIZE * GRID_SIZE)
        .map(|_| pool[draw_index(pool.len())])
        .collect();
    // Pool letters are always valid tiles
    Grid::from_letters(&letters).expect("weighted pool contains only letters")
}

/// The candidate board for one attempt of a generation run
///
/// Cell (0,0) is the first draw of `SeededRng::new("{seed}-{attempt}")`,
/// filling row-major. A drawn `Q` becomes the `QU` tile.
#[must_use]
pub fn generate_candidate_grid(seed: &str, attempt: usize) -> Grid {
    let mut rng = SeededRng::new(&format!("{seed}-{attempt}"));
    fill_grid(|len| rng.next_index(len))
}

/// Ad hoc board from the same weighted pool
///
/// With a seed the board is reproducible; without one it draws from thread
/// randomness and carries no reproducibility guarantee.
#[must_use]
pub fn generate_grid(seed: Option<&str>) -> Grid {
    match seed {
        Some(seed) => {
            let mut rng = SeededRng::new(seed);
            fill_grid(|len| rng.next_index(len))
        }
        None => {
            let mut rng = rand::rng();
            fill_grid(|len| rng.random_range(0..len))
        }
    }
}

/// Random 8-character seed code for sharing a fresh board
#[must_use]
pub fn generate_seed_code() -> String {
    const CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    (0..8)
        .map(|_| CHARS[rng.random_range(0..CHARS.len())] as char)
        .collect()
}

/// Generate the authoritative board and solved-word metrics for a seed
///
/// Tries up to 200 attempt-indexed candidates: boards outside the vowel
/// band are skipped without solving; the first board whose longest word
/// reaches the acceptance bar is returned immediately. If none qualifies,
/// the best-scoring rejected board is returned; if every candidate failed
/// the vowel filter, attempt 0's board is solved fresh as a last resort.
#[must_use]
pub fn generate_validated_grid(seed: &str, engine: &SearchEngine) -> (Grid, Arc<SolverResult>) {
    let mut best: Option<(Grid, Arc<SolverResult>)> = None;
    let mut best_length = 0;

    for attempt in 0..MAX_GENERATION_ATTEMPTS {
        let candidate = generate_candidate_grid(seed, attempt);

        let vowels = candidate.vowel_count();
        if !(MIN_VOWELS..=MAX_VOWELS).contains(&vowels) {
            continue;
        }

        let result = engine.solve(&candidate, &format!("{seed}-{attempt}"));

        if result.longest_length >= MIN_LONGEST_LENGTH {
            return (candidate, result);
        }

        if result.longest_length > best_length {
            best_length = result.longest_length;
            best = Some((candidate, result));
        }
    }

    if let Some(fallback) = best {
        return fallback;
    }

    let fallback = generate_candidate_grid(seed, 0);
    let result = engine.solve(&fallback, &format!("{seed}-0"));
    (fallback, result)
}
