//! Seeded pseudo-random stream
//!
//! Reproduces the classic hash-then-sine generator: the seed string is
//! folded with a polynomial rolling hash into a 32-bit integer, and each
//! draw maps an incrementing counter through `frac(sin(n) * 10000)`.
//!
//! Low statistical quality, but bit-for-bit deterministic across runs and
//! platforms for the same seed string. NOT cryptographically secure; never
//! use it for anything security-sensitive.

/// Deterministic pseudo-random stream seeded from a string
#[derive(Debug, Clone)]
pub struct SeededRng {
    counter: i64,
}

impl SeededRng {
    /// Seed the stream from an arbitrary string (empty is fine)
    #[must_use]
    pub fn new(seed: &str) -> Self {
        Self {
            counter: i64::from(hash_seed(seed)),
        }
    }

    /// Next value in [0, 1)
    pub fn next(&mut self) -> f64 {
        let x = (self.counter as f64).sin() * 10_000.0;
        self.counter += 1;
        x - x.floor()
    }

    /// Next integer in the closed range [min, max]
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next() * ((max - min + 1) as f64)).floor() as i64 + min
    }

    /// Draw an index in [0, len)
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw from an empty range");
        (self.next() * len as f64).floor() as usize
    }
}

/// Polynomial rolling hash over UTF-16 code units, wrapping signed 32-bit,
/// absolute value taken. Matches `hash = hash * 31 + unit` via the
/// `(hash << 5) - hash` formulation.
fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_known_values() {
        // h("abc") = (97*31 + 98)*31 + 99 = 96354
        assert_eq!(hash_seed("abc"), 96_354);
        assert_eq!(hash_seed(""), 0);
        assert_eq!(hash_seed("a"), 97);
    }

    #[test]
    fn hash_wraps_to_32_bits() {
        // Long strings overflow i32; the result stays within u32 range and
        // is stable across runs.
        let long = "x".repeat(100);
        assert_eq!(hash_seed(&long), hash_seed(&long));
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRng::new("abc12345");
        let mut b = SeededRng::new("abc12345");
        for _ in 0..100 {
            assert!((a.next() - b.next()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = SeededRng::new("seed-one");
        let mut b = SeededRng::new("seed-two");
        let differs = (0..10).any(|_| (a.next() - b.next()).abs() > f64::EPSILON);
        assert!(differs);
    }

    #[test]
    fn next_stays_in_unit_interval() {
        let mut rng = SeededRng::new("range-check");
        for _ in 0..1000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn next_int_stays_in_closed_range() {
        let mut rng = SeededRng::new("int-range");
        for _ in 0..1000 {
            let v = rng.next_int(3, 7);
            assert!((3..=7).contains(&v));
        }
    }

    #[test]
    fn next_int_hits_both_endpoints() {
        let mut rng = SeededRng::new("endpoints");
        let draws: Vec<i64> = (0..500).map(|_| rng.next_int(0, 1)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&1));
    }

    #[test]
    fn empty_seed_is_valid_and_deterministic() {
        let mut a = SeededRng::new("");
        let mut b = SeededRng::new("");
        assert!((a.next() - b.next()).abs() < f64::EPSILON);
    }

    #[test]
    fn next_index_covers_pool() {
        let mut rng = SeededRng::new("pool");
        for _ in 0..100 {
            assert!(rng.next_index(10) < 10);
        }
    }
}
