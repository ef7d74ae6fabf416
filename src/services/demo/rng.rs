//! Seeded pseudo-random numbers and seed derivation for the demo dataset.
//!
//! Both are pure functions of their input so that regenerating data for the
//! same identifier always yields the same values.

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = 1 << 31;

/// Linear congruential generator over a 31-bit state.
///
/// The generator is a plain value: [`SeededRng::step`] consumes a state and
/// returns the drawn value with the successor state. Copying a generator
/// restarts the sequence from that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        SeededRng {
            state: u64::from(seed) % MODULUS,
        }
    }

    /// Advance once: `state' = (state * 1103515245 + 12345) mod 2^31`,
    /// value = `state' / 2^31`, always in `[0, 1)`.
    pub fn step(self) -> (f64, SeededRng) {
        let state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        (state as f64 / MODULUS as f64, SeededRng { state })
    }

    /// Draw the next value in place.
    pub fn next_f64(&mut self) -> f64 {
        let (value, next) = self.step();
        *self = next;
        value
    }

    /// Uniform index in `0..n`.
    pub fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64).floor() as usize
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Derive a generator seed from an identifier.
///
/// Polynomial rolling hash (`h * 31 + unit`) over UTF-16 code units with
/// 32-bit wraparound, then the absolute value. Stable across platforms.
pub fn key_hash(key: &str) -> u32 {
    key.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}

/// Fisher-Yates shuffle of `0..len` driven by `rng`.
pub fn shuffled_indices(rng: &mut SeededRng, len: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = rng.below(i + 1);
        indices.swap(i, j);
    }
    indices
}
