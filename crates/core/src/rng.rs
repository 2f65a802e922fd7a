//! RNG module - seedable random source for tile spawning
//!
//! The engine never reaches for an ambient RNG. It holds a [`RandomSource`]
//! handed to it at construction, so the same seed replays the same spawns.
//!
//! [`SimpleRng`] is the default source: a 32-bit LCG, cheap and fully
//! deterministic across platforms.

/// Source of random numbers for the engine.
///
/// Implementors only supply [`next_u32`](RandomSource::next_u32); range
/// reduction is shared.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits (multiply-shift) rather than `% max`: the low bits of
    /// an LCG cycle with a short period, which would make a 2-way choice
    /// strictly alternate.
    ///
    /// Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state. Feeding it back into [`SimpleRng::new`]
    /// continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
