//! RNG module - deterministic random source for food placement
//!
//! A small LCG keeps the engine free of I/O and makes every round
//! reproducible from its seed, which the tests and benchmarks rely on.
//! Front ends seed it from the wall clock.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, which have a much longer period than the low bits
    /// of a power-of-two LCG. Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// Derive a seed for a child stream (used when a new round starts).
    pub fn fork_seed(&mut self) -> u32 {
        self.next_u32() ^ 0x9e37_79b9
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
