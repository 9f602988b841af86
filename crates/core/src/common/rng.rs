//! Xorshift pseudo-random number generator.
//!
//! A 64-bit xorshift generator: tiny, fast and fully reproducible for a given
//! seed. Each simulation owns its own instance, so two runs with the same seed
//! produce the same sequence regardless of what else runs in the process.

/// Xorshift64 generator state.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Creates a generator from `seed`.
    ///
    /// Xorshift has a fixed point at zero, so a zero seed is remapped to a
    /// nonzero constant.
    pub const fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Returns the next 64-bit value.
    pub const fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns the next value truncated to 32 bits.
    pub const fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Returns a value in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub const fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}
