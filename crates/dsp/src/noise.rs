//! Deterministic pseudo-random generators for dither noise
//!
//! A 32-bit linear congruential generator is all the sample path needs:
//! it is branch-free, allocation-free, and reproducible from a seed, which
//! keeps offline renders bit-exact across runs.

/// Linear congruential generator with 32-bit state
///
/// Uses the Numerical Recipes constants (a = 1664525, c = 1013904223,
/// mod 2^32). Update-then-extract: every draw advances the state first,
/// so consecutive draws are distinct members of the sequence.
///
/// `Copy` so holding one inside a real-time processor stays trivially
/// cheap to clone and move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const A: u32 = 1664525;
    const C: u32 = 1013904223;

    /// Create a generator from a seed
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Replace the state with a new seed
    pub fn reseed(&mut self, seed: u32) {
        self.state = seed;
    }

    /// Advance the sequence and return the raw 32-bit state
    #[inline]
    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::A).wrapping_add(Self::C);
        self.state
    }

    /// Uniform deviate in [-1.0, 1.0)
    ///
    /// Maps the signed 32-bit state onto the unit interval; the mean of
    /// the distribution is -2^-32, which the dither stage compensates
    /// with a constant offset derived at configure time.
    #[inline]
    pub fn next_bipolar(&mut self) -> f64 {
        (self.next() as i32 as f64) * (1.0 / 2147483648.0)
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(0x2545_F491)
    }
}
