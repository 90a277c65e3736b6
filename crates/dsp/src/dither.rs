//! TPDF dithering and noise shaping for bit-depth reduction
//!
//! Reduces full-precision samples to a target word length while masking
//! quantization error. Triangular-PDF noise (the sum of two independent
//! uniform deviates) decorrelates the error from the signal; a
//! second-order error-feedback filter pushes the residual noise away from
//! the most audible region.
//!
//! One instance per independent signal path: the error-feedback history is
//! per-instance state, and sharing an engine across channels would leak
//! shaped noise between them.

use requant_core::{DitherError, DitherSettings};
use tracing::debug;

use crate::noise::Lcg;

/// Default seeds for the two dither generators
///
/// Distinct constants so the generators are independent from the first
/// sample; a freshly built engine is deterministic without any seeding.
const SEED_A: u32 = 0x9E37_79B9;
const SEED_B: u32 = 0x6A09_E667;

/// Dithering processor with second-order noise shaping
///
/// Starts out unconfigured; [`Dither::configure`] derives the quantization
/// step, dither amplitude and DC compensation for a target word length and
/// must succeed before the first call to [`Dither::process`]. Processing an
/// unconfigured engine is a programming error: debug builds panic, release
/// builds pass the input through unchanged.
///
/// `process` is real-time safe: no allocation, no locking, no I/O,
/// constant time per sample. `configure` belongs on a control thread; the
/// engine performs no internal synchronization, so callers must quiesce
/// the audio path before reconfiguring it from another thread.
#[derive(Debug, Clone)]
pub struct Dither {
    target_bits: i32,
    noise_shaping: f64,
    // Derived at configure time, always consistent as a set
    word_length: f64,
    quantum: f64,
    dither_amplitude: f64,
    dc_offset: f64,
    // Two independent generators; their sum is the TPDF deviate
    rng_a: Lcg,
    rng_b: Lcg,
    // Quantization error of the previous two samples
    error_1: f64,
    error_2: f64,
    configured: bool,
}

impl Dither {
    /// Create an unconfigured engine with the default seeds
    pub fn new() -> Self {
        Self {
            target_bits: 0,
            noise_shaping: 0.0,
            word_length: 0.0,
            quantum: 0.0,
            dither_amplitude: 0.0,
            dc_offset: 0.0,
            rng_a: Lcg::new(SEED_A),
            rng_b: Lcg::new(SEED_B),
            error_1: 0.0,
            error_2: 0.0,
            configured: false,
        }
    }

    /// Create and configure an engine from a settings model
    pub fn from_settings(settings: &DitherSettings) -> Result<Self, DitherError> {
        let mut dither = Self::new();
        dither.configure(settings.target_bits, settings.noise_shaping)?;
        Ok(dither)
    }

    /// Set the target word length and noise-shaping strength
    ///
    /// Recomputes every derived quantity in one step so no sample is ever
    /// processed with a mismatched word length and dither amplitude. The
    /// error-feedback history is cleared: shaped-error energy computed for
    /// a different word length must not leak into the new format. The
    /// generators keep running so the noise floor stays continuous across
    /// a live format switch; use [`Dither::reseed`] for bit-exact renders.
    ///
    /// Any positive word length is accepted, including degenerate ones;
    /// `noise_shaping` is clamped into `[0, 1]`. On error the previous
    /// configuration is left untouched.
    pub fn configure(
        &mut self,
        number_of_bits: i32,
        noise_shaping: f64,
    ) -> Result<(), DitherError> {
        if number_of_bits <= 0 {
            return Err(DitherError::InvalidConfiguration {
                bits: number_of_bits,
            });
        }

        self.target_bits = number_of_bits;
        self.noise_shaping = noise_shaping.clamp(0.0, 1.0);

        // Signed representation: n bits leave 2^(n-1) levels per polarity
        self.word_length = 2.0_f64.powi(number_of_bits - 1);
        self.quantum = 1.0 / self.word_length;

        // The summed deviates span (-2, 2); a quarter step of gain gives
        // the TPDF noise exactly one quantization step peak-to-peak
        self.dither_amplitude = 0.25 * self.quantum;

        // Each deviate has mean -2^-32, so the scaled sum sits 2^-31
        // amplitudes below zero
        self.dc_offset = self.dither_amplitude * (1.0 / 2147483648.0);

        self.error_1 = 0.0;
        self.error_2 = 0.0;
        self.configured = true;

        debug!(
            bits = number_of_bits,
            noise_shaping = self.noise_shaping,
            "dither reconfigured"
        );
        Ok(())
    }

    /// Requantize a single sample to the configured word length
    ///
    /// The input is nominally in [-1.0, 1.0] but is not clamped; out-of-
    /// range values pass through the same arithmetic so results stay
    /// bit-exact and reproducible.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        debug_assert!(self.configured, "process() called before configure()");
        if !self.configured {
            return input;
        }

        // Feed back the previous errors through the shaping filter
        let shaped = input + self.noise_shaping * (2.0 * self.error_1 - self.error_2);

        // One draw from each generator; the sum is triangular
        let tpdf = self.rng_a.next_bipolar() + self.rng_b.next_bipolar();
        let dithered = shaped + tpdf * self.dither_amplitude + self.dc_offset;

        // Round to the nearest representable level
        let quantized = (dithered * self.word_length).round() * self.quantum;

        // Slide the two-tap error history
        self.error_2 = self.error_1;
        self.error_1 = quantized - dithered;

        quantized
    }

    /// Requantize a borrowed slice in place
    ///
    /// Convenience over per-sample calls; the caller still owns buffers
    /// and channel iteration.
    pub fn process_block(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear the error-feedback history (call when a stream restarts)
    pub fn reset(&mut self) {
        self.error_1 = 0.0;
        self.error_2 = 0.0;
    }

    /// Reseed both generators for reproducible output
    pub fn reseed(&mut self, seed_a: u32, seed_b: u32) {
        self.rng_a.reseed(seed_a);
        self.rng_b.reseed(seed_b);
    }

    /// Word length from the last successful configure
    pub fn target_bits(&self) -> i32 {
        self.target_bits
    }

    /// Effective noise-shaping coefficient (after clamping)
    pub fn noise_shaping(&self) -> f64 {
        self.noise_shaping
    }

    /// Whether the engine has been configured
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

impl Default for Dither {
    fn default() -> Self {
        Self::new()
    }
}
