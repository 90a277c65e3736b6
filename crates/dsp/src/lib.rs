//! Bit-depth reduction DSP for audio pipelines
//!
//! Contains real-time safe processing components:
//! - Dither: TPDF dithering and noise shaping for word-length reduction
//! - Noise: deterministic linear-congruential generators feeding the dither
//!
//! The enclosing pipeline owns sample buffers and channel iteration; these
//! components transform samples one at a time (or one borrowed slice at a
//! time) and hold no buffers of their own.

pub mod dither;
pub mod noise;

// Re-export commonly used types for convenience
pub use dither::Dither;
pub use noise::Lcg;
pub use requant_core::{DitherError, DitherSettings};
