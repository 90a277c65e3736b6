use serde::{Deserialize, Serialize};

use crate::error::DitherError;

/// Requantization settings for one output format
///
/// Stores the target word length and noise-shaping strength used when
/// reducing bit depth for a sink. Each output format (e.g. 16-bit export
/// vs 24-bit playback) carries its own settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DitherSettings {
    /// Target output word length in bits (typical range 8-32)
    pub target_bits: i32,
    /// Noise-shaping coefficient in [0, 1]; 0 disables shaping
    pub noise_shaping: f64,
}

impl Default for DitherSettings {
    fn default() -> Self {
        Self {
            target_bits: 16,     // CD word length
            noise_shaping: 0.5,
        }
    }
}

impl DitherSettings {
    /// Create settings for a specific word length with default shaping
    pub fn for_bits(target_bits: i32) -> Self {
        Self {
            target_bits,
            ..Default::default()
        }
    }

    /// Check that these settings describe a representable output format
    ///
    /// Only the word length can be invalid; out-of-range shaping values
    /// are clamped by the processor rather than rejected, so a live
    /// format switch with an unusual coefficient never fails.
    pub fn validate(&self) -> Result<(), DitherError> {
        if self.target_bits <= 0 {
            return Err(DitherError::InvalidConfiguration {
                bits: self.target_bits,
            });
        }
        Ok(())
    }
}
