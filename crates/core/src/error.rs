use thiserror::Error;

/// Errors produced when (re)configuring a dither processor
///
/// The steady-state sample path never fails; misconfiguration is caught
/// at configure time so the audio callback stays error-free.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// The requested output word length cannot be represented
    #[error("invalid word length: {bits} bits (must be positive)")]
    InvalidConfiguration { bits: i32 },
}
