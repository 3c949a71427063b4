use thiserror::Error;

/// Rejected harness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("alphabet must contain at least one value")]
    EmptyAlphabet,

    #[error("alphabet of {0} values does not fit in a 32-bit signed integer (at most 2^32)")]
    AlphabetTooLarge(u64),

    #[error("repeats must be at least 1")]
    ZeroRepeats,
}
