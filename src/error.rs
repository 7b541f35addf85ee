use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A phonetic code length of zero was requested. Codes are always at
    /// least one character, so zero has no meaningful encoding.
    #[error("phonetic code length must be positive")]
    InvalidCodeLength,
}
