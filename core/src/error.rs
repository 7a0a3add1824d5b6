use thiserror::Error;

/// Uniqrode error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown draw mode: {0} (expected 1, 2 or 3)")]
    UnknownProfile(u8),

    #[error("malformed matrix: row {row} has {len} columns, row-block needs {needed}")]
    MalformedMatrix { row: usize, len: usize, needed: usize },

    #[error("unknown recovery level: {0} (expected 1..=4)")]
    UnknownRecoveryLevel(u8),

    #[error("quiet zone too large: {0} modules (max {max})", max = crate::constants::MAX_QUIET_ZONE)]
    QuietZoneTooLarge(usize),

    #[error("QR encoding failed: {0}")]
    QrEncode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
