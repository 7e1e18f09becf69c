use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown algorithm: {name:?}")]
    UnknownAlgorithm { name: String },

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("pause interrupted: {cause}")]
    PauseInterrupted { cause: InterruptCause },
}

/// What woke a pause before its delay elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptCause {
    /// Someone asked to skip the current delay.
    Nudged,
    /// The run was cancelled.
    Cancelled,
}

impl fmt::Display for InterruptCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterruptCause::Nudged => write!(f, "nudged"),
            InterruptCause::Cancelled => write!(f, "run cancelled"),
        }
    }
}
