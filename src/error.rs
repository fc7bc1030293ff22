//! Error types shared by every fretlib entry point.

use thiserror::Error;

use crate::pitch::PitchParseError;

pub type Result<T> = std::result::Result<T, FretboardError>;

#[derive(Debug, Error)]
pub enum FretboardError {
    #[error(transparent)]
    Pitch(#[from] PitchParseError),

    #[error("fret count {requested} is outside the supported range 1..={max}")]
    FretCountOutOfRange { requested: usize, max: usize },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("no tuning for this instrument: {name}")]
    UnknownInstrument { name: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FretboardError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
