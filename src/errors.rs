use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error("data unavailable for {}: {reason}", path.display())]
    DataUnavailable { path: PathBuf, reason: String },
    #[error("io: {0}")]
    Io(String),
    #[error("invalid {kind}: {value:?}")]
    InvalidChoice { kind: &'static str, value: String },
    #[error(transparent)]
    TripParseError(#[from] TripParseError),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TripParseError {
    #[error("unrecognised timestamp {0:?}")]
    Timestamp(String),
    #[error("malformed trip duration {0:?}")]
    MalformedDuration(String),
    #[error("negative trip duration {0:?}")]
    NegativeDuration(String),
    #[error("malformed birth year {0:?}")]
    MalformedBirthYear(String),
}

impl From<std::io::Error> for AppErrors {
    fn from(e: std::io::Error) -> Self {
        AppErrors::Io(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppErrors>;
