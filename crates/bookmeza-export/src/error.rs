use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors terminating one export attempt. None of them corrupt the record
/// collection; the caller's grid state is untouched.
#[derive(Debug)]
pub enum Error {
    /// Export was attempted with zero selected columns. The caller must
    /// block initiation; no file is ever produced.
    EmptySelection,
    /// The host refused to open the print browsing context.
    PopupBlocked,
    /// The requested format string is not in the supported set. Fail-closed;
    /// there is deliberately no silent CSV fallback.
    UnknownFormat(String),
    /// CSV serialization failed.
    Csv(csv::Error),
    /// The host environment failed to deliver the payload.
    Host(anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySelection => write!(f, "export requires at least one selected column"),
            Error::PopupBlocked => write!(f, "print context could not be opened"),
            Error::UnknownFormat(value) => write!(f, "unknown export format: {}", value),
            Error::Csv(err) => write!(f, "CSV serialization failed: {}", err),
            Error::Host(err) => write!(f, "host environment error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Csv(err) => Some(err),
            Error::Host(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
