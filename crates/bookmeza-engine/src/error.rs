use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from CRUD mediation. All are local to the rejected operation; the
/// record collection is never touched before validation succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Required fields (first name, last name, email) were empty.
    MissingRequiredFields(Vec<&'static str>),
    /// An update referenced an identifier that does not exist.
    UnknownRecord(i64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingRequiredFields(fields) => {
                write!(f, "required fields missing: {}", fields.join(", "))
            }
            Error::UnknownRecord(id) => write!(f, "no record with id {}", id),
        }
    }
}

impl std::error::Error for Error {}
