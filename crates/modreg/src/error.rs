use candid::CandidType;
use derive_more::Display;
use modreg_core::error::{ConvertError, ErrorClass};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind taxonomy for the request layer.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    /// Entity kind the request targeted, when known.
    pub entity: Option<String>,
    /// Offending field, when one is involved.
    pub field: Option<String>,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity: None,
            field: None,
            message: message.into(),
        }
    }

    /// Whether the client can fix the request by changing its input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self.kind, ErrorKind::Mapping)
    }
}

impl From<ConvertError> for Error {
    fn from(err: ConvertError) -> Self {
        Self {
            kind: err.class().into(),
            entity: err.kind().map(|kind| kind.to_string()),
            field: err.field().map(str::to_string),
            message: err.to_string(),
        }
    }
}

///
/// ErrorKind
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Required field missing or blank, invalid custom property, or a
    /// non-editable field sent under the reject policy.
    Validation,

    /// Enumerated field carried a token outside its enumeration.
    Enum,

    /// Payload does not fit the schema. The caller cannot remediate this.
    Mapping,
}

impl From<ErrorClass> for ErrorKind {
    fn from(class: ErrorClass) -> Self {
        match class {
            ErrorClass::Validation => Self::Validation,
            ErrorClass::Enum => Self::Enum,
            ErrorClass::Mapping => Self::Mapping,
        }
    }
}

///
/// TESTS
///
