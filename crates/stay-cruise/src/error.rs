use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CruiseError {
    /// A record failed validation. `index` is 1-based within an import batch.
    Invalid { index: Option<usize>, reason: String },
    /// No sailing with this id.
    NotFound(String),
    /// Payload could not be decoded into cruise records.
    Decode(String),
}

impl fmt::Display for CruiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CruiseError::Invalid {
                index: Some(i),
                reason,
            } => write!(f, "cruise {i}: {reason}"),
            CruiseError::Invalid {
                index: None,
                reason,
            } => write!(f, "invalid cruise: {reason}"),
            CruiseError::NotFound(id) => write!(f, "no sailing with id={id}"),
            CruiseError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for CruiseError {}

impl From<serde_json::Error> for CruiseError {
    fn from(e: serde_json::Error) -> Self {
        CruiseError::Decode(e.to_string())
    }
}
