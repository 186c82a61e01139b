use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("malformed record: {field}: {reason}")]
    MalformedRecord { field: &'static str, reason: String },
    #[error("invalid banner '{banner_id}': {reason}")]
    InvalidBanner { banner_id: String, reason: String },
    #[error("invalid player id: {0}")]
    InvalidPlayerId(String),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

impl DomainError {
    pub fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::MalformedRecord {
            field,
            reason: reason.into(),
        }
    }
}
