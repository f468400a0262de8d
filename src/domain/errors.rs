// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid language: {0}")]
    InvalidLanguage(String),
    #[error("invalid tag: {0}")]
    InvalidTag(String),
    #[error("invalid time range: {0}")]
    InvalidRange(String),
    #[error("invalid page size: {0}")]
    InvalidPageSize(String),
    #[error("invalid page: {0}")]
    InvalidPage(String),
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("invalid ordering: {0}")]
    InvalidOrdering(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("missing localization: {0}")]
    MissingLocalization(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl DomainError {
    /// Validation failures are detected before storage is touched and are
    /// fixed by the caller supplying different input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidLanguage(_)
                | Self::InvalidTag(_)
                | Self::InvalidRange(_)
                | Self::InvalidPageSize(_)
                | Self::InvalidPage(_)
                | Self::InvalidId(_)
                | Self::InvalidOrdering(_)
        )
    }
}
