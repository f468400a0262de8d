use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageId(i16);

impl LanguageId {
    pub fn as_i16(self) -> i16 {
        self.0
    }
}

impl From<LanguageId> for i16 {
    fn from(value: LanguageId) -> Self {
        value.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of language ids the site publishes content in. A `LanguageId`
/// can only be obtained through [`SupportedLanguages::resolve`], so holding
/// one proves membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguages {
    ids: Vec<i16>,
}

impl SupportedLanguages {
    pub fn new(ids: impl IntoIterator<Item = i16>) -> DomainResult<Self> {
        let mut ids: Vec<i16> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Err(DomainError::InvalidLanguage(
                "at least one supported language is required".into(),
            ));
        }
        if ids.iter().any(|id| *id < 0) {
            return Err(DomainError::InvalidLanguage(
                "language ids must be non-negative".into(),
            ));
        }
        Ok(Self { ids })
    }

    pub fn resolve(&self, raw: i64) -> DomainResult<LanguageId> {
        i16::try_from(raw)
            .ok()
            .filter(|id| self.ids.binary_search(id).is_ok())
            .map(LanguageId)
            .ok_or_else(|| DomainError::InvalidLanguage(format!("unsupported language id {raw}")))
    }

    pub fn ids(&self) -> &[i16] {
        &self.ids
    }
}

impl Default for SupportedLanguages {
    /// zh-TW (0) and en-US (1).
    fn default() -> Self {
        Self { ids: vec![0, 1] }
    }
}
