use crate::domain::{
    errors::{DomainError, DomainResult},
    language::LanguageId,
};

/// A storage row: the language-invariant part plus the variant for the
/// requested language, when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedRow<B, T> {
    pub base: B,
    pub text: Option<T>,
}

impl<B, T> LocalizedRow<B, T> {
    pub fn new(base: B, text: Option<T>) -> Self {
        Self { base, text }
    }

    pub fn localized(base: B, text: T) -> Self {
        Self::new(base, Some(text))
    }

    pub fn missing(base: B) -> Self {
        Self::new(base, None)
    }
}

/// An item merged with its requested-language variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized<B, T> {
    pub base: B,
    pub text: T,
}

impl<B, T> LocalizedRow<B, T> {
    /// Merges a primary item with its variant. A missing variant fails the
    /// request with `MissingLocalization`.
    pub fn require(
        self,
        language: LanguageId,
        describe: impl FnOnce(&B) -> String,
    ) -> DomainResult<Localized<B, T>> {
        match self.text {
            Some(text) => Ok(Localized {
                base: self.base,
                text,
            }),
            None => Err(DomainError::MissingLocalization(format!(
                "{} has no variant for language {language}",
                describe(&self.base)
            ))),
        }
    }
}

/// Nested rows after dropping those without a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retained<B, T> {
    pub items: Vec<Localized<B, T>>,
    pub dropped: usize,
}

impl<B, T> Retained<B, T> {
    pub fn is_degraded(&self) -> bool {
        self.dropped > 0
    }
}

/// Keeps rows that carry a variant, in storage order.
pub fn retain_localized<B, T>(rows: Vec<LocalizedRow<B, T>>) -> Retained<B, T> {
    let total = rows.len();
    let items: Vec<_> = rows
        .into_iter()
        .filter_map(|row| row.text.map(|text| Localized { base: row.base, text }))
        .collect();
    let dropped = total - items.len();
    Retained { items, dropped }
}
