use super::{
    page::{PageLimits, PageRequest},
    tag::{TagFilter, TagId, TagMode},
    time_range::TimeRange,
};
use crate::domain::{
    errors::{DomainError, DomainResult},
    language::{LanguageId, SupportedLanguages},
};
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// Storage-agnostic description of which items qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPredicate {
    tags: TagFilter,
    window: TimeRange,
    pinned_only: bool,
}

impl ContentPredicate {
    pub fn new(tags: TagFilter, window: TimeRange) -> Self {
        Self {
            tags,
            window,
            pinned_only: false,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pinned_only = true;
        self
    }

    pub fn tags(&self) -> &TagFilter {
        &self.tags
    }

    pub fn window(&self) -> &TimeRange {
        &self.window
    }

    pub fn pinned_only(&self) -> bool {
        self.pinned_only
    }

    /// Reference evaluation of the predicate over an item's invariant fields.
    pub fn matches(&self, tags: &[TagId], published_at: DateTime<Utc>, pinned: bool) -> bool {
        (!self.pinned_only || pinned)
            && self.window.contains(published_at)
            && self.tags.matches(tags)
    }
}

/// Result ordering. Every variant ends in `id DESC` so pages are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordering {
    /// publish time desc, id desc
    #[default]
    Latest,
    /// views desc, publish time desc, id desc
    MostViewed,
}

impl FromStr for Ordering {
    type Err = DomainError;

    /// `latest` or `views`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "views" => Ok(Self::MostViewed),
            other => Err(DomainError::InvalidOrdering(format!(
                "order must be `latest` or `views`, got {other:?}"
            ))),
        }
    }
}

/// A validated paginated query over one content kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub language: LanguageId,
    pub predicate: ContentPredicate,
    pub ordering: Ordering,
    pub page: PageRequest,
}

/// Validates raw request values into filter parts. Everything here runs
/// before storage is touched.
#[derive(Debug, Clone, Default)]
pub struct FilterPolicy {
    languages: SupportedLanguages,
    limits: PageLimits,
}

impl FilterPolicy {
    pub fn new(languages: SupportedLanguages, limits: PageLimits) -> Self {
        Self { languages, limits }
    }

    pub fn limits(&self) -> &PageLimits {
        &self.limits
    }

    pub fn language(&self, raw: Option<i64>) -> DomainResult<LanguageId> {
        let raw = raw.ok_or_else(|| DomainError::InvalidLanguage("languageId is required".into()))?;
        self.languages.resolve(raw)
    }

    pub fn tag_filter(&self, mode: TagMode, tags: &[i64]) -> DomainResult<TagFilter> {
        let ids = tags
            .iter()
            .map(|id| TagId::new(*id))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(TagFilter::new(mode, ids))
    }

    pub fn predicate(
        &self,
        mode: TagMode,
        tags: &[i64],
        from: Option<i64>,
        to: Option<i64>,
    ) -> DomainResult<ContentPredicate> {
        let tags = self.tag_filter(mode, tags)?;
        let window = TimeRange::from_millis(from, to)?;
        Ok(ContentPredicate::new(tags, window))
    }

    pub fn page(&self, page: Option<i64>, amount: Option<i64>) -> DomainResult<PageRequest> {
        PageRequest::new(page, amount, &self.limits)
    }

    pub fn page_size(&self, amount: Option<i64>) -> DomainResult<u32> {
        self.limits.size(amount)
    }
}
