use crate::domain::errors::{DomainError, DomainResult};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id < 0 {
            Err(DomainError::InvalidTag(format!(
                "tag id must be non-negative, got {id}"
            )))
        } else {
            Ok(Self(id))
        }
    }

    /// Parses a tag id as it arrives in a query string.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        let id = raw.parse::<i64>().map_err(|_| {
            DomainError::InvalidTag(format!("tag id must be an integer, got {raw:?}"))
        })?;
        Self::new(id)
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMode {
    /// Item must carry every requested tag.
    And,
    /// Item must carry at least one requested tag.
    #[default]
    Or,
}

impl FromStr for TagMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(DomainError::InvalidTag(format!(
                "tag mode must be `and` or `or`, got {other:?}"
            ))),
        }
    }
}

/// Tag restriction of a predicate. An empty id list is unrestricted in both
/// modes: vacuously so for `And`, by definition for `Or`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    mode: TagMode,
    ids: Vec<TagId>,
}

impl TagFilter {
    pub fn new(mode: TagMode, ids: impl IntoIterator<Item = TagId>) -> Self {
        let mut unique: Vec<TagId> = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { mode, ids: unique }
    }

    pub fn mode(&self) -> TagMode {
        self.mode
    }

    pub fn ids(&self) -> &[TagId] {
        &self.ids
    }

    pub fn is_unrestricted(&self) -> bool {
        self.ids.is_empty()
    }

    /// Evaluates the filter against an item's tag set. Storage backends
    /// express the same rule in their own query language.
    pub fn matches(&self, item_tags: &[TagId]) -> bool {
        if self.ids.is_empty() {
            return true;
        }
        match self.mode {
            TagMode::And => self.ids.iter().all(|id| item_tags.contains(id)),
            TagMode::Or => self.ids.iter().any(|id| item_tags.contains(id)),
        }
    }
}
