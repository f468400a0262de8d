use crate::domain::{
    content::{Localized, LocalizedRow, TagId, retain_localized},
    errors::{DomainError, DomainResult},
    language::LanguageId,
};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnouncementId(i64);

impl AnnouncementId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::InvalidId(format!(
                "announcement id must be positive, got {id}"
            )))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AnnouncementId> for i64 {
    fn from(value: AnnouncementId) -> Self {
        value.0
    }
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language-invariant announcement columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementBase {
    pub id: AnnouncementId,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: i64,
    pub pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementText {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentBase {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentText {
    pub path: String,
    pub name: String,
}

pub type AttachmentRow = LocalizedRow<AttachmentBase, AttachmentText>;
pub type Attachment = Localized<AttachmentBase, AttachmentText>;

/// Everything storage returns for one announcement in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementRecord {
    pub row: LocalizedRow<AnnouncementBase, AnnouncementText>,
    pub tags: Vec<TagId>,
    pub attachments: Vec<AttachmentRow>,
}

/// An announcement merged with its requested-language text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub base: AnnouncementBase,
    pub text: AnnouncementText,
    pub tags: Vec<TagId>,
    pub attachments: Vec<Attachment>,
    /// Set when attachments without a variant for the language were left out.
    pub degraded: bool,
}

impl AnnouncementRecord {
    pub fn assemble(self, language: LanguageId) -> DomainResult<Announcement> {
        let Localized { base, text } = self
            .row
            .require(language, |base| format!("announcement {}", base.id))?;

        let attachments = retain_localized(self.attachments);
        if attachments.is_degraded() {
            tracing::warn!(
                announcement_id = %base.id,
                language = %language,
                dropped = attachments.dropped,
                "dropping attachments without a localized variant"
            );
        }

        Ok(Announcement {
            degraded: attachments.is_degraded(),
            base,
            text,
            tags: self.tags,
            attachments: attachments.items,
        })
    }
}
