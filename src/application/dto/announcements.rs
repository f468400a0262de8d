use crate::domain::announcement::{Announcement, Attachment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttachmentDto {
    pub path: String,
    pub name: String,
}

impl From<Attachment> for AttachmentDto {
    fn from(attachment: Attachment) -> Self {
        Self {
            path: attachment.text.path,
            name: attachment.text.name,
        }
    }
}

/// Field order is part of the wire contract: identity, invariant
/// attributes, tags, files, then localized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDto {
    pub announcement_id: i64,
    pub author: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = i64)]
    pub publish_time: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = i64)]
    pub update_time: DateTime<Utc>,
    pub views: i64,
    pub is_pinned: bool,
    pub tags: Vec<i64>,
    pub files: Vec<AttachmentDto>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub degraded: bool,
}

impl From<Announcement> for AnnouncementDto {
    fn from(announcement: Announcement) -> Self {
        let Announcement {
            base,
            text,
            tags,
            attachments,
            degraded,
        } = announcement;

        Self {
            announcement_id: base.id.into(),
            author: base.author,
            publish_time: base.published_at,
            update_time: base.updated_at,
            views: base.views,
            is_pinned: base.pinned,
            tags: tags.into_iter().map(i64::from).collect(),
            files: attachments.into_iter().map(Into::into).collect(),
            title: text.title,
            content: text.content,
            degraded,
        }
    }
}
