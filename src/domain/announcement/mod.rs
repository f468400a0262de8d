pub mod entity;
pub mod repository;

pub use entity::{
    Announcement, AnnouncementBase, AnnouncementId, AnnouncementRecord, AnnouncementText,
    Attachment, AttachmentBase, AttachmentRow, AttachmentText,
};
pub use repository::AnnouncementReadRepository;
