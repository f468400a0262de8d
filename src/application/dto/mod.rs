pub mod announcements;
pub mod faculty;
pub mod pagination;
pub mod serde_time;

pub use announcements::{AnnouncementDto, AttachmentDto};
pub use faculty::{EntryDto, FacultyDetailDto};
pub use pagination::PageCountDto;
