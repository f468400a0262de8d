mod get_by_id;
mod hot;
mod list;
mod pages;
mod pinned;
mod service;
mod tv;

pub use get_by_id::GetAnnouncementQuery;
pub use hot::ListHotAnnouncementsQuery;
pub use list::ListAnnouncementsQuery;
pub use pages::CountPagesQuery;
pub use pinned::ListPinnedAnnouncementsQuery;
pub use service::AnnouncementQueryService;
pub use tv::ListTvAnnouncementsQuery;
