pub mod announcements;
pub mod faculty;
pub mod settings;

pub use settings::QuerySettings;
