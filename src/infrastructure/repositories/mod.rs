// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_announcement;
mod postgres_faculty;

pub use error::map_sqlx;
pub use postgres_announcement::PostgresAnnouncementReadRepository;
pub use postgres_faculty::PostgresFacultyReadRepository;
