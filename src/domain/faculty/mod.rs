pub mod entity;
pub mod repository;

pub use entity::{FacultyDetail, FacultySections, ProfileId, ProfileRow};
pub use repository::FacultyReadRepository;
