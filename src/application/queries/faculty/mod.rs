mod detail;
mod service;

pub use detail::GetFacultyDetailQuery;
pub use service::FacultyQueryService;
