pub mod announcement;
pub mod content;
pub mod errors;
pub mod faculty;
pub mod language;
