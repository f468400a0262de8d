// src/presentation/http/controllers/mod.rs
pub mod announcements;
pub mod faculty;
