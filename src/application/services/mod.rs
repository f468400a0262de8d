// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{
        QuerySettings, announcements::AnnouncementQueryService, faculty::FacultyQueryService,
    },
    domain::{announcement::AnnouncementReadRepository, faculty::FacultyReadRepository},
};

pub struct ApplicationServices {
    pub announcement_queries: Arc<AnnouncementQueryService>,
    pub faculty_queries: Arc<FacultyQueryService>,
}

impl ApplicationServices {
    pub fn new(
        announcement_repo: Arc<dyn AnnouncementReadRepository>,
        faculty_repo: Arc<dyn FacultyReadRepository>,
        settings: QuerySettings,
    ) -> Self {
        let announcement_queries = Arc::new(AnnouncementQueryService::new(
            Arc::clone(&announcement_repo),
            settings.clone(),
        ));
        let faculty_queries = Arc::new(FacultyQueryService::new(
            Arc::clone(&faculty_repo),
            settings,
        ));

        Self {
            announcement_queries,
            faculty_queries,
        }
    }
}
