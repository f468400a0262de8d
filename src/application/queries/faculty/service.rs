use std::sync::Arc;

use crate::{application::queries::QuerySettings, domain::faculty::FacultyReadRepository};

pub struct FacultyQueryService {
    pub(super) read_repo: Arc<dyn FacultyReadRepository>,
    pub(super) settings: QuerySettings,
}

impl FacultyQueryService {
    pub fn new(read_repo: Arc<dyn FacultyReadRepository>, settings: QuerySettings) -> Self {
        Self {
            read_repo,
            settings,
        }
    }
}
