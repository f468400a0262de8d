use super::FacultyQueryService;
use crate::{
    application::{
        dto::FacultyDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::faculty::{FacultyDetail, ProfileId},
};

#[derive(Debug, Clone)]
pub struct GetFacultyDetailQuery {
    pub profile_id: i64,
    pub language_id: Option<i64>,
}

impl FacultyQueryService {
    /// The profile and every sub-record section for one language.
    pub async fn get_faculty_detail(
        &self,
        query: GetFacultyDetailQuery,
    ) -> ApplicationResult<FacultyDetailDto> {
        let language = self.settings.policy.language(query.language_id)?;
        let id = ProfileId::new(query.profile_id)?;

        tracing::debug!(profile_id = %id, language = %language, "querying faculty detail");

        let profile = self
            .settings
            .storage("faculty.find_profile", self.read_repo.find_profile(id, language))
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("profile {id} not found")))?;

        let sections = self
            .settings
            .storage("faculty.find_sections", self.read_repo.find_sections(id, language))
            .await?;

        let detail = FacultyDetail::assemble(profile, sections, language)?;
        Ok(detail.into())
    }
}
