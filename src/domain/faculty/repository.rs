use crate::domain::errors::DomainResult;
use crate::domain::faculty::entity::{FacultySections, ProfileId, ProfileRow};
use crate::domain::language::LanguageId;
use async_trait::async_trait;

#[async_trait]
pub trait FacultyReadRepository: Send + Sync {
    async fn find_profile(
        &self,
        id: ProfileId,
        language: LanguageId,
    ) -> DomainResult<Option<ProfileRow>>;

    /// Every sub-record section of the profile, each row carrying the
    /// variant for `language` when one exists.
    async fn find_sections(
        &self,
        id: ProfileId,
        language: LanguageId,
    ) -> DomainResult<FacultySections>;
}
