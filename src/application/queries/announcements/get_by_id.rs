use super::AnnouncementQueryService;
use crate::{
    application::{
        dto::AnnouncementDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::announcement::AnnouncementId,
};

#[derive(Debug, Clone)]
pub struct GetAnnouncementQuery {
    pub id: i64,
    pub language_id: Option<i64>,
}

impl AnnouncementQueryService {
    pub async fn get_announcement(
        &self,
        query: GetAnnouncementQuery,
    ) -> ApplicationResult<AnnouncementDto> {
        let language = self.settings.policy.language(query.language_id)?;
        let id = AnnouncementId::new(query.id)?;

        let record = self
            .settings
            .storage(
                "announcements.find_one",
                self.read_repo.find_one(id, language),
            )
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("announcement {id} not found")))?;

        Ok(record.assemble(language)?.into())
    }
}
