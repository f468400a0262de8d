use super::AnnouncementQueryService;
use crate::{
    application::{dto::AnnouncementDto, error::ApplicationResult},
    domain::content::{Ordering, TagMode},
};

#[derive(Debug, Clone, Default)]
pub struct ListPinnedAnnouncementsQuery {
    pub language_id: Option<i64>,
    pub tags: Vec<i64>,
    pub mode: TagMode,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub ordering: Ordering,
}

impl AnnouncementQueryService {
    /// Every pinned match. Pinned sets are small, so this never paginates.
    pub async fn list_pinned_announcements(
        &self,
        query: ListPinnedAnnouncementsQuery,
    ) -> ApplicationResult<Vec<AnnouncementDto>> {
        let policy = &self.settings.policy;
        let language = policy.language(query.language_id)?;
        let predicate = policy
            .predicate(query.mode, &query.tags, query.from, query.to)?
            .pinned();

        tracing::debug!(
            language = %language,
            tags = ?predicate.tags().ids(),
            mode = ?predicate.tags().mode(),
            "querying pinned announcements"
        );

        let records = self
            .settings
            .storage(
                "announcements.find_many",
                self.read_repo
                    .find_many(&predicate, language, query.ordering, None, 0),
            )
            .await?;

        records
            .into_iter()
            .map(|record| {
                record
                    .assemble(language)
                    .map(AnnouncementDto::from)
                    .map_err(Into::into)
            })
            .collect()
    }
}
