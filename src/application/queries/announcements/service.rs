use std::sync::Arc;

use crate::{
    application::{dto::AnnouncementDto, error::ApplicationResult, queries::QuerySettings},
    domain::{announcement::AnnouncementReadRepository, content::Filter},
};

pub struct AnnouncementQueryService {
    pub(super) read_repo: Arc<dyn AnnouncementReadRepository>,
    pub(super) settings: QuerySettings,
}

impl AnnouncementQueryService {
    pub fn new(read_repo: Arc<dyn AnnouncementReadRepository>, settings: QuerySettings) -> Self {
        Self {
            read_repo,
            settings,
        }
    }

    /// Fetches one page for an already validated filter and assembles each
    /// row for the filter's language.
    pub(super) async fn fetch_page(
        &self,
        filter: Filter,
    ) -> ApplicationResult<Vec<AnnouncementDto>> {
        let Filter {
            language,
            predicate,
            ordering,
            page,
        } = filter;

        tracing::debug!(
            language = %language,
            tags = ?predicate.tags().ids(),
            mode = ?predicate.tags().mode(),
            page = page.page(),
            amount = page.size(),
            ?ordering,
            "querying announcements"
        );

        let records = self
            .settings
            .storage(
                "announcements.find_many",
                self.read_repo.find_many(
                    &predicate,
                    language,
                    ordering,
                    Some(page.size()),
                    page.offset(),
                ),
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
