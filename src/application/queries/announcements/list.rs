use super::AnnouncementQueryService;
use crate::{
    application::{dto::AnnouncementDto, error::ApplicationResult},
    domain::content::{Filter, Ordering, TagMode},
};

#[derive(Debug, Clone, Default)]
pub struct ListAnnouncementsQuery {
    pub language_id: Option<i64>,
    pub tags: Vec<i64>,
    pub mode: TagMode,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub page: Option<i64>,
    pub amount: Option<i64>,
}

impl ListAnnouncementsQuery {
    /// Validates every field in request order: language, tags, range, page.
    pub(super) fn into_filter(
        self,
        service: &AnnouncementQueryService,
        ordering: Ordering,
    ) -> ApplicationResult<Filter> {
        let policy = &service.settings.policy;
        let language = policy.language(self.language_id)?;
        let predicate = policy.predicate(self.mode, &self.tags, self.from, self.to)?;
        let page = policy.page(self.page, self.amount)?;
        Ok(Filter {
            language,
            predicate,
            ordering,
            page,
        })
    }
}

impl AnnouncementQueryService {
    /// One page of matching announcements, latest first.
    pub async fn list_announcements(
        &self,
        query: ListAnnouncementsQuery,
    ) -> ApplicationResult<Vec<AnnouncementDto>> {
        let filter = query.into_filter(self, Ordering::Latest)?;
        self.fetch_page(filter).await
    }
}
