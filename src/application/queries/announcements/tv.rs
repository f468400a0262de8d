use super::AnnouncementQueryService;
use crate::{
    application::{dto::AnnouncementDto, error::ApplicationResult},
    domain::content::{ContentPredicate, Filter, Ordering, PageRequest, TagMode, TimeRange},
};

#[derive(Debug, Clone, Default)]
pub struct ListTvAnnouncementsQuery {
    pub language_id: Option<i64>,
    pub tags: Vec<i64>,
    pub mode: TagMode,
    pub amount: Option<i64>,
}

impl AnnouncementQueryService {
    /// The latest `amount` matches regardless of publish date, for the
    /// hallway display feed.
    pub async fn list_tv_announcements(
        &self,
        query: ListTvAnnouncementsQuery,
    ) -> ApplicationResult<Vec<AnnouncementDto>> {
        let policy = &self.settings.policy;
        let language = policy.language(query.language_id)?;
        let tags = policy.tag_filter(query.mode, &query.tags)?;
        let amount = policy.page_size(query.amount)?;

        let filter = Filter {
            language,
            predicate: ContentPredicate::new(tags, TimeRange::unbounded()),
            ordering: Ordering::Latest,
            page: PageRequest::first(amount),
        };
        self.fetch_page(filter).await
    }
}
