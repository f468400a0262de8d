use super::AnnouncementQueryService;
use crate::{
    application::{dto::PageCountDto, error::ApplicationResult},
    domain::content::{TagMode, page_count},
};

#[derive(Debug, Clone, Default)]
pub struct CountPagesQuery {
    pub tags: Vec<i64>,
    pub mode: TagMode,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub amount: Option<i64>,
}

impl AnnouncementQueryService {
    /// `ceil(matching / amount)` for the same predicate a listing would use.
    /// Counting is language independent.
    pub async fn count_pages(&self, query: CountPagesQuery) -> ApplicationResult<PageCountDto> {
        let policy = &self.settings.policy;
        let predicate = policy.predicate(query.mode, &query.tags, query.from, query.to)?;
        let amount = policy.page_size(query.amount)?;

        let total = self
            .settings
            .storage("announcements.count", self.read_repo.count(&predicate))
            .await?;

        tracing::debug!(total, amount, "counted announcements");

        Ok(PageCountDto {
            page_number: page_count(total, amount),
        })
    }
}
