use super::{AnnouncementQueryService, ListAnnouncementsQuery};
use crate::{
    application::{dto::AnnouncementDto, error::ApplicationResult},
    domain::content::Ordering,
};

pub type ListHotAnnouncementsQuery = ListAnnouncementsQuery;

impl AnnouncementQueryService {
    /// One page of matching announcements, most viewed first.
    pub async fn list_hot_announcements(
        &self,
        query: ListHotAnnouncementsQuery,
    ) -> ApplicationResult<Vec<AnnouncementDto>> {
        let filter = query.into_filter(self, Ordering::MostViewed)?;
        self.fetch_page(filter).await
    }
}
