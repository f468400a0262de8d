use crate::domain::announcement::entity::{AnnouncementId, AnnouncementRecord};
use crate::domain::content::{ContentPredicate, Ordering};
use crate::domain::errors::DomainResult;
use crate::domain::language::LanguageId;
use async_trait::async_trait;

/// Storage collaborator for announcements. Implementations only translate
/// the predicate and ordering descriptors; validation happens before any
/// of these are called.
#[async_trait]
pub trait AnnouncementReadRepository: Send + Sync {
    /// Rows matching `predicate`, ordered by `ordering`, skipping `offset`
    /// and returning at most `limit` (all remaining rows when `None`).
    async fn find_many(
        &self,
        predicate: &ContentPredicate,
        language: LanguageId,
        ordering: Ordering,
        limit: Option<u32>,
        offset: u64,
    ) -> DomainResult<Vec<AnnouncementRecord>>;

    async fn find_one(
        &self,
        id: AnnouncementId,
        language: LanguageId,
    ) -> DomainResult<Option<AnnouncementRecord>>;

    async fn count(&self, predicate: &ContentPredicate) -> DomainResult<u64>;
}
