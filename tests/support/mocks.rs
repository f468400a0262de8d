// tests/support/mocks.rs
use async_trait::async_trait;
use faculty_portal::domain::announcement::{
    AnnouncementBase, AnnouncementId, AnnouncementReadRepository, AnnouncementRecord,
    AnnouncementText, AttachmentBase, AttachmentText,
};
use faculty_portal::domain::content::{ContentPredicate, LocalizedRow, Ordering, TagId};
use faculty_portal::domain::errors::{DomainError, DomainResult};
use faculty_portal::domain::faculty::{
    FacultyReadRepository, FacultySections, ProfileId, ProfileRow,
    entity::{ProfileBase, ProfileText},
};
use faculty_portal::domain::language::LanguageId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::time::Duration;

/// One announcement with every language variant it has.
#[derive(Debug, Clone)]
pub struct StoredAnnouncement {
    pub base: AnnouncementBase,
    pub texts: HashMap<i16, AnnouncementText>,
    pub tags: Vec<TagId>,
    pub files: Vec<(AttachmentBase, HashMap<i16, AttachmentText>)>,
}

impl StoredAnnouncement {
    fn record(&self, language: LanguageId) -> AnnouncementRecord {
        let lang = language.as_i16();
        AnnouncementRecord {
            row: LocalizedRow::new(self.base.clone(), self.texts.get(&lang).cloned()),
            tags: self.tags.clone(),
            attachments: self
                .files
                .iter()
                .map(|(base, texts)| LocalizedRow::new(*base, texts.get(&lang).cloned()))
                .collect(),
        }
    }
}

/// Evaluates predicates in memory and counts every storage call.
#[derive(Debug, Default)]
pub struct InMemoryAnnouncements {
    items: Vec<StoredAnnouncement>,
    calls: AtomicUsize,
}

impl InMemoryAnnouncements {
    pub fn new(items: Vec<StoredAnnouncement>) -> Self {
        Self {
            items,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    fn matching(&self, predicate: &ContentPredicate) -> Vec<&StoredAnnouncement> {
        self.items
            .iter()
            .filter(|item| predicate.matches(&item.tags, item.base.published_at, item.base.pinned))
            .collect()
    }
}

#[async_trait]
impl AnnouncementReadRepository for InMemoryAnnouncements {
    async fn find_many(
        &self,
        predicate: &ContentPredicate,
        language: LanguageId,
        ordering: Ordering,
        limit: Option<u32>,
        offset: u64,
    ) -> DomainResult<Vec<AnnouncementRecord>> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        let mut items = self.matching(predicate);
        items.sort_by(|a, b| {
            let latest = b
                .base
                .published_at
                .cmp(&a.base.published_at)
                .then(b.base.id.cmp(&a.base.id));
            match ordering {
                Ordering::Latest => latest,
                Ordering::MostViewed => b.base.views.cmp(&a.base.views).then(latest),
            }
        });
        let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit)
            .map(|item| item.record(language))
            .collect())
    }

    async fn find_one(
        &self,
        id: AnnouncementId,
        language: LanguageId,
    ) -> DomainResult<Option<AnnouncementRecord>> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self
            .items
            .iter()
            .find(|item| item.base.id == id)
            .map(|item| item.record(language)))
    }

    async fn count(&self, predicate: &ContentPredicate) -> DomainResult<u64> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self.matching(predicate).len() as u64)
    }
}

/// Storage that is always down.
#[derive(Debug, Default)]
pub struct UnavailableAnnouncements;

#[async_trait]
impl AnnouncementReadRepository for UnavailableAnnouncements {
    async fn find_many(
        &self,
        _predicate: &ContentPredicate,
        _language: LanguageId,
        _ordering: Ordering,
        _limit: Option<u32>,
        _offset: u64,
    ) -> DomainResult<Vec<AnnouncementRecord>> {
        Err(DomainError::StorageUnavailable("connection refused".into()))
    }

    async fn find_one(
        &self,
        _id: AnnouncementId,
        _language: LanguageId,
    ) -> DomainResult<Option<AnnouncementRecord>> {
        Err(DomainError::StorageUnavailable("connection refused".into()))
    }

    async fn count(&self, _predicate: &ContentPredicate) -> DomainResult<u64> {
        Err(DomainError::StorageUnavailable("connection refused".into()))
    }
}

/// Storage that answers slower than any sane query timeout.
#[derive(Debug)]
pub struct StalledAnnouncements(pub Duration);

#[async_trait]
impl AnnouncementReadRepository for StalledAnnouncements {
    async fn find_many(
        &self,
        _predicate: &ContentPredicate,
        _language: LanguageId,
        _ordering: Ordering,
        _limit: Option<u32>,
        _offset: u64,
    ) -> DomainResult<Vec<AnnouncementRecord>> {
        tokio::time::sleep(self.0).await;
        Ok(Vec::new())
    }

    async fn find_one(
        &self,
        _id: AnnouncementId,
        _language: LanguageId,
    ) -> DomainResult<Option<AnnouncementRecord>> {
        tokio::time::sleep(self.0).await;
        Ok(None)
    }

    async fn count(&self, _predicate: &ContentPredicate) -> DomainResult<u64> {
        tokio::time::sleep(self.0).await;
        Ok(0)
    }
}

#[derive(Debug, Clone)]
pub struct StoredProfile {
    pub base: ProfileBase,
    pub names: HashMap<i16, ProfileText>,
    /// Section rows per language, already split the way storage returns them.
    pub sections: HashMap<i16, FacultySections>,
}

#[derive(Debug, Default)]
pub struct InMemoryFaculty {
    profiles: HashMap<i64, StoredProfile>,
    calls: AtomicUsize,
}

impl InMemoryFaculty {
    pub fn new(profiles: Vec<StoredProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|p| (p.base.profile_id, p))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }
}

#[async_trait]
impl FacultyReadRepository for InMemoryFaculty {
    async fn find_profile(
        &self,
        id: ProfileId,
        language: LanguageId,
    ) -> DomainResult<Option<ProfileRow>> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self.profiles.get(&i64::from(id)).map(|p| {
            LocalizedRow::new(p.base.clone(), p.names.get(&language.as_i16()).cloned())
        }))
    }

    async fn find_sections(
        &self,
        id: ProfileId,
        language: LanguageId,
    ) -> DomainResult<FacultySections> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self
            .profiles
            .get(&i64::from(id))
            .and_then(|p| p.sections.get(&language.as_i16()).cloned())
            .unwrap_or_default())
    }
}
