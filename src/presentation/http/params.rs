// src/presentation/http/params.rs
//! Query-string parsing for the content endpoints.
//!
//! `tags` may repeat (`tags=1&tags=2`), be comma separated (`tags=1,2`), or
//! both. For every other key the last non-empty value wins. Fields are
//! converted in a fixed order (language, tags, mode, range, order, page,
//! amount) so the first reported error does not depend on parameter order.

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    queries::announcements::{
        CountPagesQuery, ListAnnouncementsQuery, ListPinnedAnnouncementsQuery,
        ListTvAnnouncementsQuery,
    },
};
use crate::domain::{
    content::{Ordering, TagId, TagMode},
    errors::{DomainError, DomainResult},
};

#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

fn number(
    key: &str,
    raw: Option<&str>,
    invalid: fn(String) -> DomainError,
) -> DomainResult<Option<i64>> {
    raw.map(|value| {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(format!("{key} must be an integer, got {value:?}")))
    })
    .transpose()
}

impl QueryParams {
    pub fn parse(raw: Option<&str>) -> ApplicationResult<Self> {
        let pairs = match raw {
            Some(query) if !query.is_empty() => serde_urlencoded::from_str(query)
                .map_err(|err| ApplicationError::validation(format!("malformed query: {err}")))?,
            _ => Vec::new(),
        };
        Ok(Self { pairs })
    }

    fn last(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, v)| k == key && !v.trim().is_empty())
            .map(|(_, v)| v.as_str())
    }

    pub fn language_id(&self) -> DomainResult<Option<i64>> {
        number("languageId", self.last("languageId"), DomainError::InvalidLanguage)
    }

    pub fn tags(&self) -> DomainResult<Vec<i64>> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == "tags" || k == "tags[]")
            .flat_map(|(_, v)| v.split(','))
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| TagId::parse(segment).map(i64::from))
            .collect()
    }

    pub fn mode(&self) -> DomainResult<TagMode> {
        self.last("mode")
            .map(str::parse::<TagMode>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn range(&self) -> DomainResult<(Option<i64>, Option<i64>)> {
        let from = number("from", self.last("from"), DomainError::InvalidRange)?;
        let to = number("to", self.last("to"), DomainError::InvalidRange)?;
        Ok((from, to))
    }

    pub fn ordering(&self) -> DomainResult<Ordering> {
        self.last("order")
            .map(str::parse::<Ordering>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn page(&self) -> DomainResult<Option<i64>> {
        number("page", self.last("page"), DomainError::InvalidPage)
    }

    pub fn amount(&self) -> DomainResult<Option<i64>> {
        number("amount", self.last("amount"), DomainError::InvalidPageSize)
    }

    pub fn list_query(&self) -> DomainResult<ListAnnouncementsQuery> {
        let language_id = self.language_id()?;
        let tags = self.tags()?;
        let mode = self.mode()?;
        let (from, to) = self.range()?;
        Ok(ListAnnouncementsQuery {
            language_id,
            tags,
            mode,
            from,
            to,
            page: self.page()?,
            amount: self.amount()?,
        })
    }

    pub fn pinned_query(&self) -> DomainResult<ListPinnedAnnouncementsQuery> {
        let language_id = self.language_id()?;
        let tags = self.tags()?;
        let mode = self.mode()?;
        let (from, to) = self.range()?;
        Ok(ListPinnedAnnouncementsQuery {
            language_id,
            tags,
            mode,
            from,
            to,
            ordering: self.ordering()?,
        })
    }

    pub fn count_query(&self) -> DomainResult<CountPagesQuery> {
        let tags = self.tags()?;
        let mode = self.mode()?;
        let (from, to) = self.range()?;
        Ok(CountPagesQuery {
            tags,
            mode,
            from,
            to,
            amount: self.amount()?,
        })
    }

    pub fn tv_query(&self) -> DomainResult<ListTvAnnouncementsQuery> {
        Ok(ListTvAnnouncementsQuery {
            language_id: self.language_id()?,
            tags: self.tags()?,
            mode: self.mode()?,
            amount: self.amount()?,
        })
    }
}

/// Parses a numeric path segment; non-numeric ids are a validation error
/// rather than a routing miss.
pub fn path_id(raw: &str, what: &str) -> DomainResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        DomainError::InvalidId(format!("{what} id must be an integer, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: &str) -> QueryParams {
        QueryParams::parse(Some(raw)).unwrap()
    }

    #[test]
    fn tags_accept_repeats_and_commas() {
        let p = params("tags=1&tags=2,3&tags[]=4&tags=");
        assert_eq!(p.tags().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn missing_query_is_empty() {
        let p = QueryParams::parse(None).unwrap();
        assert_eq!(p.language_id().unwrap(), None);
        assert!(p.tags().unwrap().is_empty());
        assert_eq!(p.mode().unwrap(), TagMode::Or);
        assert_eq!(p.ordering().unwrap(), Ordering::Latest);
    }

    #[test]
    fn last_non_empty_value_wins() {
        let p = params("languageId=0&languageId=1&languageId=");
        assert_eq!(p.language_id().unwrap(), Some(1));
    }

    #[test]
    fn each_field_reports_its_own_error_kind() {
        assert!(matches!(
            params("languageId=en").language_id(),
            Err(DomainError::InvalidLanguage(_))
        ));
        assert!(matches!(params("tags=a").tags(), Err(DomainError::InvalidTag(_))));
        assert!(matches!(params("mode=xor").mode(), Err(DomainError::InvalidTag(_))));
        assert!(matches!(
            params("from=soon").range(),
            Err(DomainError::InvalidRange(_))
        ));
        assert!(matches!(
            params("order=oldest").ordering(),
            Err(DomainError::InvalidOrdering(_))
        ));
        assert!(matches!(params("page=one").page(), Err(DomainError::InvalidPage(_))));
        assert!(matches!(
            params("amount=lots").amount(),
            Err(DomainError::InvalidPageSize(_))
        ));
    }

    #[test]
    fn language_is_checked_before_tags() {
        let err = params("tags=x&languageId=zz").list_query().unwrap_err();
        assert!(matches!(err, DomainError::InvalidLanguage(_)));
    }

    #[test]
    fn list_query_carries_every_field() {
        let q = params("languageId=1&tags=5&mode=AND&from=10&to=20&page=2&amount=3")
            .list_query()
            .unwrap();
        assert_eq!(q.language_id, Some(1));
        assert_eq!(q.tags, vec![5]);
        assert_eq!(q.mode, TagMode::And);
        assert_eq!((q.from, q.to), (Some(10), Some(20)));
        assert_eq!((q.page, q.amount), (Some(2), Some(3)));
    }

    #[test]
    fn pinned_query_reads_the_ranking_key() {
        let q = params("languageId=0&order=views").pinned_query().unwrap();
        assert_eq!(q.ordering, Ordering::MostViewed);

        let q = params("languageId=0").pinned_query().unwrap();
        assert_eq!(q.ordering, Ordering::Latest);
    }

    #[test]
    fn path_ids_must_be_numeric() {
        assert_eq!(path_id("42", "announcement").unwrap(), 42);
        assert!(matches!(
            path_id("abc", "announcement"),
            Err(DomainError::InvalidId(_))
        ));
    }
}
