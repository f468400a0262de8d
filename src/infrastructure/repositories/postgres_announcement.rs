// src/infrastructure/repositories/postgres_announcement.rs
use super::map_sqlx;
use crate::domain::announcement::{
    AnnouncementBase, AnnouncementId, AnnouncementReadRepository, AnnouncementRecord,
    AnnouncementText, AttachmentBase, AttachmentRow, AttachmentText,
};
use crate::domain::content::{ContentPredicate, LocalizedRow, Ordering, TagId, TagMode};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::language::LanguageId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const SELECT_ANNOUNCEMENTS: &str = "SELECT a.id, a.author, a.publish_time, a.update_time, \
     a.views, a.is_pinned, i.title, i.content \
     FROM announcements a \
     LEFT JOIN announcement_i18n i ON i.announcement_id = a.id AND i.language_id = ";

#[derive(Clone)]
pub struct PostgresAnnouncementReadRepository {
    pool: PgPool,
}

impl PostgresAnnouncementReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AnnouncementRow {
    id: i64,
    author: String,
    publish_time: DateTime<Utc>,
    update_time: DateTime<Utc>,
    views: i64,
    is_pinned: bool,
    title: Option<String>,
    content: Option<String>,
}

impl TryFrom<AnnouncementRow> for LocalizedRow<AnnouncementBase, AnnouncementText> {
    type Error = DomainError;

    fn try_from(row: AnnouncementRow) -> Result<Self, Self::Error> {
        let base = AnnouncementBase {
            id: AnnouncementId::new(row.id)?,
            author: row.author,
            published_at: row.publish_time,
            updated_at: row.update_time,
            views: row.views,
            pinned: row.is_pinned,
        };
        let text = row
            .title
            .zip(row.content)
            .map(|(title, content)| AnnouncementText { title, content });
        Ok(LocalizedRow::new(base, text))
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    announcement_id: i64,
    tag_id: i64,
}

#[derive(Debug, FromRow)]
struct FileRow {
    id: i64,
    announcement_id: i64,
    filepath: Option<String>,
    name: Option<String>,
}

fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

impl PostgresAnnouncementReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, predicate: &ContentPredicate) {
        let mut has_where = false;

        if predicate.pinned_only() {
            push_clause(builder, &mut has_where);
            builder.push("a.is_pinned = TRUE");
        }

        let window = predicate.window();
        if let Some(from) = window.lower() {
            push_clause(builder, &mut has_where);
            builder.push("a.publish_time >= ");
            builder.push_bind(from);
        }
        if let Some(to) = window.upper() {
            push_clause(builder, &mut has_where);
            builder.push("a.publish_time < ");
            builder.push_bind(to);
        }

        let tags = predicate.tags();
        if !tags.is_unrestricted() {
            let ids: Vec<i64> = tags.ids().iter().copied().map(i64::from).collect();
            let wanted = ids.len() as i64;
            push_clause(builder, &mut has_where);
            match tags.mode() {
                TagMode::And => {
                    builder.push(
                        "(SELECT COUNT(DISTINCT t.tag_id) FROM announcement_tags t \
                         WHERE t.announcement_id = a.id AND t.tag_id = ANY(",
                    );
                    builder.push_bind(ids);
                    builder.push(")) = ");
                    builder.push_bind(wanted);
                }
                TagMode::Or => {
                    builder.push(
                        "EXISTS (SELECT 1 FROM announcement_tags t \
                         WHERE t.announcement_id = a.id AND t.tag_id = ANY(",
                    );
                    builder.push_bind(ids);
                    builder.push("))");
                }
            }
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, ordering: Ordering) {
        match ordering {
            Ordering::Latest => {
                builder.push(" ORDER BY a.publish_time DESC, a.id DESC");
            }
            Ordering::MostViewed => {
                builder.push(" ORDER BY a.views DESC, a.publish_time DESC, a.id DESC");
            }
        }
    }

    /// Full listing query. Without a `limit` every match is returned.
    fn select_page(
        predicate: &ContentPredicate,
        language: LanguageId,
        ordering: Ordering,
        limit: Option<u32>,
        offset: u64,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(SELECT_ANNOUNCEMENTS);
        builder.push_bind(language.as_i16());
        Self::apply_conditions(&mut builder, predicate);
        Self::apply_ordering(&mut builder, ordering);
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        if offset > 0 {
            builder.push(" OFFSET ");
            builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));
        }
        builder
    }

    /// Loads tags and language-specific attachments for a batch of
    /// announcements and stitches them onto the rows, keeping storage order.
    async fn load_nested(
        &self,
        rows: Vec<LocalizedRow<AnnouncementBase, AnnouncementText>>,
        language: LanguageId,
    ) -> DomainResult<Vec<AnnouncementRecord>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = rows.iter().map(|row| i64::from(row.base.id)).collect();

        let tag_rows = sqlx::query_as::<_, TagRow>(
            "SELECT announcement_id, tag_id FROM announcement_tags
             WHERE announcement_id = ANY($1) ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let file_rows = sqlx::query_as::<_, FileRow>(
            "SELECT f.id, f.announcement_id, fi.filepath, fi.name
             FROM files f
             LEFT JOIN file_i18n fi ON fi.file_id = f.id AND fi.language_id = $2
             WHERE f.announcement_id = ANY($1) ORDER BY f.id",
        )
        .bind(&ids)
        .bind(language.as_i16())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut tags: HashMap<i64, Vec<TagId>> = HashMap::new();
        for row in tag_rows {
            tags.entry(row.announcement_id)
                .or_default()
                .push(TagId::new(row.tag_id)?);
        }

        let mut files: HashMap<i64, Vec<AttachmentRow>> = HashMap::new();
        for row in file_rows {
            let text = row
                .filepath
                .zip(row.name)
                .map(|(path, name)| AttachmentText { path, name });
            files
                .entry(row.announcement_id)
                .or_default()
                .push(LocalizedRow::new(AttachmentBase { id: row.id }, text));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let id = i64::from(row.base.id);
                AnnouncementRecord {
                    tags: tags.remove(&id).unwrap_or_default(),
                    attachments: files.remove(&id).unwrap_or_default(),
                    row,
                }
            })
            .collect())
    }
}

#[async_trait]
impl AnnouncementReadRepository for PostgresAnnouncementReadRepository {
    async fn find_many(
        &self,
        predicate: &ContentPredicate,
        language: LanguageId,
        ordering: Ordering,
        limit: Option<u32>,
        offset: u64,
    ) -> DomainResult<Vec<AnnouncementRecord>> {
        let mut builder = Self::select_page(predicate, language, ordering, limit, offset);
        let rows = builder
            .build_query_as::<AnnouncementRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(LocalizedRow::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        self.load_nested(rows, language).await
    }

    async fn find_one(
        &self,
        id: AnnouncementId,
        language: LanguageId,
    ) -> DomainResult<Option<AnnouncementRecord>> {
        let sql = format!("{SELECT_ANNOUNCEMENTS}$1 WHERE a.id = $2");
        let row = sqlx::query_as::<_, AnnouncementRow>(&sql)
            .bind(language.as_i16())
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let row = LocalizedRow::try_from(row)?;
        Ok(self.load_nested(vec![row], language).await?.pop())
    }

    async fn count(&self, predicate: &ContentPredicate) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM announcements a");
        Self::apply_conditions(&mut builder, predicate);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
