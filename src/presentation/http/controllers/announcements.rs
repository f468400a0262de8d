// src/presentation/http/controllers/announcements.rs
use crate::application::{
    dto::{AnnouncementDto, PageCountDto},
    queries::announcements::GetAnnouncementQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::params::{QueryParams, path_id};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, RawQuery},
};

#[utoipa::path(
    get,
    path = "/api/v1/announcements",
    params(
        ("languageId" = i64, Query, description = "Language id, one of the supported languages."),
        ("tags" = Option<Vec<i64>>, Query, description = "Tag ids; repeat the key or separate with commas."),
        ("mode" = Option<String>, Query, description = "`and` or `or` (default)."),
        ("from" = Option<i64>, Query, description = "Inclusive lower publish bound, epoch milliseconds."),
        ("to" = Option<i64>, Query, description = "Exclusive upper publish bound, epoch milliseconds."),
        ("page" = Option<i64>, Query, description = "1-based page number."),
        ("amount" = Option<i64>, Query, description = "Page size, clamped to the configured maximum.")
    ),
    responses(
        (status = 200, description = "One page of announcements, latest first.", body = [AnnouncementDto]),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "An announcement lacks the requested language.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Announcements"
)]
pub async fn list_announcements(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<Vec<AnnouncementDto>>> {
    let params = QueryParams::parse(query.as_deref()).into_http()?;
    state
        .services
        .announcement_queries
        .list_announcements(params.list_query().into_http()?)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/announcements/pinned",
    params(
        ("languageId" = i64, Query, description = "Language id."),
        ("tags" = Option<Vec<i64>>, Query, description = "Tag ids."),
        ("mode" = Option<String>, Query, description = "`and` or `or` (default)."),
        ("from" = Option<i64>, Query, description = "Inclusive lower publish bound, epoch milliseconds."),
        ("to" = Option<i64>, Query, description = "Exclusive upper publish bound, epoch milliseconds."),
        ("order" = Option<String>, Query, description = "`latest` (default) or `views`.")
    ),
    responses(
        (status = 200, description = "Every pinned match, latest first unless ordered by views.", body = [AnnouncementDto]),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Announcements"
)]
pub async fn list_pinned_announcements(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<Vec<AnnouncementDto>>> {
    let params = QueryParams::parse(query.as_deref()).into_http()?;
    state
        .services
        .announcement_queries
        .list_pinned_announcements(params.pinned_query().into_http()?)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/announcements/pages",
    params(
        ("tags" = Option<Vec<i64>>, Query, description = "Tag ids."),
        ("mode" = Option<String>, Query, description = "`and` or `or` (default)."),
        ("from" = Option<i64>, Query, description = "Inclusive lower publish bound, epoch milliseconds."),
        ("to" = Option<i64>, Query, description = "Exclusive upper publish bound, epoch milliseconds."),
        ("amount" = Option<i64>, Query, description = "Page size the count is computed for.")
    ),
    responses(
        (status = 200, description = "Number of pages the filter spans.", body = PageCountDto),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Announcements"
)]
pub async fn count_pages(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<PageCountDto>> {
    let params = QueryParams::parse(query.as_deref()).into_http()?;
    state
        .services
        .announcement_queries
        .count_pages(params.count_query().into_http()?)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/announcements/hot",
    params(
        ("languageId" = i64, Query, description = "Language id."),
        ("tags" = Option<Vec<i64>>, Query, description = "Tag ids."),
        ("mode" = Option<String>, Query, description = "`and` or `or` (default)."),
        ("from" = Option<i64>, Query, description = "Inclusive lower publish bound, epoch milliseconds."),
        ("to" = Option<i64>, Query, description = "Exclusive upper publish bound, epoch milliseconds."),
        ("page" = Option<i64>, Query, description = "1-based page number."),
        ("amount" = Option<i64>, Query, description = "Page size.")
    ),
    responses(
        (status = 200, description = "One page of announcements, most viewed first.", body = [AnnouncementDto]),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Announcements"
)]
pub async fn list_hot_announcements(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<Vec<AnnouncementDto>>> {
    let params = QueryParams::parse(query.as_deref()).into_http()?;
    state
        .services
        .announcement_queries
        .list_hot_announcements(params.list_query().into_http()?)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/announcements/tv",
    params(
        ("languageId" = i64, Query, description = "Language id."),
        ("tags" = Option<Vec<i64>>, Query, description = "Tag ids."),
        ("mode" = Option<String>, Query, description = "`and` or `or` (default)."),
        ("amount" = Option<i64>, Query, description = "How many announcements to show.")
    ),
    responses(
        (status = 200, description = "Latest matches for the display feed.", body = [AnnouncementDto]),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Announcements"
)]
pub async fn list_tv_announcements(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<Vec<AnnouncementDto>>> {
    let params = QueryParams::parse(query.as_deref()).into_http()?;
    state
        .services
        .announcement_queries
        .list_tv_announcements(params.tv_query().into_http()?)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/announcements/{id}",
    params(
        ("id" = i64, Path, description = "Announcement id."),
        ("languageId" = i64, Query, description = "Language id.")
    ),
    responses(
        (status = 200, description = "The announcement in the requested language.", body = AnnouncementDto),
        (status = 400, description = "Invalid id or language.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown id or no variant for the language.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Announcements"
)]
pub async fn get_announcement(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<AnnouncementDto>> {
    let params = QueryParams::parse(query.as_deref()).into_http()?;
    let query = GetAnnouncementQuery {
        language_id: params.language_id().into_http()?,
        id: path_id(&id, "announcement").into_http()?,
    };
    state
        .services
        .announcement_queries
        .get_announcement(query)
        .await
        .into_http()
        .map(Json)
}
