// src/presentation/http/controllers/faculty.rs
use crate::application::{dto::FacultyDetailDto, queries::faculty::GetFacultyDetailQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::params::{QueryParams, path_id};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, RawQuery},
};

#[utoipa::path(
    get,
    path = "/api/v1/faculty/{profile_id}",
    params(
        ("profile_id" = i64, Path, description = "Faculty profile id."),
        ("languageId" = i64, Query, description = "Language id.")
    ),
    responses(
        (status = 200, description = "Profile and every section for the language.", body = FacultyDetailDto),
        (status = 400, description = "Invalid id or language.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown profile or no variant for the language.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Faculty"
)]
pub async fn get_faculty_detail(
    Extension(state): Extension<HttpState>,
    Path(profile_id): Path<String>,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<FacultyDetailDto>> {
    let params = QueryParams::parse(query.as_deref()).into_http()?;
    let query = GetFacultyDetailQuery {
        language_id: params.language_id().into_http()?,
        profile_id: path_id(&profile_id, "profile").into_http()?,
    };
    state
        .services
        .faculty_queries
        .get_faculty_detail(query)
        .await
        .into_http()
        .map(Json)
}
