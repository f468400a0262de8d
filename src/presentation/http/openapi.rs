// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::announcements::list_announcements,
        crate::presentation::http::controllers::announcements::list_pinned_announcements,
        crate::presentation::http::controllers::announcements::count_pages,
        crate::presentation::http::controllers::announcements::list_hot_announcements,
        crate::presentation::http::controllers::announcements::list_tv_announcements,
        crate::presentation::http::controllers::announcements::get_announcement,
        crate::presentation::http::controllers::faculty::get_faculty_detail,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::AnnouncementDto,
            crate::application::dto::AttachmentDto,
            crate::application::dto::PageCountDto,
            crate::application::dto::FacultyDetailDto
        )
    ),
    tags(
        (name = "Announcements", description = "Tag-filtered announcement listings"),
        (name = "Faculty", description = "Faculty profile pages"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Faculty Portal API",
        description = "Multilingual read API for announcements and faculty profiles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at
/// `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
