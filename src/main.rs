use anyhow::{Context, Result};
use faculty_portal::application::services::ApplicationServices;
use faculty_portal::config::AppConfig;
use faculty_portal::domain::{
    announcement::AnnouncementReadRepository, faculty::FacultyReadRepository,
};
use faculty_portal::infrastructure::{
    database,
    repositories::{PostgresAnnouncementReadRepository, PostgresFacultyReadRepository},
};
use faculty_portal::presentation::http::{
    middleware::rate_limit::RateLimitSettings,
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.query_timeout())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let announcement_repo: Arc<dyn AnnouncementReadRepository> =
        Arc::new(PostgresAnnouncementReadRepository::new(pool.clone()));
    let faculty_repo: Arc<dyn FacultyReadRepository> =
        Arc::new(PostgresFacultyReadRepository::new(pool));

    let services = Arc::new(ApplicationServices::new(
        announcement_repo,
        faculty_repo,
        config.query_settings(),
    ));

    let state = HttpState { services };
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: Some(RateLimitSettings {
            requests_per_second: config.rate_limit_per_second(),
            burst: config.rate_limit_burst(),
        }),
    };

    let app = build_router_with_options(state, options);
    // The rate limiter keys on the peer address when no proxy headers are set.
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        languages = ?config.supported_languages().ids(),
        "listening on {address}"
    );

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
