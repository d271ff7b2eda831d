//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the expiry scheduler, and the
//! Axum server lifecycle.

use crate::application::services::{AnalyticsService, ExpiryReaper, LinkService, RedirectService};
use crate::config::Config;
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::infrastructure::persistence::{PgLinkRepository, PgVisitRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Embedded migrations
/// - Expired-link sweep schedule
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The cleanup schedule cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let link_repository: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(pool.clone()));
    let visit_repository: Arc<dyn VisitRepository> = Arc::new(PgVisitRepository::new(pool.clone()));

    let reaper = Arc::new(ExpiryReaper::new(link_repository.clone()));
    start_cleanup_scheduler(reaper, &config.cleanup_schedule).await?;

    let state = AppState {
        link_service: Arc::new(LinkService::new(link_repository.clone())),
        redirect_service: Arc::new(RedirectService::new(
            link_repository.clone(),
            visit_repository.clone(),
        )),
        analytics_service: Arc::new(AnalyticsService::new(link_repository, visit_repository)),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Schedules the expired-link sweep on the configured cron cadence (UTC).
///
/// Sweep failures are logged; the next tick retries.
async fn start_cleanup_scheduler(reaper: Arc<ExpiryReaper>, schedule: &str) -> Result<()> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_, _| {
        let reaper = reaper.clone();
        Box::pin(async move {
            if let Err(e) = reaper.sweep().await {
                tracing::error!(error = %e, "Expiry sweep failed");
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(schedule, "Expiry sweep scheduled");

    Ok(())
}
