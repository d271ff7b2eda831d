//! Handler for link usage statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and recent visitor addresses for a short link.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// # Errors
///
/// Returns 404 Not Found when the code is unknown.
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.get_analytics(&code).await?;

    Ok(Json(AnalyticsResponse {
        click_count: analytics.click_count,
        ip_addresses: analytics.source_addresses,
    }))
}
