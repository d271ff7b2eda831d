//! Handler for link metadata lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::info::LinkInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata for a short link.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// # Errors
///
/// Returns 404 Not Found when the code is unknown.
pub async fn info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.analytics_service.get_info(&code).await?;

    Ok(Json(LinkInfoResponse {
        original_url: link.original_url,
        created_at: link.created_at,
        click_count: link.click_count,
    }))
}
