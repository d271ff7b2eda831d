//! Handler for link deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes a short link and its content index entry.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// Responds 200 OK with an empty body. Visit records for the code are kept.
///
/// # Errors
///
/// Returns 404 Not Found when the code is unknown.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&code).await?;

    Ok(StatusCode::OK)
}
