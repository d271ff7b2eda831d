//! Shared application state.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService, RedirectService};

/// State injected into all handlers.
///
/// Services share repository handles; no handler-visible state is mutable
/// in process memory.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub analytics_service: Arc<AnalyticsService>,
}
