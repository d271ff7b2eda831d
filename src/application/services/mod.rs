//! Business logic services for the application layer.

pub mod analytics_service;
pub mod expiry_reaper;
pub mod link_service;
pub mod redirect_service;

pub use analytics_service::{AnalyticsService, LinkAnalytics};
pub use expiry_reaper::ExpiryReaper;
pub use link_service::{LinkService, ShortenOutcome, ShortenStatus};
pub use redirect_service::RedirectService;
