#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use snaplink::application::services::{
    AnalyticsService, ExpiryReaper, LinkService, RedirectService,
};
use snaplink::domain::entities::{Link, NewLink, NewVisit, Visit};
use snaplink::domain::repositories::{LinkRepository, VisitRepository};
use snaplink::error::AppError;
use snaplink::state::AppState;

/// Both tables behind one lock so create/delete stay atomic across them,
/// mirroring the transactional guarantees of the PostgreSQL repository.
#[derive(Default)]
struct LinkTables {
    links: HashMap<String, Link>,
    /// digest -> code
    content_index: HashMap<String, String>,
}

#[derive(Default)]
pub struct InMemoryLinkRepository {
    tables: Mutex<LinkTables>,
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut tables = self.tables.lock().unwrap();

        if tables.links.contains_key(&new_link.code) {
            return Err(AppError::alias_taken(
                "Short code already in use",
                json!({ "code": new_link.code }),
            ));
        }
        if let Some(digest) = &new_link.digest {
            if tables.content_index.contains_key(digest) {
                return Err(AppError::alias_taken(
                    "Short code already in use",
                    json!({ "digest": digest }),
                ));
            }
        }

        let link = Link {
            code: new_link.code.clone(),
            original_url: new_link.original_url,
            click_count: 0,
            created_at: Utc::now(),
            expires_at: new_link.expires_at,
        };

        if let Some(digest) = new_link.digest {
            tables.content_index.insert(digest, new_link.code.clone());
        }
        tables.links.insert(new_link.code, link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.links.get(code).cloned())
    }

    async fn find_by_digest(&self, digest: &str) -> Result<Option<Link>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .content_index
            .get(digest)
            .and_then(|code| tables.links.get(code))
            .cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        match tables.links.get_mut(code) {
            Some(link) => {
                link.click_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        tables.content_index.retain(|_, c| c != code);
        Ok(tables.links.remove(code).is_some())
    }

    async fn find_expired_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<Link>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .links
            .values()
            .filter(|link| link.expires_at.is_some_and(|e| e < cutoff))
            .cloned()
            .collect())
    }

    async fn delete_many(&self, codes: &[String]) -> Result<u64, AppError> {
        let mut tables = self.tables.lock().unwrap();
        tables.content_index.retain(|_, c| !codes.contains(c));

        let mut removed = 0;
        for code in codes {
            if tables.links.remove(code).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[derive(Default)]
pub struct InMemoryVisitRepository {
    visits: Mutex<Vec<Visit>>,
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let mut visits = self.visits.lock().unwrap();

        let visit = Visit {
            id: visits.len() as i64 + 1,
            code: new_visit.code,
            source_address: new_visit.source_address,
            occurred_at: Utc::now(),
        };
        visits.push(visit.clone());

        Ok(visit)
    }

    async fn list_recent(&self, code: &str, limit: i64) -> Result<Vec<Visit>, AppError> {
        let visits = self.visits.lock().unwrap();
        Ok(visits
            .iter()
            .rev()
            .filter(|v| v.code == code)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

pub struct TestContext {
    pub state: AppState,
    pub links: Arc<InMemoryLinkRepository>,
    pub visits: Arc<InMemoryVisitRepository>,
}

/// Builds application state over fresh in-memory repositories.
pub fn create_test_state() -> TestContext {
    let links = Arc::new(InMemoryLinkRepository::default());
    let visits = Arc::new(InMemoryVisitRepository::default());

    let link_repo: Arc<dyn LinkRepository> = links.clone();
    let visit_repo: Arc<dyn VisitRepository> = visits.clone();

    let state = AppState {
        link_service: Arc::new(LinkService::new(link_repo.clone())),
        redirect_service: Arc::new(RedirectService::new(link_repo.clone(), visit_repo.clone())),
        analytics_service: Arc::new(AnalyticsService::new(link_repo, visit_repo)),
    };

    TestContext {
        state,
        links,
        visits,
    }
}

/// Builds a reaper over the context's link store.
pub fn create_reaper(ctx: &TestContext) -> ExpiryReaper {
    let link_repo: Arc<dyn LinkRepository> = ctx.links.clone();
    ExpiryReaper::new(link_repo)
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// the mock transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
