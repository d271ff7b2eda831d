mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use snaplink::api::handlers::{info_handler, redirect_handler, shorten_handler};

use common::MockConnectInfoLayer;

fn redirect_app() -> TestServer {
    let ctx = common::create_test_state();
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info/{code}", get(info_handler))
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(ctx.state);

    TestServer::new(app).unwrap()
}

async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": url }))
        .await;
    assert_eq!(response.status_code(), 201);
    response.text()
}

#[tokio::test]
async fn test_redirect_success() {
    let server = redirect_app();
    let code = shorten(&server, "https://example.com/target").await;

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(response.header("cache-control"), "no-store");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = redirect_app();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_increments_click_count() {
    let server = redirect_app();
    let code = shorten(&server, "http://x.com").await;

    server.get(&format!("/{code}")).await;
    server.get(&format!("/{code}")).await;

    let info = server.get(&format!("/info/{code}")).await;
    let body = info.json::<serde_json::Value>();
    assert_eq!(body["clickCount"], 2);
}

#[tokio::test]
async fn test_concurrent_redirects_lose_no_clicks() {
    let server = redirect_app();
    let code = shorten(&server, "http://x.com").await;
    let path = format!("/{code}");

    let (r1, r2, r3, r4, r5) = tokio::join!(
        async { server.get(&path).await },
        async { server.get(&path).await },
        async { server.get(&path).await },
        async { server.get(&path).await },
        async { server.get(&path).await },
    );

    for response in [r1, r2, r3, r4, r5] {
        assert_eq!(response.status_code(), 308);
    }

    let info = server.get(&format!("/info/{code}")).await;
    let body = info.json::<serde_json::Value>();
    assert_eq!(body["clickCount"], 5);
}
