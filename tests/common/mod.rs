#![allow(dead_code)]

use axum_test::TestServer;
use redirector::application::services::Redirector;
use redirector::infrastructure::memory::MemoryUrlStore;
use redirector::routes::app_router;
use redirector::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub const HOST: &str = "sho.rt";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(Redirector::new(MemoryUrlStore::new())), false)
}

pub fn create_test_state_with_limit(index_limit: i64) -> AppState {
    AppState::new(
        Arc::new(Redirector::with_index_limit(
            MemoryUrlStore::new(),
            index_limit,
        )),
        false,
    )
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Submits `url` and returns the short URL from the response body.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/")
        .add_header("Host", HOST)
        .json(&json!({ "url": url }))
        .await;

    response.assert_status_ok();
    response.text()
}
