#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum_test::TestServer;
use hello_gateway::application::services::{AuthService, RateLimitService};
use hello_gateway::infrastructure::persistence::InMemoryClientRecordRepository;
use hello_gateway::routes::pipeline_router;
use hello_gateway::state::AppState;

pub const TEST_API_KEY: &str = "secret123";

pub const TEST_COOLDOWN: Duration = Duration::from_secs(5);

pub fn create_test_state() -> AppState {
    create_test_state_with_cooldown(TEST_COOLDOWN)
}

pub fn create_test_state_with_cooldown(cooldown: Duration) -> AppState {
    let records = Arc::new(InMemoryClientRecordRepository::new());

    AppState::new(
        Arc::new(AuthService::new(TEST_API_KEY)),
        Arc::new(RateLimitService::new(records, cooldown)),
    )
}

pub fn create_test_router() -> Router {
    pipeline_router(create_test_state())
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_router()).unwrap()
}
