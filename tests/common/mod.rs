//! Shared test fixtures
//!
//! Provides the test server helper used by the integration suites.

use axum_test::TestServer;
use pollboard::server::init::create_app;

/// Spin up the full application behind an in-process test server.
pub fn create_test_server() -> TestServer {
    TestServer::new(create_app()).expect("failed to start test server")
}
