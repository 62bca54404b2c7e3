//! Tests for the HTTP record source.
//!
//! These tests use mock servers to verify source behavior without
//! requiring a running dashboard.

use lendboard_client::{HttpRecordSource, SourceConfig, SourceError};
use lendboard_core::{DashboardError, LoadState, RecordSource, UserListLoader, UserStatus};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users_body() -> serde_json::Value {
    json!([
        {
            "organization": "Lendsqr",
            "username": "Chioma Nwosu",
            "email": "chiomanwosu218@gmail.com",
            "phone": "07031234567",
            "date_joined": "January 09, 2021, 02:14 PM",
            "status": "active"
        },
        {
            "organization": "Lendsqr",
            "username": "Ibrahim Musa",
            "email": "ibrahimmusa904@yahoo.com",
            "phone": "09087654321",
            "date_joined": "October 30, 2024, 08:02 AM",
            "status": "pending"
        }
    ])
}

// =============================================================================
// Source Creation Tests
// =============================================================================

mod source_creation {
    use super::*;

    #[test]
    fn test_users_url_is_resolved() {
        let source = HttpRecordSource::new(SourceConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(source.users_url(), "http://localhost:3000/api/users");
    }

    #[test]
    fn test_base_path_is_kept() {
        let source =
            HttpRecordSource::new(SourceConfig::new("https://example.com/admin")).unwrap();
        assert_eq!(source.users_url(), "https://example.com/admin/api/users");
    }

    #[test]
    fn test_empty_url_rejected() {
        match HttpRecordSource::new(SourceConfig::new("  ")) {
            Err(SourceError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match HttpRecordSource::new(SourceConfig::new("example.com")) {
            Err(SourceError::InvalidUrl(msg)) => assert!(msg.contains("http://")),
            _ => panic!("Expected InvalidUrl error"),
        }
    }
}

// =============================================================================
// Fetch Tests
// =============================================================================

mod fetch {
    use super::*;

    #[tokio::test]
    async fn test_lists_users() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpRecordSource::new(SourceConfig::new(server.uri())).unwrap();
        let users = source.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "Ibrahim Musa");
        assert_eq!(users[1].status, UserStatus::Pending);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let source = HttpRecordSource::new(SourceConfig::new(server.uri())).unwrap();
        let err = source.list_users().await.unwrap_err();

        match err {
            DashboardError::Fetch(msg) => assert_eq!(msg, "Failed to fetch users (HTTP 500)"),
            other => panic!("Expected Fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_array_body_is_invalid_input() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": []})))
            .mount(&server)
            .await;

        let source = HttpRecordSource::new(SourceConfig::new(server.uri())).unwrap();
        let err = source.list_users().await.unwrap_err();

        assert!(matches!(err, DashboardError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let source = HttpRecordSource::new(SourceConfig::new(server.uri())).unwrap();
        let err = source.list_users().await.unwrap_err();

        assert!(matches!(err, DashboardError::Fetch(ref msg) if msg.contains("parse")));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(users_body())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = SourceConfig::new(server.uri()).with_timeout(Duration::from_millis(200));
        let source = HttpRecordSource::new(config).unwrap();
        let err = source.list_users().await.unwrap_err();

        assert!(matches!(err, DashboardError::Fetch(ref msg) if msg.contains("unreachable")));
    }
}

// =============================================================================
// Loader Integration Tests
// =============================================================================

mod loader {
    use super::*;

    #[tokio::test]
    async fn test_loader_reaches_ready_with_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpRecordSource::new(SourceConfig::new(server.uri())).unwrap();
        let mut loader = UserListLoader::mount(Arc::new(source));

        match loader.wait().await {
            LoadState::Ready(records) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[0].id, 1);
                assert_eq!(records[1].id, 2);
            }
            other => panic!("Expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_loader_reports_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpRecordSource::new(SourceConfig::new(server.uri())).unwrap();
        let mut loader = UserListLoader::mount(Arc::new(source));

        assert_eq!(
            loader.wait().await,
            LoadState::Error("Failed to fetch users (HTTP 503)".to_string())
        );
    }
}
