use contentcraft_client::{
    handle_api_error, ApiClient, ApiError, ClientConfig, ContactSubmission, ContentApi,
    ErrorClass, InquiryAdmin, InquiryStatus, PortfolioType,
};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.base_url()).unwrap()).unwrap()
}

fn portfolio_payload() -> serde_json::Value {
    json!([
        {
            "id": "p-1",
            "title": "Travel Vlog Series Scripts",
            "client": "Wanderlust Adventures",
            "type": "Video Scripts",
            "description": "12-part travel series scripts",
            "results": "2.3M total views, 45% increase in retention",
            "tags": ["Travel", "Storytelling", "Adventure"],
            "is_active": true,
            "created_at": "2024-05-01T10:30:00.123456",
            "updated_at": "2024-05-01T10:30:00.123456"
        }
    ])
}

fn testimonials_payload() -> serde_json::Value {
    json!([
        {
            "id": "t-1",
            "name": "Sarah Chen",
            "channel": "Wanderlust Adventures",
            "subscribers": "250K",
            "testimonial": "The scripts doubled our watch time.",
            "rating": 5,
            "is_active": true
        },
        {
            "id": "t-2",
            "name": "Mike Rodriguez",
            "channel": "Tech Simplified",
            "subscribers": "180K",
            "testimonial": "Fast and on brand.",
            "rating": 4
        }
    ])
}

#[tokio::test]
async fn test_portfolio_defaults_send_active_without_type() {
    let server = MockServer::start();
    let typed_mock = server.mock(|when, then| {
        when.method(GET).path("/api/portfolio").query_param_exists("type");
        then.status(200).json_body(json!([]));
    });
    let portfolio_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/portfolio")
            .query_param("active", "true");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(portfolio_payload());
    });

    let items = client_for(&server)
        .get_portfolio_items(None, Some(true))
        .await
        .unwrap();

    portfolio_mock.assert();
    typed_mock.assert_hits(0);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].portfolio_type(), Some(PortfolioType::VideoScripts));
    assert_eq!(items[0].tags, vec!["Travel", "Storytelling", "Adventure"]);
}

#[tokio::test]
async fn test_portfolio_type_filter_is_sent() {
    let server = MockServer::start();
    let portfolio_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/portfolio")
            .query_param("type", "Video Scripts")
            .query_param("active", "true");
        then.status(200).json_body(portfolio_payload());
    });

    let items = client_for(&server)
        .get_portfolio_items(Some(PortfolioType::VideoScripts.as_str()), Some(true))
        .await
        .unwrap();

    portfolio_mock.assert();
    assert_eq!(items[0].kind, "Video Scripts");
}

#[tokio::test]
async fn test_portfolio_inactive_listing_sends_false() {
    let server = MockServer::start();
    let portfolio_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/portfolio")
            .query_param("active", "false");
        then.status(200).json_body(json!([]));
    });

    let items = client_for(&server)
        .get_portfolio_items(Some(""), Some(false))
        .await
        .unwrap();

    portfolio_mock.assert();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_testimonials_are_stable_across_calls() {
    let server = MockServer::start();
    let testimonials_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/testimonials")
            .query_param("active", "true");
        then.status(200).json_body(testimonials_payload());
    });

    let client = client_for(&server);
    let first = client.get_testimonials(true).await.unwrap();
    let second = client.get_testimonials(true).await.unwrap();

    testimonials_mock.assert_hits(2);
    assert_eq!(first, second);
    assert_eq!(first[0].rating, 5);
    assert_eq!(first[1].subscribers, "180K");
}

#[tokio::test]
async fn test_testimonials_without_active_filter_send_no_query() {
    let server = MockServer::start();
    let filtered_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/testimonials")
            .query_param_exists("active");
        then.status(200).json_body(json!([]));
    });
    let plain_mock = server.mock(|when, then| {
        when.method(GET).path("/api/testimonials");
        then.status(200).json_body(testimonials_payload());
    });

    let testimonials = client_for(&server).get_testimonials(false).await.unwrap();

    filtered_mock.assert_hits(0);
    plain_mock.assert();
    assert_eq!(testimonials.len(), 2);
}

#[tokio::test]
async fn test_stats_and_health() {
    let server = MockServer::start();
    let stats_mock = server.mock(|when, then| {
        when.method(GET).path("/api/stats");
        then.status(200).json_body(json!([
            {"id": "s-1", "number": "150+", "label": "YouTube Channels Helped", "order": 1},
            {"id": "s-2", "number": "2M+", "label": "Words Written", "order": 2}
        ]));
    });
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(200)
            .json_body(json!({"message": "ContentCraft API is running", "status": "healthy"}));
    });

    let client = client_for(&server);
    let stats = client.get_stats().await.unwrap();
    let health = client.check_health().await.unwrap();

    stats_mock.assert();
    health_mock.assert();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[1].order, Some(2));
    assert_eq!(health.message.as_deref(), Some("ContentCraft API is running"));
    assert_eq!(health.extra.get("status"), Some(&json!("healthy")));
}

#[tokio::test]
async fn test_contact_submission_sends_explicit_nulls() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .header("content-type", "application/json")
            .json_body(json!({
                "name": "John Doe",
                "email": "john@example.com",
                "channel": null,
                "subscribers": null,
                "service": "content-multiplier",
                "project": null,
                "budget": null,
                "message": "Hi"
            }));
        then.status(200).json_body(json!({
            "id": "inq-42",
            "name": "John Doe",
            "email": "john@example.com",
            "channel": null,
            "subscribers": null,
            "service": "content-multiplier",
            "project": null,
            "budget": null,
            "message": "Hi",
            "status": "new",
            "created_at": "2024-05-01T10:30:00.123456",
            "updated_at": "2024-05-01T10:30:00.123456"
        }));
    });

    let submission = ContactSubmission {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        channel: None,
        subscribers: None,
        service: "content-multiplier".to_string(),
        project: None,
        budget: None,
        message: "Hi".to_string(),
    };

    let inquiry = client_for(&server)
        .submit_contact_form(&submission)
        .await
        .unwrap();

    contact_mock.assert_hits(1);
    assert_eq!(inquiry.id, "inq-42");
    assert_eq!(inquiry.status, InquiryStatus::New);
    assert_eq!(inquiry.submission, submission);
}

#[tokio::test]
async fn test_failed_submission_is_not_retried() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(500)
            .json_body(json!({"detail": "Error submitting inquiry"}));
    });

    let submission = ContactSubmission {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        channel: Some("Wanderlust".to_string()),
        subscribers: Some("10k-50k".to_string()),
        service: "video-scripts".to_string(),
        project: Some("asap".to_string()),
        budget: Some("5000+".to_string()),
        message: "Need scripts".to_string(),
    };

    let err = client_for(&server)
        .submit_contact_form(&submission)
        .await
        .unwrap_err();

    contact_mock.assert_hits(1);
    assert_eq!(handle_api_error(&err), "Server error occurred.");
}

#[tokio::test]
async fn test_status_codes_map_to_messages() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/portfolio");
        then.status(404).json_body(json!({"detail": "Not Found"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/testimonials");
        then.status(422)
            .json_body(json!({"detail": [{"loc": ["query", "active"], "msg": "bad"}]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/stats");
        then.status(500).body("Internal Server Error");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(503)
            .json_body(json!({"message": "Maintenance in progress"}));
    });

    let client = client_for(&server);

    let not_found = client.get_portfolio_items(None, Some(true)).await.unwrap_err();
    assert_eq!(not_found.class(), ErrorClass::NotFound);
    assert_eq!(handle_api_error(&not_found), "Resource not found.");

    let invalid = client.get_testimonials(true).await.unwrap_err();
    assert_eq!(handle_api_error(&invalid), "Invalid data provided.");

    let server_error = client.get_stats().await.unwrap_err();
    assert!(matches!(
        server_error,
        ApiError::ServerRejected { status: 500, detail: None }
    ));
    assert_eq!(handle_api_error(&server_error), "Server error occurred.");

    let unavailable = client.check_health().await.unwrap_err();
    assert_eq!(handle_api_error(&unavailable), "Maintenance in progress");
}

#[tokio::test]
async fn test_unknown_status_without_detail_uses_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/stats");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let err = client_for(&server).get_stats().await.unwrap_err();
    assert_eq!(handle_api_error(&err), "An error occurred");
}

#[tokio::test]
async fn test_unreachable_backend_reports_connectivity() {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:1").unwrap()).unwrap();

    let err = client.get_stats().await.unwrap_err();

    assert!(err.is_connectivity());
    assert_eq!(
        handle_api_error(&err),
        "Unable to connect to server. Please check your internet connection."
    );
}

#[tokio::test]
async fn test_admin_inquiry_operations() {
    let server = MockServer::start();
    let inquiry = json!({
        "id": "inq-7",
        "name": "Jane",
        "email": "jane@example.com",
        "channel": "Jane Cooks",
        "subscribers": "1k-10k",
        "service": "custom",
        "project": "flexible",
        "budget": "under-500",
        "message": "Recipe scripts",
        "status": "in-progress"
    });
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/contact")
            .query_param("status", "new")
            .query_param("limit", "10");
        then.status(200).json_body(json!([]));
    });
    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/contact/inq-7/status")
            .json_body(json!({"status": "in-progress"}));
        then.status(200).json_body(inquiry);
    });

    let client = client_for(&server);
    let listed = client
        .list_contact_inquiries(Some(InquiryStatus::New), 10)
        .await
        .unwrap();
    let updated = client
        .update_inquiry_status("inq-7", InquiryStatus::InProgress)
        .await
        .unwrap();

    list_mock.assert();
    update_mock.assert();
    assert!(listed.is_empty());
    assert_eq!(updated.status, InquiryStatus::InProgress);
    assert_eq!(updated.submission.budget.as_deref(), Some("under-500"));
}
