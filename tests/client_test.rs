//! Transport behavior against a mock server: auth headers, envelope
//! unwrapping, error translation.

mod common;

use std::net::TcpListener;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use parascope::application::ApplicationError;
use parascope::domain::{ApiToken, ListParams};
use parascope::infrastructure::di::ServiceContainer;
use parascope::infrastructure::ClientConfig;

use common::*;

#[tokio::test]
async fn given_token_when_request_sent_then_bearer_and_json_headers_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/workspaces/w1")))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(workspace_json("w1", "Acme"))))
        .expect(1)
        .mount(&server)
        .await;

    let workspace = services(&server).workspaces.get("w1").await.unwrap();

    assert_eq!(workspace.id, "w1");
    assert_eq!(workspace.name, "Acme");
}

#[tokio::test]
async fn given_base_url_with_trailing_slash_when_request_sent_then_single_slash_join() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/tokens")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(ApiToken::new(TOKEN).unwrap())
        .with_base_url(format!("{}/", base_url(&server)));
    let services = ServiceContainer::new(config).unwrap();

    assert_eq!(services.api.base_url(), base_url(&server));
    assert!(services.tokens.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_structured_404_when_get_then_api_error_names_code_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/workspaces/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found()))
        .mount(&server)
        .await;

    let err = services(&server).workspaces.get("missing").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("Not found"), "{message}");
    assert!(err.is_not_found());
    assert_eq!(err.api_code(), Some(404));
}

#[tokio::test]
async fn given_error_with_details_when_displayed_then_details_follow_on_new_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/workspaces")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": "Validation failed",
            "code": 422,
            "details": {"name": ["can't be blank"]}
        })))
        .mount(&server)
        .await;

    let request = parascope::domain::CreateWorkspaceRequest::new("");
    let err = services(&server).workspaces.create(&request).await.unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("API Error (422): Validation failed\n"), "{message}");
    assert!(message.contains("can't be blank"), "{message}");
}

#[tokio::test]
async fn given_non_json_error_body_when_get_then_unexpected_status_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/cards/c1")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = services(&server).cards.get("c1").await.unwrap_err();

    match err {
        ApplicationError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 502);
            assert!(body.contains("Bad Gateway"));
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn given_malformed_success_body_when_get_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/scopes/s1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 7}})))
        .mount(&server)
        .await;

    let err = services(&server).scopes.get("s1").await.unwrap_err();

    assert!(matches!(err, ApplicationError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn given_closed_port_when_request_sent_then_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::new(ApiToken::new(TOKEN).unwrap())
        .with_base_url(format!("http://127.0.0.1:{port}/api/v1"));
    let services = ServiceContainer::new(config).unwrap();

    let err = services.workspaces.get("w1").await.unwrap_err();

    assert!(matches!(err, ApplicationError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn given_last_page_when_listed_then_meta_has_no_next_offset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/workspaces")))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "2"))
        .and(query_param("q", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [workspace_json("w3", "Acme 3")],
            "meta": {"limit": 2, "offset": 2, "has_more": false, "next_offset": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListParams {
        q: Some("acme".into()),
        limit: Some(2),
        offset: Some(2),
    };
    let page = services(&server).workspaces.list(&params).await.unwrap();

    assert_eq!(page.data.len(), 1);
    let meta = page.meta.unwrap();
    assert!(!meta.has_more);
    assert_eq!(meta.next_offset, None);
    assert_eq!(meta.next_page(), None);
}

#[tokio::test]
async fn given_more_pages_when_listed_then_next_page_points_forward() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/workspaces")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [workspace_json("w1", "A"), workspace_json("w2", "B")],
            "meta": {"limit": 2, "offset": 0, "has_more": true, "next_offset": 2}
        })))
        .mount(&server)
        .await;

    let page = services(&server)
        .workspaces
        .list(&ListParams::default())
        .await
        .unwrap();

    assert_eq!(page.meta.unwrap().next_page(), Some(2));
}
