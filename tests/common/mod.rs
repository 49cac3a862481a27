//! Shared fixtures: a mock API server and canned entity payloads.
#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

use parascope::domain::ApiToken;
use parascope::infrastructure::di::ServiceContainer;
use parascope::infrastructure::ClientConfig;
use parascope::util::testing;

pub const TOKEN: &str = "psc_test_3f9a";
pub const PREFIX: &str = "/api/v1";
pub const TS: &str = "2024-05-01T12:00:00Z";

pub fn base_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), PREFIX)
}

pub fn api_path(path: &str) -> String {
    format!("{PREFIX}{path}")
}

pub fn services(server: &MockServer) -> ServiceContainer {
    testing::init_test_setup();
    let token = ApiToken::new(TOKEN).unwrap();
    ServiceContainer::new(ClientConfig::new(token).with_base_url(base_url(server))).unwrap()
}

pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

pub fn not_found() -> Value {
    json!({ "error": "Not found", "code": 404 })
}

pub fn workspace_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "is_default": false,
        "sharing_type": "private",
        "owner_id": "u1",
        "scopes_count": 2,
        "cards_count": 5,
        "created_at": TS,
        "updated_at": TS
    })
}

pub fn scope_json(id: &str, workspace_id: &str, name: &str, position: i64) -> Value {
    json!({
        "id": id,
        "workspace_id": workspace_id,
        "name": name,
        "description": null,
        "is_default": false,
        "position": position,
        "cards_count": 0,
        "created_at": TS,
        "updated_at": TS
    })
}

pub fn card_json(id: &str, name: &str, content: &str) -> Value {
    json!({
        "id": id,
        "workspace_id": "w1",
        "scope_id": "s1",
        "github_repo_id": null,
        "name": name,
        "content": content,
        "position": 0,
        "created_at": TS,
        "updated_at": TS
    })
}
