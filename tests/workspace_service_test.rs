mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use parascope::cli::output;
use parascope::domain::{
    CardPosition, CreateScopeRequest, CreateWorkspaceRequest, OrganizeWorkspaceRequest,
    ScopeChanges, ScopePosition, SharingType, UpdateScopeRequest, UpdateWorkspaceRequest,
    WorkspaceChanges,
};

use common::*;

// ============================================================
// Workspaces
// ============================================================

#[tokio::test]
async fn given_new_workspace_when_created_then_body_nested_under_workspace_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/workspaces")))
        .and(body_json(json!({
            "workspace": {"name": "Acme", "description": "docs", "sharing_type": "internal"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(workspace_json("w9", "Acme"))))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateWorkspaceRequest::new("Acme")
        .description("docs")
        .sharing_type(SharingType::Internal);
    let workspace = services(&server).workspaces.create(&request).await.unwrap();

    assert_eq!(workspace.id, "w9");
}

#[tokio::test]
async fn given_server_fields_when_workspace_rendered_then_all_fields_kept() {
    let server = MockServer::start().await;
    let mut body = workspace_json("w1", "Acme");
    body["description"] = json!("infra notes");
    body["archived_at"] = json!(null);
    body["settings"] = json!({"theme": "dark"});
    Mock::given(method("GET"))
        .and(path(api_path("/workspaces/w1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(body.clone())))
        .expect(1)
        .mount(&server)
        .await;

    let workspace = services(&server).workspaces.get("w1").await.unwrap();
    let rendered = output::to_json(&workspace).unwrap();

    assert_eq!(workspace.description.as_deref(), Some("infra notes"));
    assert!(rendered.contains("infra notes"), "{rendered}");
    assert_eq!(serde_json::from_str::<serde_json::Value>(&rendered).unwrap(), body);
}

#[tokio::test]
async fn given_partial_changes_when_updated_then_only_given_fields_sent() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(api_path("/workspaces/w1")))
        .and(body_json(json!({"workspace": {"name": "Renamed"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(workspace_json("w1", "Renamed"))))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateWorkspaceRequest {
        workspace: WorkspaceChanges {
            name: Some("Renamed".into()),
            ..Default::default()
        },
    };
    let workspace = services(&server).workspaces.update("w1", &request).await.unwrap();

    assert_eq!(workspace.name, "Renamed");
}

#[tokio::test]
async fn given_existing_workspace_when_deleted_then_ok() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/workspaces/w1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    services(&server).workspaces.delete("w1").await.unwrap();
}

#[tokio::test]
async fn given_same_plan_when_organized_twice_then_same_result() {
    let server = MockServer::start().await;
    let plan_json = json!({
        "scopes": [{"id": "s2", "position": 0}, {"id": "s1", "position": 1}],
        "cards": [{"id": "c1", "scope_id": "s2", "position": 0}]
    });
    Mock::given(method("PATCH"))
        .and(path(api_path("/workspaces/w1/organize")))
        .and(body_json(plan_json))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "message": "Workspace organized",
            "scopes_updated": 2,
            "cards_updated": 1
        }))))
        .expect(2)
        .mount(&server)
        .await;

    let plan = OrganizeWorkspaceRequest {
        scopes: Some(vec![
            ScopePosition { id: "s2".into(), position: 0 },
            ScopePosition { id: "s1".into(), position: 1 },
        ]),
        cards: Some(vec![CardPosition {
            id: "c1".into(),
            scope_id: Some("s2".into()),
            position: 0,
        }]),
    };
    let services = services(&server);

    let first = services.workspaces.organize("w1", &plan).await.unwrap();
    let second = services.workspaces.organize("w1", &plan).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.scopes_updated, 2);
    assert_eq!(first.cards_updated, 1);
}

// ============================================================
// Scopes
// ============================================================

#[tokio::test]
async fn given_workspace_when_scopes_listed_then_nested_path_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/workspaces/w1/scopes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            scope_json("s1", "w1", "Backlog", 0),
            scope_json("s2", "w1", "Done", 1)
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let scopes = services(&server).scopes.list("w1").await.unwrap();

    let names: Vec<_> = scopes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Backlog", "Done"]);
}

#[tokio::test]
async fn given_new_scope_when_created_then_nested_body_and_workspace_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/scopes")))
        .and(wiremock::matchers::query_param("workspace_id", "w1"))
        .and(body_json(json!({"scope": {"name": "Backlog"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(scope_json("s1", "w1", "Backlog", 0))))
        .expect(1)
        .mount(&server)
        .await;

    let scope = services(&server)
        .scopes
        .create("w1", &CreateScopeRequest::new("Backlog"))
        .await
        .unwrap();

    assert_eq!(scope.workspace_id, "w1");
    assert_eq!(scope.description, None);
}

#[tokio::test]
async fn given_scope_changes_when_updated_then_nested_under_scope_key() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(api_path("/scopes/s1")))
        .and(body_json(json!({"scope": {"position": 3}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(scope_json("s1", "w1", "Backlog", 3))))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateScopeRequest {
        scope: ScopeChanges {
            position: Some(3),
            ..Default::default()
        },
    };
    let scope = services(&server).scopes.update("s1", &request).await.unwrap();

    assert_eq!(scope.position, 3);
}
