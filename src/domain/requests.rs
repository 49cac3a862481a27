//! Request bodies and query parameters
//!
//! Body nesting follows the server contract per endpoint: workspace and scope
//! writes wrap their fields in a named key (`{"workspace": {...}}`), card
//! writes are flat. Do not unify these shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, SharingType};

// ============================================================
// Query parameters
// ============================================================

/// Search and paging filters for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Filters for listing cards in a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Filters for listing GitHub repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// `workspace_id` passed as a query parameter on scope/card creation and bulk.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WorkspaceQuery<'a> {
    pub workspace_id: &'a str,
}

// ============================================================
// Sessions and tokens
// ============================================================

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTokenRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

// ============================================================
// Workspaces
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWorkspace {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_type: Option<SharingType>,
}

/// `POST /workspaces` body: `{"workspace": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateWorkspaceRequest {
    pub workspace: NewWorkspace,
}

impl CreateWorkspaceRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            workspace: NewWorkspace {
                name: name.into(),
                description: None,
                sharing_type: None,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.workspace.description = Some(description.into());
        self
    }

    pub fn sharing_type(mut self, sharing_type: SharingType) -> Self {
        self.workspace.sharing_type = Some(sharing_type);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkspaceChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_type: Option<SharingType>,
}

/// `PATCH /workspaces/:id` body: `{"workspace": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWorkspaceRequest {
    pub workspace: WorkspaceChanges,
}

/// New position of a scope within its workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopePosition {
    pub id: String,
    pub position: i64,
}

/// New position of a card, optionally moving it to another scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPosition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<String>,
    pub position: i64,
}

/// Bulk reposition/move plan for `PATCH /workspaces/:id/organize`.
///
/// Submitting the same plan twice yields the same final ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeWorkspaceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<ScopePosition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<CardPosition>>,
}

impl OrganizeWorkspaceRequest {
    /// Parse a plan from JSON text (CLI `--file`).
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let plan: Self = serde_json::from_str(text).map_err(|e| DomainError::InvalidPlan {
            message: format!("organize plan: {e}"),
        })?;
        if plan.scopes.is_none() && plan.cards.is_none() {
            return Err(DomainError::InvalidPlan {
                message: "organize plan needs 'scopes' or 'cards'".into(),
            });
        }
        Ok(plan)
    }
}

// ============================================================
// Scopes
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewScope {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// `POST /scopes` body: `{"scope": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateScopeRequest {
    pub scope: NewScope,
}

impl CreateScopeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scope: NewScope {
                name: name.into(),
                description: None,
                position: None,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScopeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// `PATCH /scopes/:id` body: `{"scope": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateScopeRequest {
    pub scope: ScopeChanges,
}

// ============================================================
// Cards (flat bodies)
// ============================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl CreateCardRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn scope(mut self, scope_id: impl Into<String>) -> Self {
        self.scope_id = Some(scope_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCardRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl UpdateCardRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.content.is_none()
            && self.scope_id.is_none()
            && self.position.is_none()
    }
}

/// One entry of a `POST /cards/bulk` request.
///
/// Wire shapes:
/// - `{"action": "create", "name": ..., "content": ..., ...}`
/// - `{"action": "update", "id": ..., "attributes": {...}}`
/// - `{"action": "delete", "id": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum BulkCardOperation {
    Create(CreateCardRequest),
    Update {
        id: String,
        attributes: UpdateCardRequest,
    },
    Delete {
        id: String,
    },
}

impl BulkCardOperation {
    pub fn action(&self) -> BulkAction {
        match self {
            BulkCardOperation::Create(_) => BulkAction::Create,
            BulkCardOperation::Update { .. } => BulkAction::Update,
            BulkCardOperation::Delete { .. } => BulkAction::Delete,
        }
    }

    /// Parse an operations list from JSON text (CLI `--file`).
    ///
    /// Accepts either a bare array or `{"operations": [...]}`.
    pub fn list_from_json(text: &str) -> Result<Vec<Self>, DomainError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Plan {
            Bare(Vec<BulkCardOperation>),
            Wrapped { operations: Vec<BulkCardOperation> },
        }

        let plan: Plan = serde_json::from_str(text).map_err(|e| DomainError::InvalidPlan {
            message: format!("bulk operations: {e}"),
        })?;
        let operations = match plan {
            Plan::Bare(ops) => ops,
            Plan::Wrapped { operations } => operations,
        };
        if operations.is_empty() {
            return Err(DomainError::InvalidPlan {
                message: "bulk operations list is empty".into(),
            });
        }
        Ok(operations)
    }
}

/// Action tag echoed back in bulk results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Create,
    Update,
    Delete,
}

/// `POST /cards/bulk` body.
#[derive(Serialize)]
pub(crate) struct BulkCardsRequest<'a> {
    pub operations: &'a [BulkCardOperation],
}

#[derive(Serialize)]
pub(crate) struct SyncRequest<'a> {
    pub installation_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_workspace_create_when_serialized_then_nested_under_workspace_key() {
        let req = CreateWorkspaceRequest::new("Acme").sharing_type(SharingType::Internal);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"workspace": {"name": "Acme", "sharing_type": "internal"}})
        );
    }

    #[test]
    fn given_card_create_when_serialized_then_flat_and_sparse() {
        let req = CreateCardRequest::new("readme").content("hello").scope("s1");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "readme", "content": "hello", "scope_id": "s1"})
        );
    }

    #[test]
    fn given_bulk_operations_when_serialized_then_tagged_by_action() {
        let ops = vec![
            BulkCardOperation::Create(CreateCardRequest::new("a").content("x")),
            BulkCardOperation::Update {
                id: "c2".into(),
                attributes: UpdateCardRequest {
                    content: Some("y".into()),
                    ..Default::default()
                },
            },
            BulkCardOperation::Delete { id: "c3".into() },
        ];
        assert_eq!(
            serde_json::to_value(&ops).unwrap(),
            json!([
                {"action": "create", "name": "a", "content": "x"},
                {"action": "update", "id": "c2", "attributes": {"content": "y"}},
                {"action": "delete", "id": "c3"}
            ])
        );
    }

    #[test]
    fn given_wrapped_bulk_file_when_parsed_then_operations_extracted() {
        let text = r#"{"operations": [{"action": "delete", "id": "c1"}]}"#;
        let ops = BulkCardOperation::list_from_json(text).unwrap();
        assert_eq!(ops, vec![BulkCardOperation::Delete { id: "c1".into() }]);
    }

    #[test]
    fn given_empty_bulk_file_when_parsed_then_rejected() {
        assert!(matches!(
            BulkCardOperation::list_from_json("[]"),
            Err(DomainError::InvalidPlan { .. })
        ));
    }

    #[test]
    fn given_unknown_bulk_action_when_parsed_then_rejected() {
        let text = r#"[{"action": "archive", "id": "c1"}]"#;
        assert!(BulkCardOperation::list_from_json(text).is_err());
    }

    #[test]
    fn given_organize_plan_without_sections_when_parsed_then_rejected() {
        assert!(OrganizeWorkspaceRequest::from_json("{}").is_err());
    }

    #[test]
    fn given_organize_plan_when_serialized_then_omits_missing_scope_moves() {
        let plan = OrganizeWorkspaceRequest {
            scopes: None,
            cards: Some(vec![CardPosition {
                id: "c1".into(),
                scope_id: None,
                position: 2,
            }]),
        };
        assert_eq!(
            serde_json::to_value(&plan).unwrap(),
            json!({"cards": [{"id": "c1", "position": 2}]})
        );
    }
}
