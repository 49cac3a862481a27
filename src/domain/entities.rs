//! Domain entities: records returned by the API
//!
//! These are plain wire records. Ordering (`position`) and default-flag
//! exclusivity (`is_default`) are owned by the server and never re-derived here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{ApiToken, DomainError};

/// Visibility of a workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharingType {
    #[default]
    Private,
    Internal,
    Public,
}

impl SharingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SharingType::Private => "private",
            SharingType::Internal => "internal",
            SharingType::Public => "public",
        }
    }
}

impl fmt::Display for SharingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private" => Ok(SharingType::Private),
            "internal" => Ok(SharingType::Internal),
            "public" => Ok(SharingType::Public),
            other => Err(DomainError::UnknownSharingType(other.to_string())),
        }
    }
}

/// Server-owned synchronization status of a GitHub repository.
///
/// Values the client does not know decode as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    GoodConfig,
    BadConfig,
    NoConfig,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Kind of GitHub account behind a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GithubAccountType {
    User,
    Organization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a password login. The session token is revealed only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: ApiToken,
    pub user: User,
}

/// Personal access token metadata.
///
/// `token` is present only in the response to creation; later listings
/// never carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalAccessToken {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<ApiToken>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonalAccessToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

/// Top-level container owning scopes and cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_default: bool,
    pub sharing_type: SharingType,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards_count: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Server fields not modeled above, kept so output round-trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Named, ordered grouping of cards within a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_default: bool,
    pub position: i64,
    #[serde(default)]
    pub cards_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Compact repository reference embedded in a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubRepoSummary {
    pub id: String,
    pub repository_name: String,
    pub repository_full_name: String,
    #[serde(default)]
    pub sync_state: SyncState,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named content unit positioned within a scope.
///
/// `content` is opaque text; the client never reinterprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub workspace_id: String,
    pub scope_id: String,
    #[serde(default)]
    pub github_repo_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub content: String,
    pub position: i64,
    #[serde(default)]
    pub github_repo: Option<GithubRepoSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A connected GitHub account or organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubNamespace {
    pub id: String,
    pub installation_id: String,
    pub name: String,
    pub github_account_type: GithubAccountType,
    pub github_account_login: String,
    #[serde(default)]
    pub repos_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubRepo {
    pub id: String,
    pub github_namespace_id: String,
    pub repository_id: u64,
    pub repository_name: String,
    pub repository_full_name: String,
    pub default_branch: String,
    #[serde(default)]
    pub sync_state: SyncState,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Counts reported by a workspace organize call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizeResult {
    pub message: String,
    pub scopes_updated: u64,
    pub cards_updated: u64,
}

/// Acknowledgement of a GitHub sync request. Completion is not tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAcknowledgement {
    pub message: String,
    pub installation_id: String,
    pub namespace_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_unknown_sync_state_when_decoding_then_falls_back_to_unknown() {
        let summary: GithubRepoSummary = serde_json::from_value(json!({
            "id": "r1",
            "repository_name": "api",
            "repository_full_name": "acme/api",
            "sync_state": "pending_review"
        }))
        .unwrap();
        assert_eq!(summary.sync_state, SyncState::Unknown);
    }

    #[test]
    fn given_sharing_type_text_when_parsing_then_case_insensitive() {
        assert_eq!("Public".parse::<SharingType>().unwrap(), SharingType::Public);
        assert!("secret".parse::<SharingType>().is_err());
    }

    #[test]
    fn given_listed_token_when_decoding_then_secret_absent() {
        let pat: PersonalAccessToken = serde_json::from_value(json!({
            "id": "t1",
            "name": "ci",
            "last_used_at": null,
            "expires_at": null,
            "revoked_at": "2025-01-02T03:04:05Z",
            "created_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(pat.token.is_none());
        assert!(pat.is_revoked());
        let out = serde_json::to_value(&pat).unwrap();
        assert!(out.get("token").is_none());
    }

    #[test]
    fn given_card_with_null_repo_when_decoding_then_content_kept_verbatim() {
        let card: Card = serde_json::from_value(json!({
            "id": "c1",
            "workspace_id": "w1",
            "scope_id": "s1",
            "github_repo_id": null,
            "name": "readme",
            "content": "---\nkey:  value\n\t",
            "position": 0,
            "github_repo": null,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(card.content, "---\nkey:  value\n\t");
        assert!(card.github_repo.is_none());
    }

    #[test]
    fn given_unmodeled_fields_when_round_tripped_then_preserved() {
        let raw = json!({
            "id": "w1",
            "name": "Acme",
            "description": "infra notes",
            "is_default": false,
            "sharing_type": "internal",
            "owner_id": "u1",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
            "archived": false
        });
        let workspace: Workspace = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(workspace.extra.get("archived"), Some(&json!(false)));
        assert_eq!(serde_json::to_value(&workspace).unwrap(), raw);
    }
}
