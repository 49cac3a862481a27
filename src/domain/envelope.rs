//! Response envelopes: `{data, meta?}`, structured errors, bulk results

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{BulkAction, Card};

/// Paging metadata attached to list responses.
///
/// Exposed to callers as-is; the client never follows `next_offset` on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
    pub next_offset: Option<u32>,
}

impl Pagination {
    /// Offset of the following page, if the server says there is one.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_more {
            self.next_offset
        } else {
            None
        }
    }
}

/// Standard `{data, meta?}` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    /// Drop `meta` and keep only the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Structured error body: `{error, code, details?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: u32,
    #[serde(default)]
    pub details: Option<Value>,
}

/// Per-item outcome of a bulk card request, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkCardResult {
    pub action: BulkAction,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BulkItemData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkCardResult {
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// The echoed card, when the server returned a full one.
    pub fn card(&self) -> Option<&Card> {
        self.data.as_ref().and_then(BulkItemData::card)
    }
}

/// Payload echoed for one bulk item.
///
/// Creates and updates echo a full card; deletes may echo a partial object
/// such as `{"id": ...}`. Anything that does not decode as a card stays `Raw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulkItemData {
    Card(Box<Card>),
    Raw(Value),
}

impl BulkItemData {
    pub fn card(&self) -> Option<&Card> {
        match self {
            BulkItemData::Card(card) => Some(card),
            BulkItemData::Raw(_) => None,
        }
    }

    /// Identifier of the affected card, from either shape.
    pub fn id(&self) -> Option<&str> {
        match self {
            BulkItemData::Card(card) => Some(&card.id),
            BulkItemData::Raw(value) => value.get("id").and_then(Value::as_str),
        }
    }
}

/// Number of items in a bulk response that did not succeed.
pub fn failed_count(results: &[BulkCardResult]) -> usize {
    results.iter().filter(|r| r.is_failure()).count()
}
