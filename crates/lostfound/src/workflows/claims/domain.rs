use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::repository::Document;
use crate::workflows::items::ItemId;

/// Identifier wrapper for submitted claims.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(pub String);

impl ClaimId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Review state of a claim. Every state is reachable from every other state, and only an
/// administrator moves a claim between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    #[default]
    Waiting,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Waiting, Self::Approved, Self::Rejected]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ClaimStatus::Waiting => "waiting",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }

    /// Strict parse used for administrator transitions: exact lowercase labels only.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.label() == raw)
    }

    /// Lenient parse for persisted records. Older writers stored "pending" and mixed
    /// casing for unreviewed claims; both decode as `Waiting`.
    pub fn from_stored(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "waiting" | "pending" => Some(ClaimStatus::Waiting),
            "approved" => Some(ClaimStatus::Approved),
            "rejected" => Some(ClaimStatus::Rejected),
            _ => None,
        }
    }

    pub const fn is_pending(self) -> bool {
        matches!(self, ClaimStatus::Waiting)
    }
}

impl<'de> Deserialize<'de> for ClaimStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_stored(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown claim status '{raw}'")))
    }
}

/// Stored claim record. Field names are shared with other consumers of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(rename = "_id")]
    pub id: ClaimId,
    /// Weak reference: never checked on write and may point at an item deleted since.
    pub item_id: ItemId,
    pub claimant_name: String,
    pub contact: String,
    pub message: String,
    pub date_claimed: DateTime<Utc>,
    #[serde(default)]
    pub status: ClaimStatus,
}

impl Document for Claim {
    type Id = ClaimId;

    fn id(&self) -> &ClaimId {
        &self.id
    }
}

/// Inbound claim form. Every field is optional at this layer so that intake can report
/// missing values uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSubmission {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub claimant_name: Option<String>,
    /// Phone numbers arrive as JSON numbers as often as strings.
    #[serde(default, deserialize_with = "contact_as_text")]
    pub contact: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn contact_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Body of an administrator status change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    #[serde(default)]
    pub status: Option<String>,
}
