use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::Document;

/// Store-assigned identifier shared by both item collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which collection an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Lost,
    Found,
}

pub const DEFAULT_LOST_STATUS: &str = "Lost";

/// Custody state of a found item. Independent of any claim filed against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoundItemStatus {
    #[default]
    #[serde(rename = "Found")]
    Found,
    /// Physically handed in to the office and ready for display.
    #[serde(rename = "Found and Submitted")]
    FoundAndSubmitted,
}

impl FoundItemStatus {
    pub const fn label(self) -> &'static str {
        match self {
            FoundItemStatus::Found => "Found",
            FoundItemStatus::FoundAndSubmitted => "Found and Submitted",
        }
    }

    /// Exact label match; anything else is an invalid status.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Found" => Some(FoundItemStatus::Found),
            "Found and Submitted" => Some(FoundItemStatus::FoundAndSubmitted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItem {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_lost: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free text; reports start as "Lost" and nothing in the workflow moves it.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for LostItem {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItem {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_found: Option<NaiveDate>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub contact: String,
    #[serde(default)]
    pub status: FoundItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for FoundItem {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Public lost-item report form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItemReport {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date_lost: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

/// Public found-item report form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItemReport {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date_found: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Partial edit applied by an administrator; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default, alias = "dateLost", alias = "dateFound")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Projection used wherever a claim needs to show what it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub kind: ItemKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LostItem {
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id.clone(),
            kind: ItemKind::Lost,
            title: self.title.clone(),
            location: self.location.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

impl FoundItem {
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id.clone(),
            kind: ItemKind::Found,
            title: self.title.clone(),
            location: Some(self.location.clone()),
            image_url: self.image_url.clone(),
        }
    }
}
