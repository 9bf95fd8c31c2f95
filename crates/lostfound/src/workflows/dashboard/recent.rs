use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::workflows::claims::Claim;
use crate::workflows::items::{FoundItem, LostItem};

/// How many entries each recent-activity panel shows.
pub const RECENT_LIMIT: usize = 7;

/// Entry in the merged recent-items feed, tagged with the collection it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecentItem {
    Lost(LostItem),
    Found(FoundItem),
}

impl RecentItem {
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            RecentItem::Lost(item) => item.created_at,
            RecentItem::Found(item) => item.created_at,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            RecentItem::Lost(item) => &item.title,
            RecentItem::Found(item) => &item.title,
        }
    }
}

/// Latest reports across both collections, newest first.
pub fn recent_items(lost: Vec<LostItem>, found: Vec<FoundItem>) -> Vec<RecentItem> {
    let mut merged: Vec<RecentItem> = lost
        .into_iter()
        .map(RecentItem::Lost)
        .chain(found.into_iter().map(RecentItem::Found))
        .collect();
    merged.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    merged.truncate(RECENT_LIMIT);
    merged
}

/// Latest claims by submission time. Orphans are included; this panel is an activity log.
pub fn recent_claims(mut claims: Vec<Claim>) -> Vec<Claim> {
    claims.sort_by(|a, b| b.date_claimed.cmp(&a.date_claimed));
    claims.truncate(RECENT_LIMIT);
    claims
}
