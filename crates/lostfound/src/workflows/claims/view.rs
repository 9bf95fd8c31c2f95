//! Read-side join of claims against the live item collections.
//!
//! Claims keep pointing at items after those items are deleted. The admin listing hides such
//! orphans instead of rendering a dangling reference; the stored claims are left untouched and
//! stay reachable by id.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::domain::Claim;
use crate::workflows::items::{FoundItem, ItemId, ItemSummary, LostItem};

/// Lookup of every item currently present in either collection.
#[derive(Debug, Default, Clone)]
pub struct ItemIndex {
    items: HashMap<ItemId, ItemSummary>,
}

impl ItemIndex {
    pub fn build(lost: &[LostItem], found: &[FoundItem]) -> Self {
        let items = lost
            .iter()
            .map(LostItem::summary)
            .chain(found.iter().map(FoundItem::summary))
            .map(|summary| (summary.id.clone(), summary))
            .collect();
        Self { items }
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn resolve(&self, id: &ItemId) -> Option<&ItemSummary> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Columns the admin claim table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimSortKey {
    #[serde(rename = "claimantName")]
    ClaimantName,
    /// Title of the referenced item, resolved through the index.
    #[serde(rename = "itemName")]
    ItemName,
    #[serde(rename = "dateClaimed")]
    DateClaimed,
    #[serde(rename = "status")]
    Status,
    #[serde(rename = "_id")]
    Id,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSort {
    pub key: ClaimSortKey,
    pub direction: SortDirection,
}

impl ClaimSort {
    pub const fn ascending(key: ClaimSortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Column-header click: the active ascending column flips to descending, anything else
    /// (including the active descending column) starts ascending.
    pub fn request(current: Option<ClaimSort>, key: ClaimSortKey) -> Self {
        match current {
            Some(active) if active.key == key && active.direction == SortDirection::Ascending => {
                Self {
                    key,
                    direction: SortDirection::Descending,
                }
            }
            _ => Self::ascending(key),
        }
    }
}

/// Query options for the admin claim listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<ClaimSortKey>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
}

impl ClaimQuery {
    pub fn sort_config(&self) -> Option<ClaimSort> {
        self.sort.map(|key| ClaimSort {
            key,
            direction: self.direction.unwrap_or_default(),
        })
    }

    /// Lowercased term matched as a plain substring. Surrounding whitespace is part of the
    /// term; only an empty string disables the filter.
    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}

/// A claim whose referenced item resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimView {
    #[serde(flatten)]
    pub claim: Claim,
    pub item: ItemSummary,
}

/// Claims safe to administer: orphans dropped, then searched, then stably sorted.
pub fn consistent_claims(
    claims: Vec<Claim>,
    index: &ItemIndex,
    query: &ClaimQuery,
) -> Vec<ClaimView> {
    let term = query.search_term();

    let mut views: Vec<ClaimView> = claims
        .into_iter()
        .filter_map(|claim| {
            let item = index.resolve(&claim.item_id)?.clone();
            Some(ClaimView { claim, item })
        })
        .filter(|view| match &term {
            Some(term) => matches_search(view, term),
            None => true,
        })
        .collect();

    if let Some(sort) = query.sort_config() {
        views.sort_by(|a, b| {
            let ordering = compare(a, b, sort.key);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    views
}

/// Claims whose item is gone from both collections.
pub fn orphaned_claims<'a>(claims: &'a [Claim], index: &ItemIndex) -> Vec<&'a Claim> {
    claims
        .iter()
        .filter(|claim| !index.contains(&claim.item_id))
        .collect()
}

fn matches_search(view: &ClaimView, term: &str) -> bool {
    [
        view.claim.claimant_name.as_str(),
        view.claim.message.as_str(),
        view.item.title.as_str(),
        view.claim.id.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}

fn compare(a: &ClaimView, b: &ClaimView, key: ClaimSortKey) -> Ordering {
    match key {
        ClaimSortKey::ClaimantName => a.claim.claimant_name.cmp(&b.claim.claimant_name),
        ClaimSortKey::ItemName => a.item.title.cmp(&b.item.title),
        ClaimSortKey::DateClaimed => a.claim.date_claimed.cmp(&b.claim.date_claimed),
        ClaimSortKey::Status => a.claim.status.label().cmp(b.claim.status.label()),
        ClaimSortKey::Id => a.claim.id.cmp(&b.claim.id),
    }
}
