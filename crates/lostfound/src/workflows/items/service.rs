use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{
    FoundItem, FoundItemReport, FoundItemStatus, ItemId, ItemUpdate, LostItem, LostItemReport,
    DEFAULT_LOST_STATUS,
};
use crate::repository::{Repository, RepositoryError};

/// Report and moderation operations over the two independent item collections.
pub struct ItemCatalogService<L, F> {
    lost: Arc<L>,
    found: Arc<F>,
}

static ITEM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_item_id(prefix: &str) -> ItemId {
    let id = ITEM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ItemId(format!("{prefix}-{id:06}"))
}

impl<L, F> ItemCatalogService<L, F>
where
    L: Repository<LostItem> + 'static,
    F: Repository<FoundItem> + 'static,
{
    pub fn new(lost: Arc<L>, found: Arc<F>) -> Self {
        Self { lost, found }
    }

    pub fn report_lost(&self, report: LostItemReport) -> Result<LostItem, ItemServiceError> {
        self.report_lost_at(report, Utc::now())
    }

    pub fn report_lost_at(
        &self,
        report: LostItemReport,
        now: DateTime<Utc>,
    ) -> Result<LostItem, ItemServiceError> {
        let title = required(report.title, "title")?;

        let item = LostItem {
            id: next_item_id("lost"),
            title,
            description: optional(report.description),
            category: optional(report.category),
            date_lost: report.date_lost,
            location: optional(report.location),
            image_url: optional(report.image_url),
            status: DEFAULT_LOST_STATUS.to_string(),
            contact: optional(report.contact),
            created_at: now,
            updated_at: now,
        };

        let stored = self.lost.insert(item)?;
        info!(item_id = %stored.id, "lost item reported");
        Ok(stored)
    }

    pub fn report_found(&self, report: FoundItemReport) -> Result<FoundItem, ItemServiceError> {
        self.report_found_at(report, Utc::now())
    }

    pub fn report_found_at(
        &self,
        report: FoundItemReport,
        now: DateTime<Utc>,
    ) -> Result<FoundItem, ItemServiceError> {
        let title = required(report.title, "title")?;
        let description = required(report.description, "description")?;
        let category = required(report.category, "category")?;
        let location = required(report.location, "location")?;
        let contact = required(report.contact, "contact")?;
        let status = match report.status.as_deref() {
            Some(raw) => parse_found_status(raw)?,
            None => FoundItemStatus::default(),
        };

        let item = FoundItem {
            id: next_item_id("found"),
            title,
            description,
            category,
            date_found: report.date_found,
            location,
            image_url: optional(report.image_url),
            contact,
            status,
            created_at: now,
            updated_at: now,
        };

        let stored = self.found.insert(item)?;
        info!(item_id = %stored.id, "found item reported");
        Ok(stored)
    }

    /// Lost items, newest report first.
    pub fn lost_items(&self) -> Result<Vec<LostItem>, ItemServiceError> {
        let mut items = self.lost.find_all()?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    /// Found items, newest report first.
    pub fn found_items(&self) -> Result<Vec<FoundItem>, ItemServiceError> {
        let mut items = self.found.find_all()?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    pub fn lost_item(&self, id: &ItemId) -> Result<LostItem, ItemServiceError> {
        let item = self.lost.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(item)
    }

    pub fn found_item(&self, id: &ItemId) -> Result<FoundItem, ItemServiceError> {
        let item = self.found.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(item)
    }

    pub fn update_lost(
        &self,
        id: &ItemId,
        update: ItemUpdate,
    ) -> Result<LostItem, ItemServiceError> {
        let mut item = self.lost.fetch(id)?.ok_or(RepositoryError::NotFound)?;

        if let Some(title) = update.title {
            item.title = non_blank(title, "title")?;
        }
        if let Some(description) = update.description {
            item.description = optional(Some(description));
        }
        if let Some(category) = update.category {
            item.category = optional(Some(category));
        }
        if let Some(location) = update.location {
            item.location = optional(Some(location));
        }
        if let Some(image_url) = update.image_url {
            item.image_url = optional(Some(image_url));
        }
        if let Some(contact) = update.contact {
            item.contact = optional(Some(contact));
        }
        if let Some(date) = update.date {
            item.date_lost = Some(date);
        }
        if let Some(status) = update.status {
            item.status = status;
        }
        item.updated_at = Utc::now();

        Ok(self.lost.update(item)?)
    }

    /// Edits a found item. Status changes are validated against the two custody states; no
    /// claim is consulted or modified.
    pub fn update_found(
        &self,
        id: &ItemId,
        update: ItemUpdate,
    ) -> Result<FoundItem, ItemServiceError> {
        let status = update.status.as_deref().map(parse_found_status).transpose()?;
        let mut item = self.found.fetch(id)?.ok_or(RepositoryError::NotFound)?;

        if let Some(title) = update.title {
            item.title = non_blank(title, "title")?;
        }
        if let Some(description) = update.description {
            item.description = non_blank(description, "description")?;
        }
        if let Some(category) = update.category {
            item.category = non_blank(category, "category")?;
        }
        if let Some(location) = update.location {
            item.location = non_blank(location, "location")?;
        }
        if let Some(contact) = update.contact {
            item.contact = non_blank(contact, "contact")?;
        }
        if let Some(image_url) = update.image_url {
            item.image_url = optional(Some(image_url));
        }
        if let Some(date) = update.date {
            item.date_found = Some(date);
        }
        if let Some(status) = status {
            if status != item.status {
                info!(item_id = %item.id, status = status.label(), "found item status changed");
            }
            item.status = status;
        }
        item.updated_at = Utc::now();

        Ok(self.found.update(item)?)
    }

    pub fn set_found_status(
        &self,
        id: &ItemId,
        status: &str,
    ) -> Result<FoundItem, ItemServiceError> {
        self.update_found(
            id,
            ItemUpdate {
                status: Some(status.to_string()),
                ..ItemUpdate::default()
            },
        )
    }

    /// Removes the item only; claims pointing at it are left in place.
    pub fn delete_lost(&self, id: &ItemId) -> Result<LostItem, ItemServiceError> {
        let removed = self.lost.delete(id)?.ok_or(RepositoryError::NotFound)?;
        info!(item_id = %removed.id, "lost item deleted");
        Ok(removed)
    }

    /// Removes the item only; claims pointing at it are left in place.
    pub fn delete_found(&self, id: &ItemId) -> Result<FoundItem, ItemServiceError> {
        let removed = self.found.delete(id)?.ok_or(RepositoryError::NotFound)?;
        info!(item_id = %removed.id, "found item deleted");
        Ok(removed)
    }
}

fn parse_found_status(raw: &str) -> Result<FoundItemStatus, ItemValidationError> {
    FoundItemStatus::parse(raw).ok_or_else(|| ItemValidationError::InvalidStatus {
        value: raw.to_string(),
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ItemValidationError> {
    non_blank(value.unwrap_or_default(), field)
}

fn non_blank(value: String, field: &'static str) -> Result<String, ItemValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ItemValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

/// Rejections raised before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid status")]
    InvalidStatus { value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ItemServiceError {
    #[error(transparent)]
    Validation(#[from] ItemValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
