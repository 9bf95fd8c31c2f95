//! Lost and found item reports: two independent collections with no shared schema.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{
    FoundItem, FoundItemReport, FoundItemStatus, ItemId, ItemKind, ItemSummary, ItemUpdate,
    LostItem, LostItemReport, DEFAULT_LOST_STATUS,
};
pub use router::item_router;
pub use service::{ItemCatalogService, ItemServiceError, ItemValidationError};
