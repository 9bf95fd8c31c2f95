//! Document persistence collaborator shared by every collection.
//!
//! Each collection (lost items, found items, claims, contact messages, users) is stored
//! behind its own [`Repository`]. Writes are single-document and atomic; nothing spans
//! collections, so deleting an item never touches the claims that reference it.

use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

/// A persisted record addressed by an opaque, immutable identifier.
pub trait Document: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
}

/// Storage abstraction so services can be exercised in isolation.
pub trait Repository<D: Document>: Send + Sync {
    fn find_all(&self) -> Result<Vec<D>, RepositoryError>;
    fn fetch(&self, id: &D::Id) -> Result<Option<D>, RepositoryError>;
    fn insert(&self, document: D) -> Result<D, RepositoryError>;
    /// Replaces the stored document with the same id; `NotFound` when absent.
    fn update(&self, document: D) -> Result<D, RepositoryError>;
    fn delete(&self, id: &D::Id) -> Result<Option<D>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local collection preserving insertion order.
pub struct InMemoryRepository<D> {
    documents: Arc<Mutex<Vec<D>>>,
}

impl<D> Clone for InMemoryRepository<D> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
        }
    }
}

impl<D> Default for InMemoryRepository<D> {
    fn default() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<D: Document> InMemoryRepository<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: impl IntoIterator<Item = D>) -> Self {
        Self {
            documents: Arc::new(Mutex::new(documents.into_iter().collect())),
        }
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<D>>, RepositoryError> {
        self.documents
            .lock()
            .map_err(|_| RepositoryError::Unavailable("collection mutex poisoned".to_string()))
    }
}

impl<D: Document> Repository<D> for InMemoryRepository<D> {
    fn find_all(&self) -> Result<Vec<D>, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    fn fetch(&self, id: &D::Id) -> Result<Option<D>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.iter().find(|document| document.id() == id).cloned())
    }

    fn insert(&self, document: D) -> Result<D, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.iter().any(|existing| existing.id() == document.id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(document.clone());
        Ok(document)
    }

    fn update(&self, document: D) -> Result<D, RepositoryError> {
        let mut guard = self.lock()?;
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id() == document.id())
            .ok_or(RepositoryError::NotFound)?;
        *slot = document.clone();
        Ok(document)
    }

    fn delete(&self, id: &D::Id) -> Result<Option<D>, RepositoryError> {
        let mut guard = self.lock()?;
        let position = guard.iter().position(|document| document.id() == id);
        Ok(position.map(|index| guard.remove(index)))
    }
}
