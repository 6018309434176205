//! Storage module for the platter ordering system.
//!
//! This module provides the repository abstraction the request handlers
//! mutate through. Records live in process-scoped collections; the interface
//! keeps the backing representation swappable without touching the handlers.

use async_trait::async_trait;
use platter_types::Record;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod memory;
}

pub use implementations::memory::MemoryRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
	/// Error that occurs when a requested record is not found.
	#[error("Not found")]
	NotFound,
}

/// Mutation applied to a stored record during an in-place update.
pub type Patch<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Trait defining the interface for record repositories.
///
/// A repository holds one resource's records in insertion order. Mutations
/// are synchronous within one logical operation; validation always precedes
/// them, so a failed request never leaves a partial write behind.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
	/// Looks up a record by id.
	async fn find(&self, id: &str) -> Result<T, StoreError>;

	/// Appends a freshly created record.
	async fn append(&self, record: T);

	/// Applies `patch` to the stored record and returns the updated copy.
	async fn update_in_place(&self, id: &str, patch: Patch<T>) -> Result<T, StoreError>;

	/// Removes the record with the given id.
	async fn remove(&self, id: &str) -> Result<(), StoreError>;

	/// Returns the full collection in insertion order.
	async fn list(&self) -> Vec<T>;
}
