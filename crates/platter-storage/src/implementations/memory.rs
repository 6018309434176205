//! In-memory repository implementation.
//!
//! This module provides the memory-backed implementation of the Repository
//! trait. Records live in an insertion-ordered vector for the lifetime of
//! the process; nothing is persisted across restarts.

use crate::{Patch, Repository, StoreError};
use async_trait::async_trait;
use platter_types::Record;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory repository implementation.
///
/// Lookups are linear scans, which keeps listing in insertion order.
pub struct MemoryRepository<T> {
	/// The in-memory collection protected by a read-write lock.
	records: Arc<RwLock<Vec<T>>>,
}

impl<T> MemoryRepository<T> {
	/// Creates a new, empty MemoryRepository.
	pub fn new() -> Self {
		Self {
			records: Arc::new(RwLock::new(Vec::new())),
		}
	}
}

impl<T> Default for MemoryRepository<T> {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
	async fn find(&self, id: &str) -> Result<T, StoreError> {
		let records = self.records.read().await;
		records
			.iter()
			.find(|record| record.id() == id)
			.cloned()
			.ok_or(StoreError::NotFound)
	}

	async fn append(&self, record: T) {
		let mut records = self.records.write().await;
		tracing::debug!(id = %record.id(), "Appending record");
		records.push(record);
	}

	async fn update_in_place(&self, id: &str, patch: Patch<T>) -> Result<T, StoreError> {
		let mut records = self.records.write().await;
		let record = records
			.iter_mut()
			.find(|record| record.id() == id)
			.ok_or(StoreError::NotFound)?;
		patch(record);
		Ok(record.clone())
	}

	async fn remove(&self, id: &str) -> Result<(), StoreError> {
		let mut records = self.records.write().await;
		let index = records
			.iter()
			.position(|record| record.id() == id)
			.ok_or(StoreError::NotFound)?;
		tracing::debug!(id = %id, "Removing record");
		records.remove(index);
		Ok(())
	}

	async fn list(&self) -> Vec<T> {
		let records = self.records.read().await;
		records.clone()
	}
}
