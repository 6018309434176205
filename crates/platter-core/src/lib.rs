//! Core request logic for the platter ordering system.
//!
//! This module provides the validation pipelines and the operations that
//! translate validated payloads into repository mutations. The HTTP layer
//! stays thin: it extracts a payload, delegates here, and renders the
//! resulting record or error.

/// Dish validation checks and operations.
pub mod dishes;
/// Order validation checks and operations.
pub mod orders;
/// Pipeline runner and per-request context.
pub mod pipeline;

use uuid::Uuid;

/// Generates a fresh opaque identifier for a newly created record.
pub(crate) fn next_id() -> String {
	Uuid::new_v4().to_string()
}
