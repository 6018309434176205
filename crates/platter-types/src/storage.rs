//! Storage-facing types for managing stored records.

/// A stored record addressable by its server-assigned id.
pub trait Record: Clone + Send + Sync + 'static {
	/// The record's unique identifier.
	fn id(&self) -> &str;
}
