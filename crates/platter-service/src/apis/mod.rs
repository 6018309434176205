//! API handler modules for the platter HTTP endpoints.

pub mod dishes;
pub mod orders;
