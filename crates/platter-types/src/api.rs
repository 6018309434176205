//! API types for the platter HTTP API.
//!
//! This module defines the request/response envelope and the structured
//! error type used by every endpoint. Request and response bodies wrap the
//! resource in a `data` field; error responses carry a single `error`
//! message with the matching HTTP status code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope wrapping every request and response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
	/// The wrapped resource (a record, or a list of records).
	pub data: T,
}

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
	/// Human-readable description of the rejection.
	pub error: String,
}

/// Structured API error type with appropriate HTTP status mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
	/// Field or shape violation in the request payload (400).
	BadRequest(String),
	/// No record with the requested id (404).
	NotFound(String),
	/// Verb not wired for the route (405).
	MethodNotAllowed(String),
}

impl ApiError {
	/// Creates a 400 validation error.
	pub fn bad_request(message: impl Into<String>) -> Self {
		ApiError::BadRequest(message.into())
	}

	/// Creates a 404 unknown-id error.
	pub fn not_found(message: impl Into<String>) -> Self {
		ApiError::NotFound(message.into())
	}

	/// Creates a 405 routing error.
	pub fn method_not_allowed(message: impl Into<String>) -> Self {
		ApiError::MethodNotAllowed(message.into())
	}

	/// Get the HTTP status code for this error.
	pub fn status_code(&self) -> u16 {
		match self {
			ApiError::BadRequest(_) => 400,
			ApiError::NotFound(_) => 404,
			ApiError::MethodNotAllowed(_) => 405,
		}
	}

	/// The message surfaced to the client.
	pub fn message(&self) -> &str {
		match self {
			ApiError::BadRequest(message)
			| ApiError::NotFound(message)
			| ApiError::MethodNotAllowed(message) => message,
		}
	}

	/// Convert to ErrorResponse for JSON serialization.
	pub fn to_error_response(&self) -> ErrorResponse {
		ErrorResponse {
			error: self.message().to_string(),
		}
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
			ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
			ApiError::MethodNotAllowed(message) => {
				write!(f, "Method Not Allowed: {}", message)
			},
		}
	}
}

impl std::error::Error for ApiError {}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ApiError {
	fn into_response(self) -> axum::response::Response {
		use axum::{http::StatusCode, response::Json};

		let status = match self.status_code() {
			400 => StatusCode::BAD_REQUEST,
			404 => StatusCode::NOT_FOUND,
			405 => StatusCode::METHOD_NOT_ALLOWED,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};

		(status, Json(self.to_error_response())).into_response()
	}
}
