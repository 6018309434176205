//! Configuration module for the platter ordering system.
//!
//! This module provides structures and utilities for managing service
//! configuration. It supports loading configuration from TOML files and
//! falls back to built-in defaults when no file is present.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the platter service.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
	/// Configuration for the HTTP server.
	#[serde(default)]
	pub server: ServerConfig,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
	/// Address the server binds to.
	#[serde(default = "default_host")]
	pub host: String,
	/// Port the server listens on.
	#[serde(default = "default_port")]
	pub port: u16,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: default_host(),
			port: default_port(),
		}
	}
}

/// Returns the default bind address.
fn default_host() -> String {
	"127.0.0.1".to_string()
}

/// Returns the default listen port.
fn default_port() -> u16 {
	8080
}

impl Config {
	/// Loads configuration from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let contents = std::fs::read_to_string(path)?;
		let config = toml::from_str(&contents)?;
		Ok(config)
	}

	/// Loads configuration from a TOML file, falling back to defaults when
	/// the file does not exist.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		if path.as_ref().exists() {
			Self::from_file(path)
		} else {
			Ok(Self::default())
		}
	}
}
