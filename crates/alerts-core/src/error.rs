//! Error types shared by every alerts crate.

use thiserror::Error;

/// Result type for alerts operations.
pub type AlertsResult<T> = Result<T, AlertsError>;

/// Alerts errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlertsError {
	/// Rendering was requested but neither an explicit nor a default renderer is set.
	#[error("unable to render alerts: no renderer configured")]
	NoRendererConfigured,

	/// A value that does not describe a message was placed into a collection slot.
	#[error("value is not a message: {0}")]
	InvalidMessageType(String),

	/// Storage backend failure.
	#[error("storage error: {0}")]
	Storage(String),

	/// Settings could not be parsed.
	#[error("invalid settings: {0}")]
	Settings(String),

	/// JSON (de)serialization failure.
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
