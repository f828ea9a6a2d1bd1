//! Built-in alert types

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute key that classifies a message
pub const TYPE_KEY: &str = "_type";

/// The four built-in severities
///
/// `_type` is an open attribute: callers may store any value there. Values
/// outside this enumeration are custom categories that the built-in
/// renderers skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
	Success,
	Notice,
	Warning,
	Error,
}

impl AlertType {
	/// Every built-in type
	pub const ALL: [AlertType; 4] = [
		AlertType::Success,
		AlertType::Notice,
		AlertType::Warning,
		AlertType::Error,
	];

	/// Returns the string stored under `_type`
	///
	/// # Examples
	///
	/// ```
	/// use alerts_core::AlertType;
	///
	/// assert_eq!(AlertType::Success.as_str(), "success");
	/// assert_eq!(AlertType::Notice.as_str(), "notice");
	/// assert_eq!(AlertType::Warning.as_str(), "warning");
	/// assert_eq!(AlertType::Error.as_str(), "error");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			AlertType::Success => "success",
			AlertType::Notice => "notice",
			AlertType::Warning => "warning",
			AlertType::Error => "error",
		}
	}

	/// Parses a type name (exact, case-sensitive)
	///
	/// # Examples
	///
	/// ```
	/// use alerts_core::AlertType;
	///
	/// assert_eq!(AlertType::parse("error"), Some(AlertType::Error));
	/// assert_eq!(AlertType::parse("Error"), None);
	/// assert_eq!(AlertType::parse("My Type"), None);
	/// ```
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"success" => Some(AlertType::Success),
			"notice" => Some(AlertType::Notice),
			"warning" => Some(AlertType::Warning),
			"error" => Some(AlertType::Error),
			_ => None,
		}
	}

	/// Classifies a `_type` attribute value; non-string values are never built-in types
	pub fn from_value(value: &Value) -> Option<Self> {
		value.as_str().and_then(Self::parse)
	}
}

impl fmt::Display for AlertType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<AlertType> for Value {
	fn from(alert_type: AlertType) -> Self {
		Value::String(alert_type.as_str().to_string())
	}
}
