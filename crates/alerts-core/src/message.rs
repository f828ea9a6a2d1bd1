//! A single alert message

use crate::alert_type::{AlertType, TYPE_KEY};
use crate::error::AlertsError;
use crate::value::{Attributes, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text plus an open attribute map
///
/// The reserved `_type` attribute classifies the message; everything else is
/// free-form data a caller can filter on or hand to a renderer.
///
/// # Examples
///
/// ```
/// use alerts_core::{attributes, Message, Value};
///
/// let mut message = Message::with_attributes("Saved", attributes! { "_type" => "success" });
/// message.set("overlay", true);
///
/// assert_eq!(message.text(), "Saved");
/// assert_eq!(message.get("overlay"), Some(&Value::Bool(true)));
/// assert!(message.matches_all(&attributes! { "_type" => "success" }));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
	text: String,
	#[serde(default)]
	attributes: Attributes,
}

impl Message {
	/// A message with no attributes
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			attributes: Attributes::new(),
		}
	}

	/// A message with the given attributes
	pub fn with_attributes(text: impl Into<String>, attributes: Attributes) -> Self {
		Self {
			text: text.into(),
			attributes,
		}
	}

	/// The message text
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Replace the message text
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
	}

	/// All attributes, in insertion order
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Replaces the whole attribute map
	pub fn set_attributes(&mut self, attributes: Attributes) {
		self.attributes = attributes;
	}

	/// The attribute stored under `key`
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.attributes.get(key)
	}

	/// Returns the attribute for `key`, or `default` when the key is absent
	///
	/// # Examples
	///
	/// ```
	/// use alerts_core::{Message, Value};
	///
	/// let message = Message::new("Hello");
	/// let fallback = Value::from("OK");
	/// assert_eq!(message.get_or("buttonText", &fallback), &fallback);
	/// ```
	pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
		self.attributes.get(key).unwrap_or(default)
	}

	/// Inserts or replaces one attribute
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.attributes.insert(key.into(), value.into());
	}

	/// The built-in type of this message, if `_type` holds one
	pub fn alert_type(&self) -> Option<AlertType> {
		self.get(TYPE_KEY).and_then(AlertType::from_value)
	}

	/// True when every `(key, value)` in `criteria` is present with an equal value
	///
	/// Comparison is strict: `"1"` does not match `1`. Empty criteria match
	/// every message.
	///
	/// # Examples
	///
	/// ```
	/// use alerts_core::{attributes, Message};
	///
	/// let message = Message::with_attributes("x", attributes! { "count" => "1" });
	/// assert!(message.matches_all(&attributes! { "count" => "1" }));
	/// assert!(!message.matches_all(&attributes! { "count" => 1 }));
	/// assert!(message.matches_all(&attributes! {}));
	/// ```
	pub fn matches_all(&self, criteria: &Attributes) -> bool {
		criteria
			.iter()
			.all(|(key, value)| self.attributes.get(key) == Some(value))
	}

	/// `{"text": .., "attributes": {..}}` view for callers that serialize alerts themselves
	pub fn to_structured(&self) -> serde_json::Value {
		let attributes = self
			.attributes
			.iter()
			.map(|(key, value)| (key.clone(), value.to_json()))
			.collect::<serde_json::Map<_, _>>();

		let mut object = serde_json::Map::new();
		object.insert(
			"text".to_string(),
			serde_json::Value::String(self.text.clone()),
		);
		object.insert(
			"attributes".to_string(),
			serde_json::Value::Object(attributes),
		);
		serde_json::Value::Object(object)
	}
}

impl fmt::Display for Message {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

impl From<&str> for Message {
	fn from(text: &str) -> Self {
		Message::new(text)
	}
}

impl From<String> for Message {
	fn from(text: String) -> Self {
		Message::new(text)
	}
}

/// Rebuilds a message from dynamic data
///
/// Accepts the structured object form `{"text": .., "attributes": {..}}` and
/// the stored pair form `["text", {..}]`. Anything else is rejected with
/// [`AlertsError::InvalidMessageType`].
impl TryFrom<serde_json::Value> for Message {
	type Error = AlertsError;

	fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::Object(mut object) => {
				let text = match object.remove("text") {
					Some(serde_json::Value::String(text)) => text,
					other => {
						return Err(AlertsError::InvalidMessageType(format!(
							"expected a string `text` field, found {}",
							describe(other.as_ref())
						)));
					}
				};
				let attributes = parse_attributes(object.remove("attributes"))?;
				Ok(Message::with_attributes(text, attributes))
			}
			serde_json::Value::Array(items) if matches!(items.len(), 1 | 2) => {
				let mut items = items.into_iter();
				let text = match items.next() {
					Some(serde_json::Value::String(text)) => text,
					other => {
						return Err(AlertsError::InvalidMessageType(format!(
							"expected message text as first pair element, found {}",
							describe(other.as_ref())
						)));
					}
				};
				let attributes = parse_attributes(items.next())?;
				Ok(Message::with_attributes(text, attributes))
			}
			other => Err(AlertsError::InvalidMessageType(describe(Some(&other)))),
		}
	}
}

fn parse_attributes(value: Option<serde_json::Value>) -> Result<Attributes, AlertsError> {
	match value {
		None | Some(serde_json::Value::Null) => Ok(Attributes::new()),
		Some(serde_json::Value::Array(items)) if items.is_empty() => Ok(Attributes::new()),
		Some(value @ serde_json::Value::Object(_)) => serde_json::from_value(value)
			.map_err(|e| AlertsError::InvalidMessageType(format!("invalid attributes: {}", e))),
		Some(other) => Err(AlertsError::InvalidMessageType(format!(
			"expected an attribute object, found {}",
			describe(Some(&other))
		))),
	}
}

fn describe(value: Option<&serde_json::Value>) -> String {
	match value {
		None => "nothing".to_string(),
		Some(serde_json::Value::Null) => "null".to_string(),
		Some(serde_json::Value::Bool(_)) => "a boolean".to_string(),
		Some(serde_json::Value::Number(_)) => "a number".to_string(),
		Some(serde_json::Value::String(_)) => "a string".to_string(),
		Some(serde_json::Value::Array(_)) => "an array".to_string(),
		Some(serde_json::Value::Object(_)) => "an object".to_string(),
	}
}
