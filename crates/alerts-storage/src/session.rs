//! Session-backed flash storage

use crate::Storage;
use crate::codec::{decode_pairs, encode_collection};
use alerts_core::{AlertsResult, MessageCollection};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Session slot used when no key is configured
pub const DEFAULT_SESSION_KEY: &str = "_alerts";

/// Request-scoped key/value data
///
/// The host application owns loading and saving the session between
/// requests; [`to_json`](Session::to_json) and
/// [`from_json`](Session::from_json) give it a portable form.
///
/// # Examples
///
/// ```
/// use alerts_storage::Session;
/// use serde_json::json;
///
/// let mut session = Session::new();
/// session.set("user_id", json!("123"));
/// assert_eq!(session.get("user_id"), Some(&json!("123")));
/// assert_eq!(session.remove("user_id"), Some(json!("123")));
/// assert!(session.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
	/// Session data as key-value pairs
	pub data: HashMap<String, serde_json::Value>,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
		self.data.insert(key.into(), value);
	}

	pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
		self.data.get(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
		self.data.remove(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.data.contains_key(key)
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn clear(&mut self) {
		self.data.clear();
	}

	/// Serialize the whole session
	pub fn to_json(&self) -> AlertsResult<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Restore a session serialized with [`to_json`](Session::to_json)
	pub fn from_json(json: &str) -> AlertsResult<Self> {
		Ok(serde_json::from_str(json)?)
	}
}

/// A session shared between the host application and [`SessionStorage`]
pub type SharedSession = Arc<Mutex<Session>>;

/// Stores alerts in one named session slot
///
/// `store` writes the slot only when there is something to store, so an empty
/// collection leaves earlier stored alerts in place. `retrieve` removes the
/// slot before decoding it: stored alerts are read at most once, and a
/// malformed payload is discarded along with the error.
///
/// # Examples
///
/// ```
/// use alerts_storage::{Session, SessionStorage};
/// use parking_lot::Mutex;
/// use std::sync::Arc;
///
/// let storage = SessionStorage::new(Arc::new(Mutex::new(Session::new()))).with_key("flash");
/// assert_eq!(storage.key(), "flash");
/// ```
#[derive(Debug, Clone)]
pub struct SessionStorage {
	session: SharedSession,
	key: String,
}

impl SessionStorage {
	pub fn new(session: SharedSession) -> Self {
		Self {
			session,
			key: DEFAULT_SESSION_KEY.to_string(),
		}
	}

	/// Use a different session slot
	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = key.into();
		self
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn session(&self) -> &SharedSession {
		&self.session
	}
}

impl Storage for SessionStorage {
	fn store(&self, messages: &MessageCollection) -> AlertsResult<()> {
		if messages.is_empty() {
			tracing::debug!(key = %self.key, "No alerts to store in session");
			return Ok(());
		}

		let payload = encode_collection(messages);
		self.session.lock().set(self.key.clone(), payload);
		tracing::debug!(key = %self.key, count = messages.count(), "Stored alerts in session");
		Ok(())
	}

	fn retrieve(&self, messages: &mut MessageCollection) -> AlertsResult<()> {
		let Some(payload) = self.session.lock().remove(&self.key) else {
			return Ok(());
		};

		let restored = decode_pairs(payload)?;
		tracing::debug!(key = %self.key, count = restored.len(), "Retrieved alerts from session");
		messages.extend(restored);
		Ok(())
	}
}
