//! Cookie-backed flash storage

use crate::Storage;
use crate::codec::{decode_pairs, encode_pairs};
use alerts_core::{AlertsError, AlertsResult, Message, MessageCollection};
use parking_lot::Mutex;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters RFC 6265 does not allow in a cookie value, plus `%` and space
const COOKIE_UNSAFE: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'%')
	.add(b',')
	.add(b';')
	.add(b'\\');

/// Cookie-based flash storage
///
/// Holds the incoming cookie value (seeded with
/// [`load_from_cookie`](CookieStorage::load_from_cookie)) and the outgoing
/// one (read with [`cookie_value`](CookieStorage::cookie_value)). Messages
/// are JSON encoded, then percent-encoded. When the encoded value exceeds the
/// size limit the oldest messages are dropped until it fits.
///
/// Cookies are client-controlled, so a value that cannot be decoded is
/// discarded with a warning instead of failing the request.
///
/// # Examples
///
/// ```
/// use alerts_core::{Message, MessageCollection};
/// use alerts_storage::{CookieStorage, Storage};
///
/// let outgoing = CookieStorage::new();
/// let messages: MessageCollection = vec![Message::new("Saved; really")].into_iter().collect();
/// outgoing.store(&messages).unwrap();
/// let cookie = outgoing.cookie_value().unwrap();
/// assert!(!cookie.contains(';'));
///
/// let incoming = CookieStorage::new();
/// incoming.load_from_cookie(&cookie);
/// let mut restored = MessageCollection::new();
/// incoming.retrieve(&mut restored).unwrap();
/// assert_eq!(restored.get_messages(), vec!["Saved; really"]);
/// ```
#[derive(Debug)]
pub struct CookieStorage {
	cookie_name: String,
	max_cookie_size: usize,
	value: Mutex<Option<String>>,
}

impl CookieStorage {
	/// Default maximum cookie size (4KB)
	pub const DEFAULT_MAX_SIZE: usize = 4096;

	/// Default cookie name
	pub const DEFAULT_COOKIE_NAME: &'static str = "_alerts";

	pub fn new() -> Self {
		Self {
			cookie_name: Self::DEFAULT_COOKIE_NAME.to_string(),
			max_cookie_size: Self::DEFAULT_MAX_SIZE,
			value: Mutex::new(None),
		}
	}

	/// Set the cookie name
	pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
		self.cookie_name = name.into();
		self
	}

	/// Set the maximum cookie size in bytes
	pub fn with_max_size(mut self, size: usize) -> Self {
		self.max_cookie_size = size;
		self
	}

	pub fn cookie_name(&self) -> &str {
		&self.cookie_name
	}

	pub fn max_cookie_size(&self) -> usize {
		self.max_cookie_size
	}

	/// Seed the storage with the value of the incoming request cookie
	///
	/// An empty value means no messages.
	pub fn load_from_cookie(&self, cookie_data: &str) {
		let mut value = self.value.lock();
		*value = if cookie_data.is_empty() {
			None
		} else {
			Some(cookie_data.to_string())
		};
	}

	/// The value to send back, or `None` when the cookie should be deleted
	pub fn cookie_value(&self) -> Option<String> {
		self.value.lock().clone()
	}

	/// Percent-encode text for use in a cookie value
	///
	/// # Examples
	///
	/// ```
	/// use alerts_storage::CookieStorage;
	///
	/// let encoded = CookieStorage::encode_for_cookie(r#"Test with special chars: , ; \ " 100%"#);
	/// assert!(!encoded.contains(','));
	/// assert!(!encoded.contains(';'));
	/// assert!(!encoded.contains('\\'));
	/// assert!(!encoded.contains('"'));
	/// assert!(!encoded.contains(' '));
	/// ```
	pub fn encode_for_cookie(text: &str) -> String {
		utf8_percent_encode(text, COOKIE_UNSAFE).to_string()
	}

	/// Reverse [`encode_for_cookie`](CookieStorage::encode_for_cookie)
	pub fn decode_from_cookie(text: &str) -> AlertsResult<String> {
		percent_decode_str(text)
			.decode_utf8()
			.map(|decoded| decoded.into_owned())
			.map_err(|e| AlertsError::Storage(format!("cookie value is not UTF-8: {}", e)))
	}

	fn encode(messages: &[Message]) -> String {
		Self::encode_for_cookie(&encode_pairs(messages).to_string())
	}

	fn decode(cookie_data: &str) -> AlertsResult<Vec<Message>> {
		let json = Self::decode_from_cookie(cookie_data)?;
		let payload: serde_json::Value = serde_json::from_str(&json)?;
		decode_pairs(payload)
	}
}

impl Default for CookieStorage {
	fn default() -> Self {
		Self::new()
	}
}

impl Storage for CookieStorage {
	fn store(&self, messages: &MessageCollection) -> AlertsResult<()> {
		if messages.is_empty() {
			return Ok(());
		}

		let all: Vec<Message> = messages.iter().cloned().collect();
		let mut dropped = 0;
		let mut encoded = Self::encode(&all);
		while encoded.len() > self.max_cookie_size && dropped < all.len() {
			dropped += 1;
			encoded = Self::encode(&all[dropped..]);
		}

		if dropped > 0 {
			tracing::warn!(
				cookie = %self.cookie_name,
				dropped,
				max_size = self.max_cookie_size,
				"Alerts exceed the cookie size limit, dropping oldest"
			);
		}
		if dropped == all.len() {
			// Nothing fits: delete the cookie rather than echo a stale one
			*self.value.lock() = None;
			return Ok(());
		}

		*self.value.lock() = Some(encoded);
		tracing::debug!(cookie = %self.cookie_name, count = all.len() - dropped, "Stored alerts in cookie");
		Ok(())
	}

	fn retrieve(&self, messages: &mut MessageCollection) -> AlertsResult<()> {
		let Some(cookie_data) = self.value.lock().take() else {
			return Ok(());
		};

		match Self::decode(&cookie_data) {
			Ok(restored) => {
				tracing::debug!(cookie = %self.cookie_name, count = restored.len(), "Retrieved alerts from cookie");
				messages.extend(restored);
			}
			Err(e) => {
				tracing::warn!(cookie = %self.cookie_name, error = %e, "Discarding undecodable alerts cookie");
			}
		}
		Ok(())
	}
}
