//! Flash storage backends for the alerts flash message library
//!
//! A storage backend carries a message collection across one request
//! boundary: `store` at the end of a request, `retrieve` at the start of the
//! next. Retrieval consumes what it reads.
//!
//! - [`SessionStorage`]: a named slot in a key/value [`Session`]
//! - [`CookieStorage`]: a size-limited, RFC 6265 safe cookie value
//!
//! ## Example
//!
//! ```rust
//! use alerts_core::{Message, MessageCollection};
//! use alerts_storage::{Session, SessionStorage, Storage};
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let session = Arc::new(Mutex::new(Session::new()));
//! let storage = SessionStorage::new(session.clone());
//!
//! let mut outgoing = MessageCollection::new();
//! outgoing.add(Message::new("Saved!"));
//! storage.store(&outgoing).unwrap();
//!
//! let mut incoming = MessageCollection::new();
//! storage.retrieve(&mut incoming).unwrap();
//! assert_eq!(incoming.get_messages(), vec!["Saved!"]);
//! assert!(session.lock().is_empty());
//! ```

pub mod codec;
pub mod cookie;
pub mod session;

use alerts_core::{AlertsResult, MessageCollection};

/// Persists and restores a message collection
pub trait Storage: Send + Sync {
	/// Store the message collection
	fn store(&self, messages: &MessageCollection) -> AlertsResult<()>;

	/// Append previously stored messages to `messages` and forget them
	fn retrieve(&self, messages: &mut MessageCollection) -> AlertsResult<()>;
}

pub use cookie::CookieStorage;
pub use session::{DEFAULT_SESSION_KEY, Session, SessionStorage, SharedSession};
