//! Core types for the alerts flash message library
//!
//! This crate holds everything the renderers and storage backends build on.
//!
//! ## Features
//!
//! - **Messages**: text plus an open, strictly compared attribute map
//! - **Collections**: ordered containers with filter, pluck and render operations
//! - **Alert types**: the built-in `success`, `notice`, `warning` and `error` severities
//! - **Renderer capability**: the seam concrete output formats plug into
//!
//! ## Example
//!
//! ```rust
//! use alerts_core::{attributes, Message, MessageCollection};
//!
//! let mut messages = MessageCollection::new();
//! messages.add(Message::with_attributes("Saved", attributes! { "_type" => "success" }));
//! messages.add(Message::with_attributes("Disk full", attributes! { "_type" => "error" }));
//!
//! let errors = messages.filter(&attributes! { "_type" => "error" });
//! assert_eq!(errors.get_messages(), vec!["Disk full"]);
//! ```

pub mod alert_type;
pub mod collection;
pub mod error;
pub mod message;
pub mod renderer;
pub mod value;

pub use alert_type::{AlertType, TYPE_KEY};
pub use collection::MessageCollection;
pub use error::{AlertsError, AlertsResult};
pub use message::Message;
pub use renderer::Renderer;
pub use value::{Attributes, Value};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::alert_type::*;
	pub use crate::attributes;
	pub use crate::collection::*;
	pub use crate::error::*;
	pub use crate::message::*;
	pub use crate::renderer::*;
	pub use crate::value::*;
}
