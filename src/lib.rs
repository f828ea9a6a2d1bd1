//! # Alerts
//!
//! Flash messages for web applications: collect alerts while handling a
//! request, filter them by attributes, render them as text, Bootstrap markup
//! or SweetAlert script, and carry them across the next request through a
//! session or cookie.
//!
//! ## Crates
//!
//! - [`alerts_core`] - messages, collections, attribute values and the renderer seam
//! - [`alerts_renderers`] - text, Bootstrap and SweetAlert output formats
//! - [`alerts_storage`] - session and cookie flash storage
//!
//! This crate adds the [`Alerts`] facade, scoped persistence through
//! [`AlertsGuard`] and TOML [`AlertsSettings`].
//!
//! ## Quick Example
//!
//! ```rust
//! use alerts::prelude::*;
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let session = Arc::new(Mutex::new(Session::new()));
//! let storage: Arc<dyn Storage> = Arc::new(SessionStorage::new(session.clone()));
//!
//! // First request: queue an alert and redirect
//! {
//!     let mut alerts = Alerts::builder()
//!         .storage(storage.clone())
//!         .build()
//!         .unwrap()
//!         .into_scope();
//!     alerts.error("You got beef?", attributes! { "field" => "email" });
//! }
//!
//! // Next request: the alert shows up once
//! let alerts = Alerts::builder()
//!     .renderer(Arc::new(BootstrapRenderer::new()))
//!     .storage(storage)
//!     .build()
//!     .unwrap();
//! assert_eq!(
//!     alerts.to_string(),
//!     "<div class=\"alert alert-danger\">You got beef?</div>"
//! );
//! assert!(session.lock().is_empty());
//! ```

pub mod alerts;
pub mod guard;
pub mod settings;

pub use alerts::{Alerts, AlertsBuilder};
pub use guard::AlertsGuard;
pub use settings::{AlertsSettings, RendererKind};

pub use alerts_core::{
	AlertType, AlertsError, AlertsResult, Attributes, Message, MessageCollection, Renderer,
	TYPE_KEY, Value, attributes,
};
pub use alerts_renderers::{BootstrapRenderer, SweetAlertConfig, SweetAlertRenderer, TextRenderer};
pub use alerts_storage::{
	CookieStorage, DEFAULT_SESSION_KEY, Session, SessionStorage, SharedSession, Storage,
};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::alerts::{Alerts, AlertsBuilder};
	pub use crate::guard::AlertsGuard;
	pub use crate::settings::{AlertsSettings, RendererKind};
	pub use alerts_core::prelude::*;
	pub use alerts_renderers::{
		BootstrapRenderer, SweetAlertConfig, SweetAlertRenderer, TextRenderer,
	};
	pub use alerts_storage::{CookieStorage, Session, SessionStorage, SharedSession, Storage};
}
