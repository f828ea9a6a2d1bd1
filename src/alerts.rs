//! The alerts facade

use crate::guard::AlertsGuard;
use crate::settings::AlertsSettings;
use alerts_core::{
	AlertType, AlertsError, AlertsResult, Attributes, Message, MessageCollection, Renderer, TYPE_KEY,
};
use alerts_storage::Storage;
use std::fmt;
use std::sync::Arc;

/// Collects, filters, renders and persists alerts for one request
///
/// The facade owns its [`MessageCollection`] and shares its renderer and
/// storage with the caller. The collection's default renderer always follows
/// the facade's.
///
/// # Examples
///
/// ```
/// use alerts::prelude::*;
/// use std::sync::Arc;
///
/// let mut alerts = Alerts::builder()
///     .renderer(Arc::new(TextRenderer::new()))
///     .build()
///     .unwrap();
///
/// alerts.error("You got beef?", attributes! {});
/// alerts.success("Congratulations, you win!", attributes! { "overlay" => true });
///
/// assert_eq!(alerts.count(), 2);
/// assert_eq!(alerts.errors(attributes! {}).get_messages(), vec!["You got beef?"]);
/// assert_eq!(alerts.to_string(), "Error: You got beef?\nSuccess: Congratulations, you win!\n");
/// ```
#[derive(Default)]
pub struct Alerts {
	messages: MessageCollection,
	renderer: Option<Arc<dyn Renderer>>,
	storage: Option<Arc<dyn Storage>>,
}

impl Alerts {
	/// An empty facade with no renderer and no storage
	pub fn new() -> Self {
		Self::default()
	}

	pub fn builder() -> AlertsBuilder {
		AlertsBuilder::default()
	}

	pub fn renderer(&self) -> Option<&Arc<dyn Renderer>> {
		self.renderer.as_ref()
	}

	/// Set the default renderer for the facade and its collection
	pub fn set_renderer(&mut self, renderer: Arc<dyn Renderer>) {
		self.messages.set_renderer(Some(renderer.clone()));
		self.renderer = Some(renderer);
	}

	pub fn storage(&self) -> Option<&Arc<dyn Storage>> {
		self.storage.as_ref()
	}

	/// Switch to a different storage backend
	///
	/// This is a full reset: every current message is discarded, then the new
	/// storage is asked for its stored messages.
	pub fn set_storage(&mut self, storage: Arc<dyn Storage>) -> AlertsResult<()> {
		self.storage = Some(storage);
		self.clear();
		self.retrieve()?;
		tracing::debug!(count = self.count(), "Alerts storage replaced");
		Ok(())
	}

	/// Add a message with arbitrary attributes
	pub fn add(&mut self, text: impl Into<String>, attributes: Attributes) -> &mut Self {
		self.add_message(Message::with_attributes(text, attributes))
	}

	pub fn add_message(&mut self, message: Message) -> &mut Self {
		self.messages.add(message);
		self
	}

	/// Add a message of a built-in type; the type wins over any `_type` in `attributes`
	pub fn add_typed(
		&mut self,
		alert_type: AlertType,
		text: impl Into<String>,
		mut attributes: Attributes,
	) -> &mut Self {
		attributes.insert(TYPE_KEY.to_string(), alert_type.into());
		self.add(text, attributes)
	}

	pub fn success(&mut self, text: impl Into<String>, attributes: Attributes) -> &mut Self {
		self.add_typed(AlertType::Success, text, attributes)
	}

	pub fn notice(&mut self, text: impl Into<String>, attributes: Attributes) -> &mut Self {
		self.add_typed(AlertType::Notice, text, attributes)
	}

	pub fn warning(&mut self, text: impl Into<String>, attributes: Attributes) -> &mut Self {
		self.add_typed(AlertType::Warning, text, attributes)
	}

	pub fn error(&mut self, text: impl Into<String>, attributes: Attributes) -> &mut Self {
		self.add_typed(AlertType::Error, text, attributes)
	}

	/// Messages of a built-in type that also match `criteria`
	///
	/// A `_type` entry in `criteria` is overwritten by `alert_type`.
	pub fn of_type(&self, alert_type: AlertType, mut criteria: Attributes) -> MessageCollection {
		criteria.insert(TYPE_KEY.to_string(), alert_type.into());
		self.filter(&criteria)
	}

	pub fn successes(&self, criteria: Attributes) -> MessageCollection {
		self.of_type(AlertType::Success, criteria)
	}

	pub fn notices(&self, criteria: Attributes) -> MessageCollection {
		self.of_type(AlertType::Notice, criteria)
	}

	pub fn warnings(&self, criteria: Attributes) -> MessageCollection {
		self.of_type(AlertType::Warning, criteria)
	}

	pub fn errors(&self, criteria: Attributes) -> MessageCollection {
		self.of_type(AlertType::Error, criteria)
	}

	/// A new collection holding every message
	pub fn all(&self) -> MessageCollection {
		self.messages.all()
	}

	/// Borrow the underlying collection
	pub fn messages(&self) -> &MessageCollection {
		&self.messages
	}

	pub fn filter(&self, criteria: &Attributes) -> MessageCollection {
		self.messages.filter(criteria)
	}

	pub fn filter_without(&self, criteria: &Attributes) -> MessageCollection {
		self.messages.filter_without(criteria)
	}

	pub fn count(&self) -> usize {
		self.messages.count()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Message> {
		self.messages.iter()
	}

	/// JSON array of `{"text", "attributes"}` objects
	pub fn to_structured(&self) -> serde_json::Value {
		self.messages.to_structured()
	}

	/// Render the alerts
	///
	/// Uses `renderer` when given, else the default renderer. Non-empty
	/// `criteria` restrict the output to matching messages.
	///
	/// # Errors
	///
	/// [`AlertsError::NoRendererConfigured`] when no renderer is available.
	pub fn render(
		&self,
		renderer: Option<&dyn Renderer>,
		criteria: &Attributes,
	) -> AlertsResult<String> {
		let renderer: &dyn Renderer = match renderer {
			Some(renderer) => renderer,
			None => self
				.renderer
				.as_deref()
				.ok_or(AlertsError::NoRendererConfigured)?,
		};

		let messages = if criteria.is_empty() {
			self.all()
		} else {
			self.filter(criteria)
		};
		Ok(messages.render_with(renderer))
	}

	/// Persist the current messages
	///
	/// Returns `false` when there is no storage. Storing twice re-stores
	/// whatever is present at each call.
	pub fn store(&self) -> AlertsResult<bool> {
		match &self.storage {
			Some(storage) => {
				storage.store(&self.messages)?;
				tracing::debug!(count = self.count(), "Stored alerts");
				Ok(true)
			}
			None => Ok(false),
		}
	}

	/// Append previously stored messages
	///
	/// Returns `false` when there is no storage.
	pub fn retrieve(&mut self) -> AlertsResult<bool> {
		match &self.storage {
			Some(storage) => {
				storage.retrieve(&mut self.messages)?;
				tracing::debug!(count = self.messages.count(), "Retrieved alerts");
				Ok(true)
			}
			None => Ok(false),
		}
	}

	pub fn clear(&mut self) {
		self.messages.clear();
	}

	/// Hand the facade to a guard that stores it exactly once when the scope ends
	pub fn into_scope(self) -> AlertsGuard {
		AlertsGuard::new(self)
	}
}

impl fmt::Debug for Alerts {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Alerts")
			.field("messages", &self.messages)
			.field("has_renderer", &self.renderer.is_some())
			.field("has_storage", &self.storage.is_some())
			.finish()
	}
}

/// Renders with the default renderer, or writes nothing when none is set
impl fmt::Display for Alerts {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.messages, f)
	}
}

impl<'a> IntoIterator for &'a Alerts {
	type Item = &'a Message;
	type IntoIter = std::slice::Iter<'a, Message>;

	fn into_iter(self) -> Self::IntoIter {
		self.messages.iter()
	}
}

/// Builder for [`Alerts`]
///
/// # Examples
///
/// ```
/// use alerts::prelude::*;
/// use parking_lot::Mutex;
/// use std::sync::Arc;
///
/// let session = Arc::new(Mutex::new(Session::new()));
/// let alerts = Alerts::builder()
///     .renderer(Arc::new(BootstrapRenderer::new()))
///     .storage(Arc::new(SessionStorage::new(session)))
///     .build()
///     .unwrap();
/// assert!(alerts.is_empty());
/// ```
#[derive(Default)]
pub struct AlertsBuilder {
	renderer: Option<Arc<dyn Renderer>>,
	storage: Option<Arc<dyn Storage>>,
}

impl AlertsBuilder {
	pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
		self.renderer = Some(renderer);
		self
	}

	pub fn storage(mut self, storage: Arc<dyn Storage>) -> Self {
		self.storage = Some(storage);
		self
	}

	/// Apply the renderer configured in `settings`, if any
	pub fn settings(mut self, settings: &AlertsSettings) -> Self {
		if let Some(renderer) = settings.renderer() {
			self.renderer = Some(renderer);
		}
		self
	}

	/// Build the facade, pulling any stored messages out of the storage
	pub fn build(self) -> AlertsResult<Alerts> {
		let mut alerts = Alerts {
			messages: MessageCollection::new(),
			renderer: None,
			storage: self.storage,
		};
		if let Some(renderer) = self.renderer {
			alerts.set_renderer(renderer);
		}
		alerts.retrieve()?;
		Ok(alerts)
	}
}
