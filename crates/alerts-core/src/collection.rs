//! Ordered, filterable message container

use crate::error::{AlertsError, AlertsResult};
use crate::message::Message;
use crate::renderer::Renderer;
use crate::value::{Attributes, Value};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// An ordered list of messages with filter, pluck and render operations
///
/// Insertion order is display order. Filtering never mutates the source: it
/// builds a new collection that shares the source's default renderer, so
/// several views (errors only, overlays only, ...) can be derived from one
/// list.
///
/// # Examples
///
/// ```
/// use alerts_core::{attributes, Message, MessageCollection};
///
/// let mut messages = MessageCollection::new();
/// messages.add(Message::with_attributes("A", attributes! { "_type" => "error" }));
/// messages.add(Message::with_attributes("B", attributes! { "_type" => "success" }));
///
/// let errors = messages.filter(&attributes! { "_type" => "error" });
/// assert_eq!(errors.get_messages(), vec!["A"]);
/// assert_eq!(messages.count(), 2);
/// ```
#[derive(Clone, Default)]
pub struct MessageCollection {
	messages: Vec<Message>,
	renderer: Option<Arc<dyn Renderer>>,
}

impl MessageCollection {
	/// An empty collection without a default renderer
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a collection pre-populated with `messages`
	pub fn from_messages(messages: Vec<Message>) -> Self {
		Self {
			messages,
			renderer: None,
		}
	}

	/// Attach a default renderer
	pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
		self.renderer = Some(renderer);
		self
	}

	/// The default renderer used by [`render`](Self::render), if any
	pub fn renderer(&self) -> Option<&Arc<dyn Renderer>> {
		self.renderer.as_ref()
	}

	/// Replace or remove the default renderer
	pub fn set_renderer(&mut self, renderer: Option<Arc<dyn Renderer>>) {
		self.renderer = renderer;
	}

	/// Append a message
	pub fn add(&mut self, message: Message) {
		self.messages.push(message);
	}

	/// The message at `index`
	pub fn get(&self, index: usize) -> Option<&Message> {
		self.messages.get(index)
	}

	/// Mutable access to the message at `index`
	pub fn get_mut(&mut self, index: usize) -> Option<&mut Message> {
		self.messages.get_mut(index)
	}

	/// Replace the message at `index`, returning the previous one
	///
	/// An index at or past the end appends instead.
	pub fn set(&mut self, index: usize, message: Message) -> Option<Message> {
		match self.messages.get_mut(index) {
			Some(slot) => Some(std::mem::replace(slot, message)),
			None => {
				self.messages.push(message);
				None
			}
		}
	}

	/// Place dynamic data into a slot
	///
	/// The value must describe a message (see `Message`'s `TryFrom` impl);
	/// otherwise the collection is left untouched and
	/// [`AlertsError::InvalidMessageType`] is returned.
	///
	/// # Examples
	///
	/// ```
	/// use alerts_core::{AlertsError, MessageCollection};
	/// use serde_json::json;
	///
	/// let mut messages = MessageCollection::new();
	/// messages.set_value(0, json!({ "text": "Hi" })).unwrap();
	/// assert_eq!(messages.get_messages(), vec!["Hi"]);
	///
	/// let err = messages.set_value(0, json!(42)).unwrap_err();
	/// assert!(matches!(err, AlertsError::InvalidMessageType(_)));
	/// assert_eq!(messages.get_messages(), vec!["Hi"]);
	/// ```
	pub fn set_value(
		&mut self,
		index: usize,
		value: serde_json::Value,
	) -> AlertsResult<Option<Message>> {
		let message = Message::try_from(value)?;
		Ok(self.set(index, message))
	}

	/// Remove the message at `index`; later messages shift down by one
	pub fn remove(&mut self, index: usize) -> Option<Message> {
		if index < self.messages.len() {
			Some(self.messages.remove(index))
		} else {
			None
		}
	}

	/// Whether a message is present at `index`
	pub fn contains_index(&self, index: usize) -> bool {
		index < self.messages.len()
	}

	/// Number of messages
	pub fn count(&self) -> usize {
		self.messages.len()
	}

	/// Returns true when the collection holds no messages
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	/// Remove every message, keeping the default renderer
	pub fn clear(&mut self) {
		self.messages.clear();
	}

	/// A new collection holding every message
	pub fn all(&self) -> Self {
		self.clone()
	}

	/// Messages matching every `(key, value)` of `criteria`, in order
	pub fn filter(&self, criteria: &Attributes) -> Self {
		self.filter_by(criteria, |message, criteria| message.matches_all(criteria))
	}

	/// Messages for which `predicate(message, criteria)` holds, in order
	///
	/// # Examples
	///
	/// ```
	/// use alerts_core::{attributes, Message, MessageCollection};
	///
	/// let messages: MessageCollection = vec![
	///     Message::with_attributes("A", attributes! { "overlay" => true }),
	///     Message::new("B"),
	/// ]
	/// .into_iter()
	/// .collect();
	///
	/// let has_any_key = messages.filter_by(&attributes! { "overlay" => false }, |message, criteria| {
	///     criteria.keys().any(|key| message.get(key).is_some())
	/// });
	/// assert_eq!(has_any_key.get_messages(), vec!["A"]);
	/// ```
	pub fn filter_by<F>(&self, criteria: &Attributes, predicate: F) -> Self
	where
		F: Fn(&Message, &Attributes) -> bool,
	{
		Self {
			messages: self
				.messages
				.iter()
				.filter(|message| predicate(message, criteria))
				.cloned()
				.collect(),
			renderer: self.renderer.clone(),
		}
	}

	/// The complement of [`filter`](Self::filter)
	pub fn filter_without(&self, criteria: &Attributes) -> Self {
		self.filter_by(criteria, |message, criteria| !message.matches_all(criteria))
	}

	/// Distinct values of `key`, in first-occurrence order
	///
	/// Messages without the key contribute `Value::Null`.
	///
	/// # Examples
	///
	/// ```
	/// use alerts_core::{attributes, Message, MessageCollection, Value};
	///
	/// let messages: MessageCollection = vec![
	///     Message::with_attributes("A", attributes! { "_type" => "error" }),
	///     Message::new("B"),
	///     Message::with_attributes("C", attributes! { "_type" => "error" }),
	/// ]
	/// .into_iter()
	/// .collect();
	///
	/// assert_eq!(messages.pluck("_type"), vec![Value::from("error"), Value::Null]);
	/// ```
	pub fn pluck(&self, key: &str) -> Vec<Value> {
		let mut values: Vec<Value> = Vec::new();
		for message in &self.messages {
			let value = message.get(key).cloned().unwrap_or_default();
			if !values.contains(&value) {
				values.push(value);
			}
		}
		values
	}

	/// Message texts, in order
	pub fn get_messages(&self) -> Vec<&str> {
		self.messages.iter().map(Message::text).collect()
	}

	/// JSON array of `{"text", "attributes"}` objects
	pub fn to_structured(&self) -> serde_json::Value {
		serde_json::Value::Array(self.messages.iter().map(Message::to_structured).collect())
	}

	/// Render with the default renderer
	pub fn render(&self) -> AlertsResult<String> {
		let renderer = self
			.renderer
			.as_ref()
			.ok_or(AlertsError::NoRendererConfigured)?;
		Ok(renderer.render(self))
	}

	/// Render with an explicit renderer
	pub fn render_with(&self, renderer: &dyn Renderer) -> String {
		renderer.render(self)
	}

	/// Iterate over the messages in insertion order
	pub fn iter(&self) -> std::slice::Iter<'_, Message> {
		self.messages.iter()
	}

	/// Iterate mutably over the messages in insertion order
	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Message> {
		self.messages.iter_mut()
	}

	/// Consume the collection, returning its messages
	pub fn into_messages(self) -> Vec<Message> {
		self.messages
	}
}

impl fmt::Debug for MessageCollection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MessageCollection")
			.field("messages", &self.messages)
			.field("has_renderer", &self.renderer.is_some())
			.finish()
	}
}

/// Renders with the default renderer; without one this writes nothing
impl fmt::Display for MessageCollection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.renderer {
			Some(renderer) => f.write_str(&renderer.render(self)),
			None => Ok(()),
		}
	}
}

impl Index<usize> for MessageCollection {
	type Output = Message;

	fn index(&self, index: usize) -> &Self::Output {
		&self.messages[index]
	}
}

impl FromIterator<Message> for MessageCollection {
	fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
		Self::from_messages(iter.into_iter().collect())
	}
}

impl Extend<Message> for MessageCollection {
	fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
		self.messages.extend(iter);
	}
}

impl IntoIterator for MessageCollection {
	type Item = Message;
	type IntoIter = std::vec::IntoIter<Message>;

	fn into_iter(self) -> Self::IntoIter {
		self.messages.into_iter()
	}
}

impl<'a> IntoIterator for &'a MessageCollection {
	type Item = &'a Message;
	type IntoIter = std::slice::Iter<'a, Message>;

	fn into_iter(self) -> Self::IntoIter {
		self.messages.iter()
	}
}

impl<'a> IntoIterator for &'a mut MessageCollection {
	type Item = &'a mut Message;
	type IntoIter = std::slice::IterMut<'a, Message>;

	fn into_iter(self) -> Self::IntoIter {
		self.messages.iter_mut()
	}
}
