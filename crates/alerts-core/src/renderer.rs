//! Renderer capability

use crate::collection::MessageCollection;

/// Converts a message collection into presentation output
///
/// Renderers are pure functions of their own configuration and the
/// collection contents. Any `Fn(&MessageCollection) -> String` closure is a
/// renderer.
///
/// # Examples
///
/// ```
/// use alerts_core::{Message, MessageCollection, Renderer};
///
/// let count = |messages: &MessageCollection| format!("{} alerts", messages.count());
/// let messages: MessageCollection = vec![Message::new("a"), Message::new("b")].into_iter().collect();
/// assert_eq!(messages.render_with(&count), "2 alerts");
/// ```
pub trait Renderer: Send + Sync {
	/// Render the supplied message collection
	fn render(&self, messages: &MessageCollection) -> String;
}

impl<F> Renderer for F
where
	F: Fn(&MessageCollection) -> String + Send + Sync,
{
	fn render(&self, messages: &MessageCollection) -> String {
		self(messages)
	}
}
