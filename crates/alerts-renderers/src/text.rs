//! Plain text renderer

use alerts_core::{MessageCollection, Renderer, TYPE_KEY};

/// Renders one `"<Type>: <text>\n"` line per message
///
/// A message without `_type` gets an empty label (`": text\n"`).
///
/// # Examples
///
/// ```
/// use alerts_core::{attributes, Message, MessageCollection};
/// use alerts_renderers::TextRenderer;
///
/// let messages: MessageCollection = vec![
///     Message::with_attributes("You got beef?", attributes! { "_type" => "error" }),
///     Message::new("Untyped"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(messages.render_with(&TextRenderer::new()), "Error: You got beef?\n: Untyped\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
	pub fn new() -> Self {
		Self
	}
}

impl Renderer for TextRenderer {
	fn render(&self, messages: &MessageCollection) -> String {
		let mut output = String::new();
		for message in messages {
			let label = message
				.get(TYPE_KEY)
				.map(|value| capitalize(&value.to_string()))
				.unwrap_or_default();
			output.push_str(&label);
			output.push_str(": ");
			output.push_str(message.text());
			output.push('\n');
		}
		output
	}
}

fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
