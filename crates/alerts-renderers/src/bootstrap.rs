//! Bootstrap alert markup renderer
//!
//! See <https://getbootstrap.com/docs/5.3/components/alerts/>.

use alerts_core::{AlertType, MessageCollection, Renderer, TYPE_KEY, attributes};

/// Groups messages by type into `<div class="alert ...">` blocks
///
/// Blocks appear in the order each type first occurs. Texts inside a block
/// are joined with `<br>` and emitted verbatim. Messages whose `_type` is not
/// a built-in type are skipped.
///
/// # Examples
///
/// ```
/// use alerts_core::{attributes, Message, MessageCollection};
/// use alerts_renderers::BootstrapRenderer;
///
/// let messages: MessageCollection = vec![
///     Message::with_attributes("One", attributes! { "_type" => "error" }),
///     Message::with_attributes("Two", attributes! { "_type" => "error" }),
///     Message::with_attributes("Mine", attributes! { "_type" => "custom" }),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(
///     messages.render_with(&BootstrapRenderer::new()),
///     r#"<div class="alert alert-danger">One<br>Two</div>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapRenderer;

impl BootstrapRenderer {
	pub fn new() -> Self {
		Self
	}

	/// CSS class for a built-in alert type
	pub fn css_class(alert_type: AlertType) -> &'static str {
		match alert_type {
			AlertType::Success => "alert-success",
			AlertType::Notice => "alert-info",
			AlertType::Warning => "alert-warning",
			AlertType::Error => "alert-danger",
		}
	}
}

impl Renderer for BootstrapRenderer {
	fn render(&self, messages: &MessageCollection) -> String {
		let mut output = String::new();
		for value in messages.pluck(TYPE_KEY) {
			let Some(alert_type) = AlertType::from_value(&value) else {
				continue;
			};
			let group = messages.filter(&attributes! { TYPE_KEY => value });
			output.push_str("<div class=\"alert ");
			output.push_str(Self::css_class(alert_type));
			output.push_str("\">");
			output.push_str(&group.get_messages().join("<br>"));
			output.push_str("</div>");
		}
		output
	}
}
