//! SweetAlert popup script renderer
//!
//! Emits one `swal({...});` call per message. See <https://sweetalert.js.org/>.

use alerts_core::{AlertType, AlertsResult, Message, MessageCollection, Renderer, Value};
use serde::{Deserialize, Serialize};

/// Options recognised by [`SweetAlertRenderer`]
///
/// Deserializes from a camelCase object; missing options keep their defaults
/// and unknown options are ignored.
///
/// # Examples
///
/// ```
/// use alerts_renderers::SweetAlertConfig;
///
/// let config = SweetAlertConfig::from_json(r#"{"buttonText": "Got it", "wrapOutput": false}"#).unwrap();
/// assert_eq!(config.button_text, "Got it");
/// assert!(!config.wrap_output);
/// assert_eq!(config.error_title, "Error!");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SweetAlertConfig {
	/// Wrap the calls in a `<script>` element
	pub wrap_output: bool,
	/// Default confirm button label
	pub button_text: String,
	pub success_title: String,
	pub warning_title: String,
	pub notice_title: String,
	pub error_title: String,
}

impl Default for SweetAlertConfig {
	fn default() -> Self {
		Self {
			wrap_output: true,
			button_text: "OK".to_string(),
			success_title: "Success!".to_string(),
			warning_title: "Warning".to_string(),
			notice_title: "Notice".to_string(),
			error_title: "Error!".to_string(),
		}
	}
}

impl SweetAlertConfig {
	/// Parse options from a JSON object
	pub fn from_json(json: &str) -> AlertsResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Default title for a built-in type
	pub fn title(&self, alert_type: AlertType) -> &str {
		match alert_type {
			AlertType::Success => &self.success_title,
			AlertType::Notice => &self.notice_title,
			AlertType::Warning => &self.warning_title,
			AlertType::Error => &self.error_title,
		}
	}
}

/// Arguments of a single `swal()` call, in the order the script expects them
#[derive(Serialize)]
struct SwalOptions<'a> {
	title: &'a Value,
	text: &'a str,
	#[serde(rename = "type")]
	kind: &'static str,
	#[serde(rename = "confirmButtonText")]
	confirm_button_text: &'a Value,
	html: &'a Value,
}

/// Renders messages as SweetAlert popups
///
/// Each message may override `title`, `buttonText` and `html` through its
/// attributes. Messages whose `_type` is not a built-in type produce no call.
///
/// # Examples
///
/// ```
/// use alerts_core::{attributes, Message, MessageCollection};
/// use alerts_renderers::{SweetAlertConfig, SweetAlertRenderer};
///
/// let renderer = SweetAlertRenderer::with_config(SweetAlertConfig {
///     wrap_output: false,
///     ..SweetAlertConfig::default()
/// });
/// let messages: MessageCollection =
///     vec![Message::with_attributes("Congratulations, you win!", attributes! { "_type" => "success", "title" => "Winner!" })]
///         .into_iter()
///         .collect();
///
/// assert_eq!(
///     messages.render_with(&renderer),
///     "swal({\"title\":\"Winner!\",\"text\":\"Congratulations, you win!\",\"type\":\"success\",\"confirmButtonText\":\"OK\",\"html\":false});\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SweetAlertRenderer {
	config: SweetAlertConfig,
}

impl SweetAlertRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: SweetAlertConfig) -> Self {
		Self { config }
	}

	/// Build a renderer from a JSON options object
	pub fn from_json(json: &str) -> AlertsResult<Self> {
		Ok(Self::with_config(SweetAlertConfig::from_json(json)?))
	}

	pub fn config(&self) -> &SweetAlertConfig {
		&self.config
	}

	/// The severity tag SweetAlert uses for each built-in type
	pub fn severity_tag(alert_type: AlertType) -> &'static str {
		match alert_type {
			AlertType::Success => "success",
			AlertType::Notice => "info",
			AlertType::Warning => "warning",
			AlertType::Error => "error",
		}
	}

	fn render_message(&self, message: &Message, alert_type: AlertType) -> Option<String> {
		let default_title = Value::from(self.config.title(alert_type));
		let default_button = Value::from(self.config.button_text.as_str());
		let default_html = Value::Bool(false);

		let options = SwalOptions {
			title: message_option(message, "title", &default_title),
			text: message.text(),
			kind: Self::severity_tag(alert_type),
			confirm_button_text: message_option(message, "buttonText", &default_button),
			html: message_option(message, "html", &default_html),
		};

		match serde_json::to_string(&options) {
			Ok(json) => Some(format!("swal({});\n", escape_slashes(&json))),
			Err(e) => {
				tracing::warn!(error = %e, "Failed to encode SweetAlert options, skipping message");
				None
			}
		}
	}
}

/// A message-level option; a missing or null attribute falls back to `default`
fn message_option<'a>(message: &'a Message, key: &str, default: &'a Value) -> &'a Value {
	message
		.get(key)
		.filter(|value| !value.is_null())
		.unwrap_or(default)
}

/// Escape `/` as `\/` so text can never close the surrounding `<script>`
///
/// `\/` is a valid JSON escape, and `/` only occurs inside strings.
fn escape_slashes(json: &str) -> String {
	json.replace('/', "\\/")
}

impl Renderer for SweetAlertRenderer {
	fn render(&self, messages: &MessageCollection) -> String {
		let mut output = String::new();
		if messages.is_empty() {
			return output;
		}

		if self.config.wrap_output {
			output.push_str("<script type=\"text/javascript\">\n");
		}

		for message in messages {
			let Some(alert_type) = message.alert_type() else {
				continue;
			};
			if let Some(call) = self.render_message(message, alert_type) {
				output.push_str(&call);
			}
		}

		if self.config.wrap_output {
			output.push_str("</script>\n");
		}

		output
	}
}
