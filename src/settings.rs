//! Alerts settings
//!
//! ```toml
//! session_key = "_alerts"
//! renderer = "sweet_alert"
//!
//! [sweet_alert]
//! buttonText = "Got it"
//! wrapOutput = true
//! ```

use alerts_core::{AlertsError, AlertsResult, Renderer};
use alerts_renderers::{BootstrapRenderer, SweetAlertConfig, SweetAlertRenderer, TextRenderer};
use alerts_storage::{DEFAULT_SESSION_KEY, SessionStorage, SharedSession};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which built-in renderer the facade uses by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
	#[default]
	None,
	Text,
	Bootstrap,
	SweetAlert,
}

/// Alerts configuration
///
/// # Examples
///
/// ```
/// use alerts::settings::{AlertsSettings, RendererKind};
///
/// let settings = AlertsSettings::from_toml_str("renderer = \"bootstrap\"").unwrap();
/// assert_eq!(settings.renderer, RendererKind::Bootstrap);
/// assert_eq!(settings.session_key, "_alerts");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsSettings {
	/// Session slot used by [`session_storage`](AlertsSettings::session_storage)
	pub session_key: String,
	pub renderer: RendererKind,
	/// Options for the SweetAlert renderer
	pub sweet_alert: SweetAlertConfig,
}

impl Default for AlertsSettings {
	fn default() -> Self {
		Self {
			session_key: DEFAULT_SESSION_KEY.to_string(),
			renderer: RendererKind::None,
			sweet_alert: SweetAlertConfig::default(),
		}
	}
}

impl AlertsSettings {
	/// Parse settings from TOML
	pub fn from_toml_str(toml: &str) -> AlertsResult<Self> {
		toml::from_str(toml).map_err(|e| AlertsError::Settings(e.to_string()))
	}

	/// Build the configured renderer
	pub fn renderer(&self) -> Option<Arc<dyn Renderer>> {
		match self.renderer {
			RendererKind::None => None,
			RendererKind::Text => Some(Arc::new(TextRenderer::new())),
			RendererKind::Bootstrap => Some(Arc::new(BootstrapRenderer::new())),
			RendererKind::SweetAlert => Some(Arc::new(SweetAlertRenderer::with_config(
				self.sweet_alert.clone(),
			))),
		}
	}

	/// Session storage on the configured slot
	pub fn session_storage(&self, session: SharedSession) -> SessionStorage {
		SessionStorage::new(session).with_key(self.session_key.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alerts_core::{Message, MessageCollection, attributes};
	use alerts_storage::Session;
	use parking_lot::Mutex;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = AlertsSettings::from_toml_str("").unwrap();
		assert_eq!(settings, AlertsSettings::default());
		assert!(settings.renderer().is_none());
	}

	#[rstest]
	fn test_full_settings() {
		let settings = AlertsSettings::from_toml_str(
			r#"
session_key = "flash"
renderer = "sweet_alert"

[sweet_alert]
wrapOutput = false
successTitle = "Done"
"#,
		)
		.unwrap();

		assert_eq!(settings.session_key, "flash");
		assert_eq!(settings.renderer, RendererKind::SweetAlert);

		let renderer = settings.renderer().unwrap();
		let messages: MessageCollection =
			vec![Message::with_attributes("ok", attributes! { "_type" => "success" })]
				.into_iter()
				.collect();
		let output = messages.render_with(renderer.as_ref());
		assert!(output.starts_with("swal({\"title\":\"Done\""));
	}

	#[rstest]
	#[case("text", "Success: ok\n")]
	#[case("bootstrap", "<div class=\"alert alert-success\">ok</div>")]
	fn test_renderer_kinds(#[case] kind: &str, #[case] expected: &str) {
		let settings = AlertsSettings::from_toml_str(&format!("renderer = \"{}\"", kind)).unwrap();
		let messages: MessageCollection =
			vec![Message::with_attributes("ok", attributes! { "_type" => "success" })]
				.into_iter()
				.collect();
		assert_eq!(messages.render_with(settings.renderer().unwrap().as_ref()), expected);
	}

	#[rstest]
	fn test_invalid_settings() {
		let result = AlertsSettings::from_toml_str("renderer = \"markdown\"");
		assert!(matches!(result, Err(AlertsError::Settings(_))));
	}

	#[rstest]
	fn test_session_storage_uses_configured_key() {
		let settings = AlertsSettings::from_toml_str("session_key = \"flash\"").unwrap();
		let storage = settings.session_storage(Arc::new(Mutex::new(Session::new())));
		assert_eq!(storage.key(), "flash");
	}
}
