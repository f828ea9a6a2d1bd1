//! Integration tests for settings-driven construction

use alerts::prelude::*;
use parking_lot::Mutex;
use rstest::rstest;
use std::sync::Arc;

const SETTINGS: &str = r#"
session_key = "flash"
renderer = "sweet_alert"

[sweet_alert]
wrapOutput = false
buttonText = "Got it"
errorTitle = "Oh no"
"#;

#[rstest]
fn test_builder_uses_configured_renderer_and_storage() {
	// Arrange
	let settings = AlertsSettings::from_toml_str(SETTINGS).unwrap();
	let session = Arc::new(Mutex::new(Session::new()));
	let storage: Arc<dyn Storage> = Arc::new(settings.session_storage(session.clone()));

	// Act
	{
		let mut alerts = Alerts::builder()
			.settings(&settings)
			.storage(storage.clone())
			.build()
			.unwrap()
			.into_scope();
		alerts.error("Broken", attributes! {});
	}
	let alerts = Alerts::builder()
		.settings(&settings)
		.storage(storage)
		.build()
		.unwrap();

	// Assert
	assert!(session.lock().is_empty());
	assert_eq!(
		alerts.to_string(),
		"swal({\"title\":\"Oh no\",\"text\":\"Broken\",\"type\":\"error\",\"confirmButtonText\":\"Got it\",\"html\":false});\n"
	);
}

#[rstest]
fn test_settings_without_renderer_leave_builder_renderer() {
	let settings = AlertsSettings::default();
	let mut alerts = Alerts::builder()
		.renderer(Arc::new(TextRenderer::new()))
		.settings(&settings)
		.build()
		.unwrap();
	alerts.notice("kept", attributes! {});

	assert_eq!(alerts.to_string(), "Notice: kept\n");
}

#[rstest]
fn test_unknown_renderer_is_a_settings_error() {
	let result = AlertsSettings::from_toml_str("renderer = 42");
	assert!(matches!(result, Err(AlertsError::Settings(_))));
}
