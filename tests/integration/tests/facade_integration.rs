//! Integration tests for the alerts facade

use ::alerts::prelude::*;
use parking_lot::Mutex;
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn alerts() -> Alerts {
	let mut alerts = Alerts::builder()
		.renderer(Arc::new(TextRenderer::new()))
		.build()
		.unwrap();
	alerts.add("A", attributes! { "_type" => "error" });
	alerts.add("B", attributes! { "_type" => "success" });
	alerts
}

#[rstest]
fn test_typed_queries(alerts: Alerts) {
	// Act
	let errors = alerts.errors(attributes! {});
	let successes = alerts.successes(attributes! {});

	// Assert
	assert_eq!(errors.get_messages(), vec!["A"]);
	assert_eq!(successes.get_messages(), vec!["B"]);
	assert_eq!(alerts.count(), 2);
}

#[rstest]
fn test_convenience_type_overrides_caller_type() {
	// Arrange
	let mut alerts = Alerts::new();

	// Act
	alerts.warning("careful", attributes! { "_type" => "success", "field" => "name" });

	// Assert
	let all = alerts.all();
	let message = &all[0];
	assert_eq!(message.alert_type(), Some(AlertType::Warning));
	assert_eq!(message.get("field"), Some(&Value::from("name")));
	assert!(alerts.successes(attributes! {}).is_empty());
}

#[rstest]
fn test_typed_query_forces_type(alerts: Alerts) {
	let errors = alerts.errors(attributes! { "_type" => "success" });
	assert_eq!(errors.get_messages(), vec!["A"]);
}

#[rstest]
fn test_filter_and_filter_without_partition(mut alerts: Alerts) {
	// Arrange
	alerts.error("C", attributes! { "overlay" => true });
	let criteria = attributes! { "_type" => "error" };

	// Act
	let kept = alerts.filter(&criteria);
	let rest = alerts.filter_without(&criteria);

	// Assert
	assert_eq!(kept.get_messages(), vec!["A", "C"]);
	assert_eq!(rest.get_messages(), vec!["B"]);
	assert_eq!(kept.count() + rest.count(), alerts.count());
}

#[rstest]
fn test_strict_equality_in_filters() {
	let mut alerts = Alerts::new();
	alerts.add("string", attributes! { "count" => "1" });
	alerts.add("int", attributes! { "count" => 1 });

	assert_eq!(alerts.filter(&attributes! { "count" => 1 }).get_messages(), vec!["int"]);
	assert_eq!(
		alerts.filter_without(&attributes! { "count" => 1 }).get_messages(),
		vec!["string"]
	);
}

#[rstest]
fn test_render_filtered_subset(alerts: Alerts) {
	// Act
	let output = alerts
		.render(None, &attributes! { "_type" => "success" })
		.unwrap();

	// Assert
	assert_eq!(output, "Success: B\n");
}

#[rstest]
fn test_render_with_explicit_renderer(alerts: Alerts) {
	let output = alerts
		.render(Some(&BootstrapRenderer::new()), &attributes! {})
		.unwrap();

	assert_eq!(
		output,
		"<div class=\"alert alert-danger\">A</div><div class=\"alert alert-success\">B</div>"
	);
}

#[rstest]
fn test_render_without_renderer_fails() {
	// Arrange
	let mut alerts = Alerts::new();
	alerts.notice("hello", attributes! {});

	// Act
	let result = alerts.render(None, &attributes! {});

	// Assert
	assert!(matches!(result, Err(AlertsError::NoRendererConfigured)));
	assert_eq!(alerts.to_string(), "");
}

#[rstest]
fn test_empty_text_render_is_empty() {
	let alerts = Alerts::builder()
		.renderer(Arc::new(TextRenderer::new()))
		.build()
		.unwrap();

	assert_eq!(alerts.render(None, &attributes! {}).unwrap(), "");
}

#[rstest]
fn test_bootstrap_skips_custom_type() {
	let mut alerts = Alerts::builder()
		.renderer(Arc::new(BootstrapRenderer::new()))
		.build()
		.unwrap();
	alerts.add("mystery", attributes! { "_type" => "custom" });

	assert_eq!(alerts.to_string(), "");
	assert_eq!(alerts.count(), 1);
}

#[rstest]
fn test_closure_renderer() {
	// Arrange
	let renderer: Arc<dyn Renderer> = Arc::new(|messages: &MessageCollection| {
		messages.get_messages().join(" | ")
	});
	let mut alerts = Alerts::builder().renderer(renderer).build().unwrap();

	// Act
	alerts.notice("one", attributes! {}).notice("two", attributes! {});

	// Assert
	assert_eq!(alerts.to_string(), "one | two");
}

#[rstest]
fn test_set_renderer_syncs_collection(mut alerts: Alerts) {
	alerts.set_renderer(Arc::new(BootstrapRenderer::new()));

	let errors = alerts.errors(attributes! {});
	assert_eq!(errors.render().unwrap(), "<div class=\"alert alert-danger\">A</div>");
}

#[rstest]
fn test_to_structured(alerts: Alerts) {
	assert_eq!(
		alerts.to_structured(),
		serde_json::json!([
			{ "text": "A", "attributes": { "_type": "error" } },
			{ "text": "B", "attributes": { "_type": "success" } },
		])
	);
}

#[rstest]
fn test_iteration_order(alerts: Alerts) {
	let texts: Vec<&str> = (&alerts).into_iter().map(Message::text).collect();
	assert_eq!(texts, vec!["A", "B"]);
}

#[rstest]
fn test_set_storage_resets_and_reloads(mut alerts: Alerts) {
	// Arrange
	let session = Arc::new(Mutex::new(Session::new()));
	let storage = SessionStorage::new(session.clone());
	let mut stored = MessageCollection::new();
	stored.add(Message::with_attributes("from last request", attributes! { "_type" => "notice" }));
	storage.store(&stored).unwrap();

	// Act
	alerts.set_storage(Arc::new(storage)).unwrap();

	// Assert
	assert_eq!(alerts.all().get_messages(), vec!["from last request"]);
	assert!(session.lock().is_empty());
}

#[rstest]
fn test_clear(mut alerts: Alerts) {
	alerts.clear();
	assert!(alerts.is_empty());
	assert_eq!(alerts.to_string(), "");
}
