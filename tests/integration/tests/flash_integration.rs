//! Integration tests for carrying alerts across a request boundary

use alerts::DEFAULT_SESSION_KEY;
use alerts::prelude::*;
use alerts_integration_tests::flash_helpers::{
	next_cookie_request, open_alerts as open, session_storage,
};
use parking_lot::Mutex;
use rstest::rstest;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

#[rstest]
fn test_session_round_trip_is_one_shot() {
	// Arrange
	let (session, storage) = session_storage();
	{
		let mut alerts = open(&storage).into_scope();
		alerts
			.error("Bad email", attributes! { "field" => "email", "count" => 2 })
			.success("Saved", attributes! { "overlay" => true, "ratio" => 0.5, "note" => Value::Null });
	}

	// Act
	let next = open(&storage);
	let after = open(&storage);

	// Assert
	assert_eq!(
		next.to_structured(),
		serde_json::json!([
			{ "text": "Bad email", "attributes": { "field": "email", "count": 2, "_type": "error" } },
			{ "text": "Saved", "attributes": { "overlay": true, "ratio": 0.5, "note": null, "_type": "success" } },
		])
	);
	assert!(after.is_empty());
	assert!(session.lock().is_empty());
}

#[rstest]
fn test_retrieved_alerts_keep_strict_types() {
	// Arrange
	let (_session, storage) = session_storage();
	{
		let mut alerts = open(&storage).into_scope();
		alerts.add("int", attributes! { "count" => 1 });
		alerts.add("string", attributes! { "count" => "1" });
	}

	// Act
	let alerts = open(&storage);

	// Assert
	assert_eq!(alerts.filter(&attributes! { "count" => 1 }).get_messages(), vec!["int"]);
}

#[rstest]
fn test_storing_nothing_keeps_previous_slot() {
	// Arrange
	let (session, storage) = session_storage();
	let mut stored = MessageCollection::new();
	stored.add(Message::new("pending"));
	storage.store(&stored).unwrap();

	// Act
	let empty = Alerts::new();
	storage.store(empty.messages()).unwrap();

	// Assert
	assert!(!session.lock().is_empty());
	assert_eq!(open(&storage).all().get_messages(), vec!["pending"]);
}

#[rstest]
fn test_session_survives_serialization() {
	// Arrange
	let (session, storage) = session_storage();
	{
		let mut alerts = open(&storage).into_scope();
		alerts.notice("persisted", attributes! { "id" => 7 });
	}
	let json = session.lock().to_json().unwrap();

	// Act
	let restored: SharedSession = Arc::new(Mutex::new(Session::from_json(&json).unwrap()));
	let storage: Arc<dyn Storage> = Arc::new(SessionStorage::new(restored));
	let alerts = open(&storage);

	// Assert
	let notices = alerts.notices(attributes! { "id" => 7 });
	assert_eq!(notices.get_messages(), vec!["persisted"]);
}

#[rstest]
fn test_custom_session_key() {
	let session = Arc::new(Mutex::new(Session::new()));
	let storage: Arc<dyn Storage> =
		Arc::new(SessionStorage::new(session.clone()).with_key("flash"));
	{
		let mut alerts = open(&storage).into_scope();
		alerts.warning("keyed", attributes! {});
	}

	assert!(session.lock().contains_key("flash"));
	assert!(!session.lock().contains_key(DEFAULT_SESSION_KEY));
}

#[rstest]
fn test_panicking_scope_still_stores() {
	// Arrange
	let (_session, storage) = session_storage();

	// Act
	let result = catch_unwind(AssertUnwindSafe(|| {
		let mut alerts = open(&storage).into_scope();
		alerts.error("Something broke", attributes! {});
		panic!("handler failed");
	}));

	// Assert
	assert!(result.is_err());
	assert_eq!(open(&storage).errors(attributes! {}).get_messages(), vec!["Something broke"]);
}

#[rstest]
fn test_finish_stores_exactly_once() {
	// Arrange
	let (_session, storage) = session_storage();
	let mut alerts = open(&storage).into_scope();
	alerts.success("Once", attributes! {});

	// Act
	assert!(alerts.finish().unwrap());

	// Assert
	assert_eq!(open(&storage).all().get_messages(), vec!["Once"]);
}

#[rstest]
fn test_cookie_round_trip() {
	// Arrange
	let cookie = Arc::new(CookieStorage::new());
	let storage: Arc<dyn Storage> = cookie.clone();
	{
		let mut alerts = open(&storage).into_scope();
		alerts.success("Saved; with \"quotes\", commas", attributes! { "id" => 3 });
	}
	let value = cookie.cookie_value().unwrap();
	assert!(!value.contains(';'));
	assert!(!value.contains(','));

	// Act
	let incoming = next_cookie_request(&cookie).unwrap();
	let storage: Arc<dyn Storage> = incoming.clone();
	let alerts = open(&storage);

	// Assert
	assert_eq!(
		alerts.successes(attributes! { "id" => 3 }).get_messages(),
		vec!["Saved; with \"quotes\", commas"]
	);
	assert!(incoming.cookie_value().is_none());
}

#[rstest]
fn test_cookie_drops_oldest_to_fit() {
	// Arrange
	let cookie = Arc::new(CookieStorage::new().with_max_size(150));
	let storage: Arc<dyn Storage> = cookie.clone();
	{
		let mut alerts = open(&storage).into_scope();
		for i in 0..10 {
			alerts.notice(format!("Long message number {}", i), attributes! {});
		}
	}

	// Act
	let value = cookie.cookie_value().unwrap();
	let storage: Arc<dyn Storage> = next_cookie_request(&cookie).unwrap();
	let alerts = open(&storage);

	// Assert
	assert!(value.len() <= 150);
	assert!(alerts.count() < 10);
	let all = alerts.all();
	assert_eq!(all.get_messages().last(), Some(&"Long message number 9"));
}

#[rstest]
fn test_cookie_too_small_for_any_alert_sends_nothing() {
	// Arrange
	let cookie = Arc::new(CookieStorage::new().with_max_size(8));
	cookie.load_from_cookie(&CookieStorage::encode_for_cookie(r#"[["stale",{}]]"#));
	let outgoing: MessageCollection = vec![Message::new("far too long for eight bytes")]
		.into_iter()
		.collect();

	// Act
	cookie.store(&outgoing).unwrap();

	// Assert
	assert!(next_cookie_request(&cookie).is_none());
}

#[rstest]
fn test_bad_cookie_yields_no_alerts() {
	let cookie = Arc::new(CookieStorage::new());
	cookie.load_from_cookie("invalid{json}data");
	let storage: Arc<dyn Storage> = cookie;

	assert!(open(&storage).is_empty());
}
