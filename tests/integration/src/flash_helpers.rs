//! Helpers for simulating requests that carry alerts across a redirect

use alerts::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

/// A fresh session and a storage backed by it
pub fn session_storage() -> (SharedSession, Arc<dyn Storage>) {
	let session: SharedSession = Arc::new(Mutex::new(Session::new()));
	let storage: Arc<dyn Storage> = Arc::new(SessionStorage::new(session.clone()));
	(session, storage)
}

/// Start a request: build a facade that pulls stored alerts out of `storage`
pub fn open_alerts(storage: &Arc<dyn Storage>) -> Alerts {
	match Alerts::builder().storage(storage.clone()).build() {
		Ok(alerts) => alerts,
		Err(e) => panic!("failed to open alerts: {}", e),
	}
}

/// The cookie storage the next request sees after `outgoing` was written
///
/// Returns `None` when `outgoing` has nothing to send.
pub fn next_cookie_request(outgoing: &CookieStorage) -> Option<Arc<CookieStorage>> {
	let value = outgoing.cookie_value()?;
	let incoming = CookieStorage::new()
		.with_cookie_name(outgoing.cookie_name())
		.with_max_size(outgoing.max_cookie_size());
	incoming.load_from_cookie(&value);
	Some(Arc::new(incoming))
}
