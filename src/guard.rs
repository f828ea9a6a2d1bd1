//! Scoped persistence
//!
//! Stored alerts are written exactly once per facade lifetime, when the
//! scope that owns the facade ends. [`AlertsGuard`] ties that write to the
//! guard: [`finish`](AlertsGuard::finish) stores and reports the result,
//! and a guard dropped without finishing (early return, `?`, panic) stores
//! on drop and logs any failure.

use crate::alerts::Alerts;
use alerts_core::AlertsResult;
use std::ops::{Deref, DerefMut};

/// Owns an [`Alerts`] facade until the end of a request scope
///
/// # Examples
///
/// ```
/// use alerts::prelude::*;
/// use parking_lot::Mutex;
/// use std::sync::Arc;
///
/// let session = Arc::new(Mutex::new(Session::new()));
/// let storage: Arc<dyn Storage> = Arc::new(SessionStorage::new(session.clone()));
///
/// {
///     let mut alerts = Alerts::builder().storage(storage.clone()).build().unwrap().into_scope();
///     alerts.success("Saved!", attributes! {});
/// } // stored here
///
/// let next = Alerts::builder().storage(storage).build().unwrap();
/// assert_eq!(next.all().get_messages(), vec!["Saved!"]);
/// ```
#[must_use = "dropping the guard immediately stores the alerts"]
pub struct AlertsGuard {
	alerts: Alerts,
	finished: bool,
}

impl AlertsGuard {
	pub(crate) fn new(alerts: Alerts) -> Self {
		Self {
			alerts,
			finished: false,
		}
	}

	/// Store the alerts now and end the scope
	///
	/// Returns whether a storage backend was present.
	pub fn finish(mut self) -> AlertsResult<bool> {
		self.finished = true;
		self.alerts.store()
	}
}

impl Deref for AlertsGuard {
	type Target = Alerts;

	fn deref(&self) -> &Self::Target {
		&self.alerts
	}
}

impl DerefMut for AlertsGuard {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.alerts
	}
}

impl Drop for AlertsGuard {
	fn drop(&mut self) {
		if self.finished {
			return;
		}
		self.finished = true;
		if let Err(e) = self.alerts.store() {
			tracing::error!(error = %e, "Failed to store alerts at end of scope");
		}
	}
}
