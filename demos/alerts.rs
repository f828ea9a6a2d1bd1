//! Walk through the alerts facade
//!
//! Run with `RUST_LOG=debug cargo run --example alerts` to see storage logs.

use alerts::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> AlertsResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let session = Arc::new(Mutex::new(Session::new()));
	let storage: Arc<dyn Storage> = Arc::new(SessionStorage::new(session.clone()));

	let mut alerts = Alerts::builder()
		.renderer(Arc::new(TextRenderer::new()))
		.storage(storage.clone())
		.build()?
		.into_scope();

	// A plain error, rendered with the default text renderer
	alerts.error("You got beef?", attributes! {});
	print!("{}", *alerts);

	// Extra data is available for filtering and to renderers
	alerts.success(
		"Congratulations, you win!",
		attributes! { "overlay" => true, "title" => "Winner!", "buttonText" => "OH YEAH!" },
	);
	alerts.warning("Example warning", attributes! { "somekey" => "anything" });

	// Same as calling error()
	alerts.add(
		"So many things going wrong today",
		attributes! { TYPE_KEY => AlertType::Error },
	);

	// Custom categories are kept but skipped by the built-in renderers
	alerts.add("Oh no - not another problem?", attributes! { TYPE_KEY => "My Type" });

	alerts.set_renderer(Arc::new(BootstrapRenderer::new()));

	let messages = alerts.filter_without(&attributes! { "overlay" => true });
	println!("{}", messages);

	let overlays = alerts.filter(&attributes! { "overlay" => true });
	print!("{}", overlays.render_with(&SweetAlertRenderer::new()));
	print!("{}", overlays.render_with(&TextRenderer::new()));

	match serde_json::to_string_pretty(&overlays.to_structured()) {
		Ok(json) => println!("{}", json),
		Err(e) => tracing::error!(error = %e, "Failed to encode alerts"),
	}

	// Persist for the next request
	alerts.finish()?;

	let next = Alerts::builder().storage(storage).build()?;
	println!("Carried over {} alerts", next.count());
	Ok(())
}
