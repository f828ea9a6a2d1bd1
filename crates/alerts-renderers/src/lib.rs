//! Output renderers for the alerts flash message library
//!
//! Every renderer implements [`alerts_core::Renderer`] and is a pure function
//! of its configuration and the collection it is given.
//!
//! - [`TextRenderer`]: `"Type: text"` lines
//! - [`BootstrapRenderer`]: Bootstrap alert markup grouped by type
//! - [`SweetAlertRenderer`]: client-side SweetAlert popup calls
//!
//! ## Example
//!
//! ```rust
//! use alerts_core::{attributes, Message, MessageCollection};
//! use alerts_renderers::{BootstrapRenderer, TextRenderer};
//!
//! let messages: MessageCollection =
//!     vec![Message::with_attributes("Saved", attributes! { "_type" => "success" })]
//!         .into_iter()
//!         .collect();
//!
//! assert_eq!(messages.render_with(&TextRenderer::new()), "Success: Saved\n");
//! assert_eq!(
//!     messages.render_with(&BootstrapRenderer::new()),
//!     r#"<div class="alert alert-success">Saved</div>"#
//! );
//! ```

pub mod bootstrap;
pub mod sweet_alert;
pub mod text;

pub use bootstrap::BootstrapRenderer;
pub use sweet_alert::{SweetAlertConfig, SweetAlertRenderer};
pub use text::TextRenderer;
