//! Incremental "show more" reveal for document containers.
//!
//! Attach a widget to a container and only the first few matching children
//! stay visible. A toggle control after them reveals the next batch on each
//! activation until every child is shown, then removes itself.
//!
//! ```ignore
//! let mut doc = Document::new(page);
//! let mut widgets = Registry::new();
//! widgets.attach(&mut doc, "list".to_string(), &ShowMoreOptions::new().child_selector("li"))?;
//!
//! // In the event loop:
//! if widgets.dispatch(&mut doc, &event).is_handled() {
//!     continue;
//! }
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod registry;
pub mod widget;

pub use config::{BatchSize, ShowMoreConfig, ShowMoreOptions};
pub use error::ShowMoreError;
pub use host::Host;
pub use registry::Registry;
pub use widget::{initialize, reveal, Phase, RevealState, ShowMore, WidgetResult};
