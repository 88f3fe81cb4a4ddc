//! Message builder core, independent of any UI framework.
//!
//! - [`form`] maps raw control values to and from the canonical message
//! - [`sync`] owns an editing session and its GUI/JSON view state machine
//! - [`preview`] renders what Discord would display
//!
//! UI layers drive an [`EditorSession`] through its `on_*` commands and read back the
//! form, JSON text, preview and queued notifications.

pub mod arena;
pub mod error;
pub mod form;
pub mod path;
pub mod preview;
pub mod sync;

pub use error::EditorError;
pub use form::{extract, insert_placeholder, populate, EmbedForm, FieldForm, FormState};
pub use path::{EmbedIndex, EmbedPath, FieldIndex, FieldPart, FieldValue, FormPath};
pub use preview::{render_preview, Preview, CONTENT_HINT};
pub use sync::{EditorSession, JsonStatus, Notification, NotificationKind, SaveRequest, View};
