//! Form state and presentation.
//!
//! - **event**: classified input events and loop control
//! - **session**: the field list, the cursor and the event reducer
//! - **view**: plain-text rendering of a session
//!
//! # Lifecycle
//!
//! ```text
//! FormSession::new(labels)      Active
//!   └── handle_event(..)*       Active, re-rendered after each event
//!         └── Quit              Terminated
//!               └── finalize()  fields handed to output
//! ```

pub mod event;
pub mod session;
pub mod view;

pub use event::{Flow, FormEvent};
pub use session::{Field, FormSession};

/// Labels of the one form this program shows
pub const FIELD_LABELS: [&str; 3] = ["First Name", "Second Name", "Email"];
