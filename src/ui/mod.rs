//! Terminal input and output.
//!
//! - **keymapper**: crossterm key and paste events to form events
//! - **renderer**: raw mode, alternate screen and drawing of the form view

pub mod keymapper;
pub mod renderer;

pub use keymapper::*;
pub use renderer::*;
