//! Form input events
//!
//! Events are already classified by the time they reach the session; the
//! session never sees raw key codes.

/// A classified unit of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Printable character (space included) for the active field
    Character(char),
    /// Delete the last character of the active field
    Backspace,
    /// Move to the previous field
    MoveUp,
    /// Move to the next field
    MoveDown,
    /// Enter key; moves like `MoveDown`, never submits
    Confirm,
    /// End the session
    Quit,
}

impl FormEvent {
    /// Whether `ch` may be typed into a field
    pub fn accepts_char(ch: char) -> bool {
        ch == ' ' || !ch.is_control()
    }
}

/// What the event loop does after an event has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events
    Continue,
    /// Leave the loop and finalize
    Terminate,
}
