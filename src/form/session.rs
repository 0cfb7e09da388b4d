//! Form session
//!
//! Owns the fields and the cursor for one run of the form and applies
//! classified events to them.

use thiserror::Error;
use tracing::debug;

use super::event::{Flow, FormEvent};
use super::view;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("A form needs at least one field")]
    NoFields,
}

/// A labelled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label shown before the value
    pub label: String,
    /// Text entered so far
    pub value: String,
}

impl Field {
    fn empty(label: String) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting events
    Active,
    /// Quit was received; absorbing
    Terminated,
}

/// The form being filled in
#[derive(Debug, Clone)]
pub struct FormSession {
    fields: Vec<Field>,
    /// Invariant: `cursor < fields.len()`
    cursor: usize,
    state: SessionState,
}

impl FormSession {
    /// Create a session with one empty value per label and the cursor on the first field
    pub fn new<I, S>(labels: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<Field> = labels
            .into_iter()
            .map(|label| Field::empty(label.into()))
            .collect();

        if fields.is_empty() {
            return Err(FormError::NoFields);
        }

        Ok(Self {
            fields,
            cursor: 0,
            state: SessionState::Active,
        })
    }

    /// Apply one event
    pub fn handle_event(&mut self, event: FormEvent) -> Flow {
        if self.state == SessionState::Terminated {
            return Flow::Terminate;
        }

        match event {
            FormEvent::Quit => {
                self.state = SessionState::Terminated;
                return Flow::Terminate;
            }
            FormEvent::Backspace => {
                // pop() removes a whole code point
                self.active_mut().value.pop();
            }
            FormEvent::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            FormEvent::MoveDown | FormEvent::Confirm => {
                if self.cursor + 1 < self.fields.len() {
                    self.cursor += 1;
                }
            }
            FormEvent::Character(ch) => {
                if FormEvent::accepts_char(ch) {
                    self.active_mut().value.push(ch);
                } else {
                    debug!("Ignoring non-printable character {:?}", ch);
                }
            }
        }

        Flow::Continue
    }

    /// Render the current view
    pub fn render(&self) -> String {
        view::render(&self.fields, self.cursor)
    }

    /// Hand over the final fields, consuming the session
    pub fn finalize(self) -> Vec<Field> {
        self.fields
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn active_mut(&mut self) -> &mut Field {
        &mut self.fields[self.cursor]
    }
}
