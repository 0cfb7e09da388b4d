//! Text view of the form
//!
//! Layout:
//!
//! ```text
//! ------------------
//! Enter your details
//! ------------------
//! First Name: Ali
//! Second Name: Bo_
//! Email:
//!
//! Up/Down to move, Ctrl+C to quit
//! ```

use std::fmt::{self, Write};

use thiserror::Error;
use tracing::error;

use super::session::Field;

/// Lines above the fields
pub const HEADER: [&str; 3] = ["------------------", "Enter your details", "------------------"];

/// Key help below the fields
pub const FOOTER: &str = "Up/Down to move, Ctrl+C to quit";

/// Appended to the active field's line
pub const CURSOR_MARKER: char = '_';

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to format form view: {0}")]
    Format(#[from] fmt::Error),
}

/// Render the view, substituting the error message if formatting fails
pub fn render(fields: &[Field], cursor: usize) -> String {
    let mut view = String::with_capacity(128);
    view_or_error(render_into(&mut view, fields, cursor).map(|_| view))
}

/// Write the view into any `fmt::Write` sink
pub fn render_into<W: Write>(out: &mut W, fields: &[Field], cursor: usize) -> Result<(), RenderError> {
    for line in HEADER {
        writeln!(out, "{}", line)?;
    }

    for (i, field) in fields.iter().enumerate() {
        write!(out, "{}: {}", field.label, field.value)?;
        if i == cursor {
            out.write_char(CURSOR_MARKER)?;
        }
        out.write_char('\n')?;
    }

    writeln!(out)?;
    writeln!(out, "{}", FOOTER)?;
    Ok(())
}

fn view_or_error(result: Result<String, RenderError>) -> String {
    match result {
        Ok(view) => view,
        Err(e) => {
            error!("Render failed: {}", e);
            e.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that refuses every write
    struct Broken;

    impl Write for Broken {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn fields(values: &[&str]) -> Vec<Field> {
        ["First Name", "Second Name", "Email"]
            .iter()
            .zip(values)
            .map(|(label, value)| Field {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_form_layout() {
        let view = render(&fields(&["", "", ""]), 0);
        assert_eq!(
            view,
            "------------------\n\
             Enter your details\n\
             ------------------\n\
             First Name: _\n\
             Second Name: \n\
             Email: \n\
             \n\
             Up/Down to move, Ctrl+C to quit\n"
        );
    }

    #[test]
    fn test_marker_follows_cursor() {
        let f = fields(&["Ali", "Bob", "a@b.c"]);

        let view = render(&f, 2);
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[3], "First Name: Ali");
        assert_eq!(lines[4], "Second Name: Bob");
        assert_eq!(lines[5], "Email: a@b.c_");

        let view = render(&f, 1);
        assert_eq!(view.matches(CURSOR_MARKER).count(), 1);
        assert!(view.contains("Second Name: Bob_\n"));
    }

    #[test]
    fn test_value_with_marker_char() {
        let view = render(&fields(&["a_b", "", ""]), 1);
        assert!(view.contains("First Name: a_b\n"));
        assert!(view.contains("Second Name: _\n"));
    }

    #[test]
    fn test_format_failure_becomes_view() {
        let err = render_into(&mut Broken, &fields(&["", "", ""]), 0).unwrap_err();
        let view = view_or_error(Err(err));
        assert!(view.starts_with("Failed to format form view"));
    }
}
