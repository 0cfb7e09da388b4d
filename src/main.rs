//! termform - a tiny terminal form
//!
//! Asks for a first name, a second name and an email address, then prints
//! what was entered once the form is closed.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Printable keys, Space | Type into the active field |
//! | Backspace | Delete the last character |
//! | Up | Previous field |
//! | Down / Enter | Next field |
//! | Ctrl+C | Close the form and print the values |
//!
//! # Output
//!
//! ```text
//! First Name: Ali
//! Second Name: Bob
//! Email: a@b.c
//! ```
//!
//! Every output line keeps a trailing space after the value.

mod config;
mod form;
mod ui;

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::event::{self, Event};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{Config, LogConfig};
use crate::form::{Field, Flow, FormEvent, FormSession, FIELD_LABELS};
use crate::ui::{KeyMapper, Renderer};

fn main() {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(&config.log);
    info!("termform starting...");
    if let Some(e) = config_error {
        warn!("Using default config: {}", e);
    }

    match run() {
        Ok(fields) => {
            info!("Form closed with {} fields", fields.len());
            if let Err(e) = write_summary(&mut io::stdout().lock(), &fields) {
                error!("Failed to print fields: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Form failed: {:#}", e);
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Initialize logging to file
fn init_logging(log: &LogConfig) {
    if !log.enabled {
        return;
    }

    let log_path = log.path();

    // Create log directory if needed
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    // Open log file (append mode)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    let filter = EnvFilter::try_new(&log.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

/// Run the form until the operator quits
fn run() -> anyhow::Result<Vec<Field>> {
    let mut session = FormSession::new(FIELD_LABELS)?;

    let mut renderer = Renderer::new();
    renderer.init()?;

    let (cols, rows) = Renderer::size()?;
    info!("Terminal size: {}x{}", cols, rows);

    renderer.render(&session.render())?;
    run_main_loop(&mut session, &mut renderer)?;

    // Restore the terminal before anything is printed
    renderer.cleanup()?;

    info!("Session state: {:?}", session.state());
    Ok(session.finalize())
}

/// Main event loop
fn run_main_loop(session: &mut FormSession, renderer: &mut Renderer) -> anyhow::Result<()> {
    loop {
        let events: Vec<FormEvent> = match event::read()? {
            Event::Key(key_event) => KeyMapper::map(&key_event).into_iter().collect(),
            Event::Paste(text) => KeyMapper::map_paste(&text),
            Event::Resize(cols, rows) => {
                info!("Resize: {}x{}", cols, rows);
                renderer.resize(cols, rows);
                renderer.render(&session.render())?;
                continue;
            }
            _ => continue,
        };

        if events.is_empty() {
            continue;
        }

        for form_event in events {
            if session.handle_event(form_event) == Flow::Terminate {
                info!("Quit requested");
                return Ok(());
            }
            debug!("Form event: {:?}, cursor at {}", form_event, session.cursor());
        }

        renderer.render(&session.render())?;
    }
}

/// Print one `"<label>: <value> "` line per field
fn write_summary<W: Write>(out: &mut W, fields: &[Field]) -> io::Result<()> {
    for field in fields {
        writeln!(out, "{}: {} ", field.label, field.value)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(fields: &[Field]) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, fields).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_keeps_trailing_space() {
        let mut session = FormSession::new(FIELD_LABELS).unwrap();
        session.handle_event(FormEvent::Character('X'));
        session.handle_event(FormEvent::Quit);

        assert_eq!(
            summary(&session.finalize()),
            "First Name: X \nSecond Name:  \nEmail:  \n"
        );
    }

    #[test]
    fn test_summary_of_filled_form() {
        let mut session = FormSession::new(FIELD_LABELS).unwrap();
        let text = ["Ali", "Bob", "a@b.c"];
        for (i, value) in text.iter().enumerate() {
            if i > 0 {
                session.handle_event(FormEvent::MoveDown);
            }
            for event in KeyMapper::map_paste(value) {
                session.handle_event(event);
            }
        }

        assert_eq!(
            summary(&session.finalize()),
            "First Name: Ali \nSecond Name: Bob \nEmail: a@b.c \n"
        );
    }
}
