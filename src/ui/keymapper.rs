//! Key mapping for form input
//!
//! Classifies crossterm key and paste events into form events.

use bitflags::bitflags;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::form::FormEvent;

bitflags! {
    /// Modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        let mut result = Modifiers::empty();
        if mods.contains(KeyModifiers::SHIFT) {
            result |= Modifiers::SHIFT;
        }
        if mods.contains(KeyModifiers::CONTROL) {
            result |= Modifiers::CTRL;
        }
        if mods.contains(KeyModifiers::ALT) {
            result |= Modifiers::ALT;
        }
        result
    }
}

/// Key mapper for converting terminal input to form events
pub struct KeyMapper;

impl KeyMapper {
    /// Map a crossterm KeyEvent to a form event, or None if the key is ignored
    pub fn map(event: &KeyEvent) -> Option<FormEvent> {
        // Only key presses; release/repeat come from enhanced keyboard reporting
        if event.kind != KeyEventKind::Press {
            return None;
        }

        let mods = Modifiers::from(event.modifiers);

        match event.code {
            KeyCode::Char(ch) => Self::map_char(ch, mods),
            KeyCode::Backspace => Some(FormEvent::Backspace),
            KeyCode::Up => Some(FormEvent::MoveUp),
            KeyCode::Down => Some(FormEvent::MoveDown),
            KeyCode::Enter => Some(FormEvent::Confirm),
            _ => None,
        }
    }

    /// Map a character with modifiers
    fn map_char(ch: char, mods: Modifiers) -> Option<FormEvent> {
        // AltGr arrives as Ctrl+Alt on Windows; only letters are real chords
        if mods.contains(Modifiers::CTRL) && mods.contains(Modifiers::ALT) {
            if ch.is_ascii_alphabetic() {
                return None;
            }
            return FormEvent::accepts_char(ch).then_some(FormEvent::Character(ch));
        }

        if mods.contains(Modifiers::CTRL) {
            // Ctrl+C is the only control combination the form knows
            return match ch {
                'c' | 'C' => Some(FormEvent::Quit),
                _ => None,
            };
        }

        if mods.contains(Modifiers::ALT) {
            return None;
        }

        FormEvent::accepts_char(ch).then_some(FormEvent::Character(ch))
    }

    /// Map pasted text to one character event per printable char
    pub fn map_paste(text: &str) -> Vec<FormEvent> {
        text.chars()
            .filter(|&ch| FormEvent::accepts_char(ch))
            .map(FormEvent::Character)
            .collect()
    }
}
