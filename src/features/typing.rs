//! Typing area with live character, word and last-key statistics

use crate::effects::Transient;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Whether a modifier set turns a key into a command instead of text.
///
/// AltGr reaches the terminal as Ctrl+Alt on Windows, so that combination
/// still types.
pub fn is_command_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) != modifiers.contains(KeyModifiers::ALT)
}

/// Display name of a key, using browser key names where they exist
pub fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        other => format!("{:?}", other),
    }
}

#[derive(Debug, Clone)]
pub struct TypingStats {
    text: String,
    last_key: Option<String>,
    key_flash: Transient,
    flash_duration: Duration,
    focused: bool,
}

impl TypingStats {
    pub fn new(flash_duration: Duration) -> Self {
        Self {
            text: String::new(),
            last_key: None,
            key_flash: Transient::new(),
            flash_duration,
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Characters typed so far
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whitespace-separated non-empty tokens
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }

    pub fn is_key_flashing(&self, now: Instant) -> bool {
        self.key_flash.is_active(now)
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Record a key press, then apply it to the text.
    ///
    /// Returns true when the text changed.
    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> bool {
        self.last_key = Some(key_name(key.code));
        self.key_flash.arm(now, self.flash_duration);

        if is_command_chord(key.modifiers) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.text.push(c);
                true
            }
            KeyCode::Enter => {
                self.text.push('\n');
                true
            }
            KeyCode::Backspace => self.text.pop().is_some(),
            _ => false,
        }
    }
}

impl Default for TypingStats {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
