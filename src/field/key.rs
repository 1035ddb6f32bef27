//! Raw key input as delivered by a host surface.

use std::str::FromStr;

/// A key press, named the way browsers and terminals report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// A printable character
    Char(char),
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    /// Any other named key (Tab, Enter, F5, ...)
    Named(String),
}

impl KeyInput {
    /// Navigation keys move the caret without editing
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            KeyInput::ArrowLeft | KeyInput::ArrowRight | KeyInput::Home | KeyInput::End
        )
    }

    /// Key name, for logging and round-tripping
    pub fn name(&self) -> String {
        match self {
            KeyInput::Char(ch) => ch.to_string(),
            KeyInput::Backspace => "Backspace".to_string(),
            KeyInput::Delete => "Delete".to_string(),
            KeyInput::ArrowLeft => "ArrowLeft".to_string(),
            KeyInput::ArrowRight => "ArrowRight".to_string(),
            KeyInput::Home => "Home".to_string(),
            KeyInput::End => "End".to_string(),
            KeyInput::Named(name) => name.clone(),
        }
    }
}

/// Errors that can occur when parsing a key name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    Empty,
}

impl std::fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyParseError::Empty => write!(f, "empty key name"),
        }
    }
}

impl std::error::Error for KeyParseError {}

impl FromStr for KeyInput {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return Err(KeyParseError::Empty),
            (Some(ch), None) => return Ok(KeyInput::Char(ch)),
            _ => {}
        }

        match s.to_lowercase().as_str() {
            "backspace" | "bs" => Ok(KeyInput::Backspace),
            "delete" | "del" => Ok(KeyInput::Delete),
            "arrowleft" | "left" => Ok(KeyInput::ArrowLeft),
            "arrowright" | "right" => Ok(KeyInput::ArrowRight),
            "home" => Ok(KeyInput::Home),
            "end" => Ok(KeyInput::End),
            "space" => Ok(KeyInput::Char(' ')),
            _ => Ok(KeyInput::Named(s.to_string())),
        }
    }
}
