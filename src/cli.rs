//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - A mask given inline or by preset name
//! - Placeholder and value-mode overrides
//! - A sequence of key/paste/selection events to replay
//! - Saving the mask as a named preset

use clap::Parser;
use std::path::PathBuf;

use crate::config::MaskConfig;
use crate::field::KeyInput;
use crate::mask::MaskOptions;

/// Replay key presses against an input mask
#[derive(Parser, Debug)]
#[command(
    name = "inputmask",
    version,
    about = "Replay key presses against an input mask"
)]
pub struct CliArgs {
    /// Mask template, e.g. "(__) ___-____"
    #[arg(value_name = "MASK")]
    pub mask: Option<String>,

    /// Use a mask preset from the config file
    #[arg(short = 'p', long, value_name = "NAME", conflicts_with = "mask")]
    pub preset: Option<String>,

    /// Report the value as a number
    #[arg(short = 'n', long)]
    pub only_numbers: bool,

    /// Placeholder character for digits
    #[arg(long, value_name = "CHAR")]
    pub number_char: Option<char>,

    /// Placeholder character for any letter or digit
    #[arg(long, value_name = "CHAR")]
    pub any_char: Option<char>,

    /// Event to replay: a key name (5, a, Backspace, Delete, ArrowLeft,
    /// ArrowRight, Home, End), paste:TEXT, select:A..B or caret:N
    #[arg(short = 'e', long = "event", value_name = "EVENT", value_parser = parse_event)]
    pub events: Vec<ReplayEvent>,

    /// Print one JSON object per step
    #[arg(long)]
    pub json: bool,

    /// Store the mask under this preset name before replaying
    #[arg(long, value_name = "NAME")]
    pub save_preset: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// A single step of a replay script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    Key(KeyInput),
    Paste(String),
    Select { start: usize, end: usize },
    Caret(usize),
}

impl std::fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayEvent::Key(key) => write!(f, "{}", key.name()),
            ReplayEvent::Paste(text) => write!(f, "paste:{}", text),
            ReplayEvent::Select { start, end } => write!(f, "select:{}..{}", start, end),
            ReplayEvent::Caret(pos) => write!(f, "caret:{}", pos),
        }
    }
}

/// Parse a replay event from its command-line form
pub fn parse_event(s: &str) -> Result<ReplayEvent, String> {
    if let Some(text) = s.strip_prefix("paste:") {
        return Ok(ReplayEvent::Paste(text.to_string()));
    }
    if let Some(range) = s.strip_prefix("select:") {
        let (a, b) = range
            .split_once("..")
            .ok_or_else(|| format!("Expected select:START..END, got '{}'", s))?;
        let start = parse_position(a)?;
        let end = parse_position(b)?;
        return Ok(ReplayEvent::Select { start, end });
    }
    if let Some(pos) = s.strip_prefix("caret:") {
        return Ok(ReplayEvent::Caret(parse_position(pos)?));
    }
    s.parse::<KeyInput>()
        .map(ReplayEvent::Key)
        .map_err(|e| format!("Invalid event '{}': {}", s, e))
}

fn parse_position(s: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("Invalid position '{}'", s))
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Resolved mask; None when neither a mask nor a preset was given
    pub mask: Option<String>,
    pub options: MaskOptions,
    pub events: Vec<ReplayEvent>,
    pub json: bool,
    pub save_preset: Option<String>,
}

impl CliArgs {
    /// Merge parsed CLI args with the config file defaults
    pub fn into_config(self, config: &MaskConfig) -> Result<RunConfig, String> {
        let mask = match (self.mask, &self.preset) {
            (Some(mask), _) => Some(mask),
            (None, Some(name)) => Some(
                config
                    .preset(name)
                    .ok_or_else(|| format!("Unknown preset '{}'", name))?
                    .to_string(),
            ),
            (None, None) => None,
        };

        let defaults = config.options();
        let options = MaskOptions {
            only_numbers: self.only_numbers || defaults.only_numbers,
            number_placeholder: self.number_char.unwrap_or(defaults.number_placeholder),
            any_placeholder: self.any_char.unwrap_or(defaults.any_placeholder),
        };

        Ok(RunConfig {
            mask,
            options,
            events: self.events,
            json: self.json,
            save_preset: self.save_preset,
        })
    }
}
