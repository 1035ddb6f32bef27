//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! mask transitions and caret/selection changes.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=field=debug` - field state diffs only
//! - `RUST_LOG=inputmask::mask=trace` - every engine transition
//!
//! # Log Files
//!
//! Logs are written to `~/.config/inputmask/logs/inputmask.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::field::MaskedField;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering and goes to
/// stderr so it never mixes with replay output.
///
/// File logging writes to `~/.config/inputmask/logs/inputmask.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "inputmask.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of field state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub text: String,
    pub selection: (usize, usize),
}

impl FieldSnapshot {
    pub fn from_field(field: &MaskedField) -> Self {
        let sel = field.selection();
        Self {
            text: field.text().to_string(),
            selection: (sel.start, sel.end),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.text != other.text {
            changes.push(format!("text: {:?} → {:?}", self.text, other.text));
        }
        if self.selection != other.selection {
            let (a, b) = self.selection;
            let (c, d) = other.selection;
            if a == b && c == d {
                changes.push(format!("caret: {} → {}", a, c));
            } else {
                changes.push(format!("selection: {}..{} → {}..{}", a, b, c, d));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(text: &str, start: usize, end: usize) -> FieldSnapshot {
        FieldSnapshot {
            text: text.to_string(),
            selection: (start, end),
        }
    }

    #[test]
    fn test_no_diff_when_equal() {
        let a = snapshot("(1_)", 2, 2);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_caret_diff() {
        let a = snapshot("(__)", 1, 1);
        let b = snapshot("(1_)", 2, 2);
        assert_eq!(
            a.diff(&b).unwrap(),
            "text: \"(__)\" → \"(1_)\"; caret: 1 → 2"
        );
    }

    #[test]
    fn test_selection_diff() {
        let a = snapshot("12", 0, 2);
        let b = snapshot("12", 0, 0);
        assert_eq!(a.diff(&b).unwrap(), "selection: 0..2 → 0..0");
    }
}
