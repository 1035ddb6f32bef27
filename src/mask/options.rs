//! Engine options, fixed at initialization.

use serde::{Deserialize, Serialize};

/// Default placeholder for digit cells
pub const DEFAULT_NUMBER_PLACEHOLDER: char = '_';

/// Default placeholder for any-character cells
pub const DEFAULT_ANY_PLACEHOLDER: char = '#';

/// Options that configure a [`MaskEngine`](super::MaskEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskOptions {
    /// Report a parsed number instead of the masked text
    pub only_numbers: bool,

    /// Template character marking a digit cell
    pub number_placeholder: char,

    /// Template character marking an any-character cell
    pub any_placeholder: char,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            only_numbers: false,
            number_placeholder: DEFAULT_NUMBER_PLACEHOLDER,
            any_placeholder: DEFAULT_ANY_PLACEHOLDER,
        }
    }
}

impl MaskOptions {
    /// Default placeholders, numeric value reporting
    pub fn numeric() -> Self {
        Self {
            only_numbers: true,
            ..Self::default()
        }
    }

    /// Use one placeholder character for both digits and letters
    pub fn shared_placeholder(placeholder: char) -> Self {
        Self {
            only_numbers: false,
            number_placeholder: placeholder,
            any_placeholder: placeholder,
        }
    }

    pub fn with_only_numbers(mut self, only_numbers: bool) -> Self {
        self.only_numbers = only_numbers;
        self
    }
}
