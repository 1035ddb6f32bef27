//! Mask template: the fixed literal/placeholder layout of a masked input.

use super::error::MaskError;
use super::options::MaskOptions;
use crate::util::is_data_char;

/// Which kind of data a key stroke carries, and therefore which placeholder
/// it is allowed to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderClass {
    /// Base-10 digits
    Digit,
    /// Everything else (letters)
    Any,
}

impl PlaceholderClass {
    /// Classify a data character
    pub fn of(key: char) -> Self {
        if key.is_ascii_digit() {
            PlaceholderClass::Digit
        } else {
            PlaceholderClass::Any
        }
    }
}

/// A single template position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Fixed character that is always shown unchanged
    Literal(char),
    /// Accepts a digit
    DigitPlaceholder,
    /// Accepts any data character.
    /// Also used when both placeholder characters are configured the same.
    AnyPlaceholder,
}

impl Cell {
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Cell::Literal(_))
    }
}

/// Immutable mask layout, built once from the mask string.
///
/// Positions are character indices, never byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTemplate {
    chars: Vec<char>,
    cells: Vec<Cell>,
    number_placeholder: char,
    any_placeholder: char,
}

impl MaskTemplate {
    /// Build a template from a mask string.
    ///
    /// Fails with [`MaskError::MissingMask`] when the mask is empty.
    pub fn parse(mask: &str, options: &MaskOptions) -> Result<Self, MaskError> {
        if mask.is_empty() {
            return Err(MaskError::MissingMask);
        }

        let number_placeholder = options.number_placeholder;
        let any_placeholder = options.any_placeholder;
        let chars: Vec<char> = mask.chars().collect();
        let cells = chars
            .iter()
            .map(|&ch| {
                if ch == any_placeholder {
                    Cell::AnyPlaceholder
                } else if ch == number_placeholder {
                    Cell::DigitPlaceholder
                } else {
                    Cell::Literal(ch)
                }
            })
            .collect();

        Ok(Self {
            chars,
            cells,
            number_placeholder,
            any_placeholder,
        })
    }

    /// Number of cells (always >= 1)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: an empty mask is rejected at construction
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Template characters, as shown in a fully unfilled buffer
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The placeholder character that data of `class` replaces
    pub fn placeholder_char(&self, class: PlaceholderClass) -> char {
        match class {
            PlaceholderClass::Digit => self.number_placeholder,
            PlaceholderClass::Any => self.any_placeholder,
        }
    }

    /// First position at or after `from` whose template character is `ch`
    pub fn position_of(&self, ch: char, from: usize) -> Option<usize> {
        self.chars
            .get(from..)?
            .iter()
            .position(|&c| c == ch)
            .map(|offset| from + offset)
    }

    /// Leftmost placeholder cell of either class
    pub fn first_placeholder(&self) -> Option<usize> {
        self.cells.iter().position(Cell::is_placeholder)
    }

    /// Nearest placeholder of either class strictly after `index`.
    ///
    /// Leftmost wins; a cell has exactly one class so there are no ties.
    pub fn next_placeholder_after(&self, index: usize) -> Option<usize> {
        let start = index + 1;
        let next_number = self.position_of(self.number_placeholder, start);
        let next_any = self.position_of(self.any_placeholder, start);
        match (next_number, next_any) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Template text for a character range, clamped to the template
    pub fn span(&self, start: usize, end: usize) -> &[char] {
        let end = end.min(self.len());
        let start = start.min(end);
        &self.chars[start..end]
    }

    /// Check whether `text` has the template's shape: same length, every
    /// literal in place and every placeholder cell holding its placeholder
    /// or a character it accepts.
    pub fn conforms(&self, text: &str) -> bool {
        let mut count = 0;
        for (i, ch) in text.chars().enumerate() {
            let Some(cell) = self.cells.get(i) else {
                return false;
            };
            if !self.accepts(*cell, ch) {
                return false;
            }
            count += 1;
        }
        count == self.len()
    }

    /// Whether `ch` may sit in `cell` of a buffer
    fn accepts(&self, cell: Cell, ch: char) -> bool {
        match cell {
            Cell::Literal(lit) => lit == ch,
            Cell::DigitPlaceholder => ch == self.number_placeholder || ch.is_ascii_digit(),
            Cell::AnyPlaceholder => {
                ch == self.any_placeholder
                    || (is_data_char(ch)
                        && self.placeholder_char(PlaceholderClass::of(ch)) == self.any_placeholder)
            }
        }
    }
}

impl std::fmt::Display for MaskTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
