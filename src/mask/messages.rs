//! Edit intents delivered by the host and the results handed back.

use serde::Serialize;

use super::selection::Selection;

/// One user edit, as delivered by the host surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// Type a single data character at the caret
    Insert { ch: char, caret: usize },
    /// Backspace over a selection (or the character before a collapsed caret)
    EraseBackward(Selection),
    /// Delete over a selection (or the character after a collapsed caret)
    EraseForward(Selection),
    /// Paste text at the caret
    Paste { text: String, caret: usize },
}

impl EditIntent {
    /// Position the edit starts from
    pub fn anchor(&self) -> usize {
        match self {
            EditIntent::Insert { caret, .. } | EditIntent::Paste { caret, .. } => *caret,
            EditIntent::EraseBackward(sel) | EditIntent::EraseForward(sel) => sel.start,
        }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            EditIntent::Insert { .. } => "insert",
            EditIntent::EraseBackward(_) => "erase_backward",
            EditIntent::EraseForward(_) => "erase_forward",
            EditIntent::Paste { .. } => "paste",
        }
    }
}

/// Buffer and caret after an edit. The caret is always within `[0, len]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditResult {
    pub buffer: String,
    pub caret: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor() {
        assert_eq!(EditIntent::Insert { ch: '1', caret: 3 }.anchor(), 3);
        assert_eq!(EditIntent::EraseForward(Selection::new(6, 2)).anchor(), 2);
    }
}
