//! Host surface for a masked input.
//!
//! [`MaskedField`] plays the role a text widget plays around the engine: it
//! owns the visible text and selection, turns raw keys into edit intents,
//! handles caret navigation itself and keeps the last reported value.

mod key;

pub use key::{KeyInput, KeyParseError};

use serde::Serialize;

use crate::mask::{
    DerivedValue, EditIntent, EditResult, MaskEngine, MaskError, MaskOptions, Selection,
};
use crate::tracing::FieldSnapshot;
use crate::util::is_data_char;

/// What a key press did to the field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KeyOutcome {
    /// The engine applied an edit
    Edited(EditResult),
    /// The caret moved, the text did not change
    Navigated { caret: usize },
    /// The key was swallowed
    Suppressed,
}

/// A single masked input field: engine plus display state.
#[derive(Debug)]
pub struct MaskedField {
    engine: MaskEngine,
    text: String,
    selection: Selection,
    value: DerivedValue,
}

impl MaskedField {
    pub fn new(mask: &str, options: MaskOptions) -> Result<Self, MaskError> {
        Ok(Self::from_engine(MaskEngine::new(mask, options)?))
    }

    pub fn from_engine(engine: MaskEngine) -> Self {
        let text = engine.text();
        let value = engine.derive_value();
        Self {
            engine,
            text,
            selection: Selection::collapsed(0),
            value,
        }
    }

    pub fn engine(&self) -> &MaskEngine {
        &self.engine
    }

    /// Engine access for listener registration and option queries.
    /// Call [`MaskedField::sync`] after mutating the buffer through it.
    pub fn engine_mut(&mut self) -> &mut MaskEngine {
        &mut self.engine
    }

    /// Displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Caret position (selection start)
    pub fn caret(&self) -> usize {
        self.selection.start
    }

    /// Last value reported by the engine
    pub fn value(&self) -> &DerivedValue {
        &self.value
    }

    /// Place a collapsed caret
    pub fn set_caret(&mut self, pos: usize) {
        self.selection = Selection::collapsed(pos).clamped(self.engine.len());
    }

    /// Select a character range
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end).clamped(self.engine.len());
    }

    /// Handle one key press.
    ///
    /// Letters and digits insert, Backspace/Delete erase, arrows and
    /// Home/End navigate. Everything else is suppressed.
    pub fn handle_key(&mut self, key: &KeyInput) -> KeyOutcome {
        let sel = self.selection;
        let intent = match key {
            KeyInput::Char(ch) if is_data_char(*ch) => EditIntent::Insert {
                ch: *ch,
                caret: sel.start,
            },
            KeyInput::Backspace => EditIntent::EraseBackward(sel),
            KeyInput::Delete => EditIntent::EraseForward(sel),
            _ if key.is_navigation() => return self.navigate(key),
            _ => {
                tracing::debug!(key = %key.name(), "key suppressed");
                return KeyOutcome::Suppressed;
            }
        };
        KeyOutcome::Edited(self.apply(intent))
    }

    /// Paste text at the caret
    pub fn paste(&mut self, text: &str) -> EditResult {
        self.apply(EditIntent::Paste {
            text: text.to_string(),
            caret: self.selection.start,
        })
    }

    /// Model-to-view value write. Collapses the caret to the start.
    pub fn write_value(&mut self, text: &str) {
        self.engine.write_value(text);
        self.sync();
        self.selection = Selection::collapsed(0);
    }

    /// Re-read text and value from the engine
    pub fn sync(&mut self) {
        self.text = self.engine.text();
        self.value = self.engine.derive_value();
    }

    fn apply(&mut self, intent: EditIntent) -> EditResult {
        let before = FieldSnapshot::from_field(self);
        let kind = intent.kind();

        let result = self.engine.apply(intent);
        self.text.clone_from(&result.buffer);
        self.selection = Selection::collapsed(result.caret);
        self.value = self.engine.derive_value();

        if let Some(diff) = before.diff(&FieldSnapshot::from_field(self)) {
            tracing::debug!(target: "field", kind, %diff, "state changed");
        }
        self.engine.assert_invariants(kind);
        result
    }

    fn navigate(&mut self, key: &KeyInput) -> KeyOutcome {
        let len = self.engine.len();
        let sel = self.selection;
        let caret = match key {
            KeyInput::ArrowLeft if !sel.is_empty() => sel.start,
            KeyInput::ArrowRight if !sel.is_empty() => sel.end,
            KeyInput::ArrowLeft => sel.start.saturating_sub(1),
            KeyInput::ArrowRight => (sel.end + 1).min(len),
            KeyInput::Home => 0,
            KeyInput::End => len,
            _ => sel.start,
        };
        self.selection = Selection::collapsed(caret);
        KeyOutcome::Navigated { caret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(mask: &str) -> MaskedField {
        MaskedField::new(mask, MaskOptions::default()).unwrap()
    }

    #[test]
    fn test_typing_moves_caret() {
        let mut f = field("(__) ___");
        f.set_caret(1);
        f.handle_key(&KeyInput::Char('1'));
        f.handle_key(&KeyInput::Char('2'));
        assert_eq!(f.text(), "(12) ___");
        assert_eq!(f.caret(), 5);
    }

    #[test]
    fn test_punctuation_suppressed() {
        let mut f = field("__");
        assert_eq!(f.handle_key(&KeyInput::Char('-')), KeyOutcome::Suppressed);
        assert_eq!(
            f.handle_key(&KeyInput::Named("Tab".to_string())),
            KeyOutcome::Suppressed
        );
        assert_eq!(f.text(), "__");
    }

    #[test]
    fn test_navigation_clamps() {
        let mut f = field("___");
        assert_eq!(
            f.handle_key(&KeyInput::ArrowLeft),
            KeyOutcome::Navigated { caret: 0 }
        );
        f.handle_key(&KeyInput::End);
        assert_eq!(f.caret(), 3);
        assert_eq!(
            f.handle_key(&KeyInput::ArrowRight),
            KeyOutcome::Navigated { caret: 3 }
        );
        f.handle_key(&KeyInput::Home);
        assert_eq!(f.caret(), 0);
    }

    #[test]
    fn test_arrow_collapses_selection() {
        let mut f = field("_____");
        f.select(1, 4);
        f.handle_key(&KeyInput::ArrowLeft);
        assert_eq!(f.selection(), Selection::collapsed(1));
        f.select(1, 4);
        f.handle_key(&KeyInput::ArrowRight);
        assert_eq!(f.selection(), Selection::collapsed(4));
    }

    #[test]
    fn test_backspace_selection() {
        let mut f = field("__-__");
        f.paste("1234");
        f.select(1, 4);
        f.handle_key(&KeyInput::Backspace);
        assert_eq!(f.text(), "1_-_4");
        assert_eq!(f.caret(), 1);
    }

    #[test]
    fn test_value_tracks_edits() {
        let mut f = MaskedField::new("__", MaskOptions::numeric()).unwrap();
        assert!(f.value().is_null());
        f.paste("42");
        assert_eq!(f.value(), &DerivedValue::Number(42.0));
    }

    #[test]
    fn test_write_value_resets_caret() {
        let mut f = field("__/__");
        f.set_caret(4);
        f.write_value("1231");
        assert_eq!(f.text(), "12/31");
        assert_eq!(f.caret(), 0);
    }
}
