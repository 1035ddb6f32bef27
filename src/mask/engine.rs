//! MaskEngine - owns the template and the live buffer and applies edits.

use super::buffer::MaskBuffer;
use super::error::MaskError;
use super::messages::{EditIntent, EditResult};
use super::options::MaskOptions;
use super::selection::Selection;
use super::template::{Cell, MaskTemplate, PlaceholderClass};
use super::value::DerivedValue;
use crate::util::filter_data_chars;

/// Callback receiving the derived value after each edit
pub type ValueListener = Box<dyn FnMut(&DerivedValue)>;

/// Mask-state transition engine.
///
/// Every operation reads the template and buffer, writes the new buffer and
/// returns the new caret. Positions are character indices, and every
/// returned caret is clamped to `[0, template.len()]`.
pub struct MaskEngine {
    template: MaskTemplate,
    buffer: MaskBuffer,
    options: MaskOptions,
    disabled: bool,
    listeners: Vec<ValueListener>,
}

impl std::fmt::Debug for MaskEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskEngine")
            .field("template", &self.template.to_string())
            .field("buffer", &self.buffer.content())
            .field("options", &self.options)
            .field("disabled", &self.disabled)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl MaskEngine {
    /// Create an engine for `mask`. The buffer starts fully unfilled.
    pub fn new(mask: &str, options: MaskOptions) -> Result<Self, MaskError> {
        let template = MaskTemplate::parse(mask, &options)?;
        let buffer = MaskBuffer::from_template(&template);
        tracing::debug!(mask, ?options, "mask engine initialized");
        Ok(Self {
            template,
            buffer,
            options,
            disabled: false,
            listeners: Vec::new(),
        })
    }

    /// Create an engine from an optional mask (absent is an error)
    pub fn from_optional(mask: Option<&str>, options: MaskOptions) -> Result<Self, MaskError> {
        Self::new(mask.ok_or(MaskError::MissingMask)?, options)
    }

    pub fn template(&self) -> &MaskTemplate {
        &self.template
    }

    pub fn buffer(&self) -> &MaskBuffer {
        &self.buffer
    }

    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Template length in characters
    pub fn len(&self) -> usize {
        self.template.len()
    }

    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// Current buffer as String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// While disabled every edit is a no-op without notification
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Register a value listener, called after every applied edit
    pub fn on_value_change(&mut self, listener: impl FnMut(&DerivedValue) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The value reported to listeners
    pub fn derive_value(&self) -> DerivedValue {
        DerivedValue::from_buffer(&self.buffer.content(), self.options.only_numbers)
    }

    /// Apply one edit intent
    pub fn apply(&mut self, intent: EditIntent) -> EditResult {
        tracing::trace!(kind = intent.kind(), anchor = intent.anchor(), "apply intent");
        match intent {
            EditIntent::Insert { ch, caret } => self.apply_insert(ch, caret),
            EditIntent::EraseBackward(sel) => self.apply_erase_backward(sel.start, sel.end),
            EditIntent::EraseForward(sel) => self.apply_erase_forward(sel.start, sel.end),
            EditIntent::Paste { text, caret } => self.apply_paste(&text, caret),
        }
    }

    /// Type `key` at `caret`.
    ///
    /// The key only lands if the cell under the caret holds the placeholder
    /// of the key's class; otherwise nothing changes.
    pub fn apply_insert(&mut self, key: char, caret: usize) -> EditResult {
        let caret = self.clamp(caret);
        if self.disabled {
            return self.result(caret);
        }
        let caret = self.insert_at(key, caret);
        self.notify();
        self.result(caret)
    }

    /// Backspace over `[start, end)`, or the character before a collapsed caret
    pub fn apply_erase_backward(&mut self, start: usize, end: usize) -> EditResult {
        if self.disabled {
            return self.result(self.clamp(start.min(end)));
        }
        let range = Selection::new(start, end).expand_backward();
        self.erase(range, range.start)
    }

    /// Delete over `[start, end)`, or the character after a collapsed caret
    pub fn apply_erase_forward(&mut self, start: usize, end: usize) -> EditResult {
        if self.disabled {
            return self.result(self.clamp(start.min(end)));
        }
        let range = Selection::new(start, end).expand_forward();
        self.erase(range, range.end)
    }

    /// Paste `text` at `caret`, as if each letter/digit were typed in turn.
    ///
    /// Listeners are notified once, after the whole text is consumed.
    pub fn apply_paste(&mut self, text: &str, caret: usize) -> EditResult {
        let mut caret = self.clamp(caret);
        if self.disabled {
            return self.result(caret);
        }
        let data = filter_data_chars(text);
        for key in data.chars() {
            caret = self.insert_at(key, caret);
        }
        tracing::trace!(pasted = %data, caret, "paste applied");
        self.notify();
        self.result(caret)
    }

    /// Host-initiated value write (model to view). Does not notify.
    ///
    /// Text with the template's shape is adopted as is; anything else resets
    /// the buffer and fills it like a paste at the first placeholder.
    pub fn write_value(&mut self, text: &str) {
        if self.template.conforms(text) {
            self.buffer.overwrite(text);
            return;
        }
        tracing::debug!(text, "value does not fit mask, refilling from data characters");
        self.buffer.reset(&self.template);
        let mut caret = self.template.first_placeholder().unwrap_or(0);
        for key in filter_data_chars(text).chars() {
            caret = self.insert_at(key, caret);
        }
    }

    /// Reset the buffer to the template. Does not notify.
    pub fn clear(&mut self) {
        self.buffer.reset(&self.template);
    }

    /// Verify the buffer still has the template's shape (debug builds only)
    ///
    /// Panics with `context` in the message if a literal was overwritten or
    /// the length drifted.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        assert_eq!(
            self.buffer.len(),
            self.template.len(),
            "[{}] buffer length {} differs from template length {}",
            context,
            self.buffer.len(),
            self.template.len()
        );
        for (i, cell) in self.template.cells().iter().enumerate() {
            if let Cell::Literal(lit) = cell {
                assert_eq!(
                    self.buffer.char_at(i),
                    Some(*lit),
                    "[{}] literal {:?} at {} was overwritten",
                    context,
                    lit,
                    i
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self, _context: &str) {}

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Single-key transition without notification; returns the new caret
    fn insert_at(&mut self, key: char, caret: usize) -> usize {
        let placeholder = self.template.placeholder_char(PlaceholderClass::of(key));
        if self.buffer.char_at(caret) != Some(placeholder) {
            tracing::debug!(%key, caret, "insert over non-matching cell ignored");
            return caret;
        }

        // Target is located in the template so filled cells keep their slot
        let Some(written) = self.template.position_of(placeholder, caret) else {
            return caret;
        };
        self.buffer.set(written, key);

        let next = self
            .template
            .next_placeholder_after(written)
            .unwrap_or(written + 1);
        tracing::trace!(%key, written, next, "insert applied");
        self.clamp(next)
    }

    fn erase(&mut self, range: Selection, caret: usize) -> EditResult {
        let caret = self.clamp(caret);
        let restored = self.buffer.restore(&self.template, range.start..range.end);
        tracing::trace!(?restored, caret, "erase applied");
        self.notify();
        self.result(caret)
    }

    fn clamp(&self, pos: usize) -> usize {
        pos.min(self.template.len())
    }

    fn result(&self, caret: usize) -> EditResult {
        EditResult {
            buffer: self.buffer.content(),
            caret,
        }
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let value = self.derive_value();
        for listener in &mut self.listeners {
            listener(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn phone() -> MaskEngine {
        MaskEngine::new("(__) ___-____", MaskOptions::default()).unwrap()
    }

    #[test]
    fn test_new_starts_unfilled() {
        let engine = phone();
        assert_eq!(engine.text(), "(__) ___-____");
        assert_eq!(engine.len(), 13);
    }

    #[test]
    fn test_empty_mask_is_error() {
        assert_eq!(
            MaskEngine::new("", MaskOptions::default()).unwrap_err(),
            MaskError::MissingMask
        );
        assert_eq!(
            MaskEngine::from_optional(None, MaskOptions::default()).unwrap_err(),
            MaskError::MissingMask
        );
    }

    #[test]
    fn test_insert_and_advance() {
        let mut engine = phone();
        let r = engine.apply_insert('5', 1);
        assert_eq!(r.buffer, "(5_) ___-____");
        assert_eq!(r.caret, 2);

        let r = engine.apply_insert('5', 2);
        assert_eq!(r.buffer, "(55) ___-____");
        assert_eq!(r.caret, 5);
    }

    #[test]
    fn test_insert_over_literal_is_noop() {
        let mut engine = phone();
        let r = engine.apply_insert('5', 0);
        assert_eq!(r.buffer, "(__) ___-____");
        assert_eq!(r.caret, 0);
    }

    #[test]
    fn test_letter_over_digit_placeholder_is_noop() {
        let mut engine = phone();
        let r = engine.apply_insert('a', 1);
        assert_eq!(r.buffer, "(__) ___-____");
        assert_eq!(r.caret, 1);
    }

    #[test]
    fn test_insert_last_cell_moves_past_end() {
        let mut engine = MaskEngine::new("-_", MaskOptions::default()).unwrap();
        let r = engine.apply_insert('9', 1);
        assert_eq!(r.buffer, "-9");
        assert_eq!(r.caret, 2);
    }

    #[test]
    fn test_insert_caret_beyond_end_clamps() {
        let mut engine = phone();
        let r = engine.apply_insert('1', 99);
        assert_eq!(r.buffer, "(__) ___-____");
        assert_eq!(r.caret, 13);
    }

    #[test]
    fn test_erase_backward_collapsed() {
        let mut engine = MaskEngine::new("_-_", MaskOptions::default()).unwrap();
        engine.apply_insert('1', 0);
        let r = engine.apply_erase_backward(1, 1);
        assert_eq!(r.buffer, "_-_");
        assert_eq!(r.caret, 0);
    }

    #[test]
    fn test_erase_forward_collapsed() {
        let mut engine = MaskEngine::new("__", MaskOptions::default()).unwrap();
        engine.apply_paste("12", 0);
        let r = engine.apply_erase_forward(0, 0);
        assert_eq!(r.buffer, "_2");
        assert_eq!(r.caret, 1);
    }

    #[test]
    fn test_erase_forward_at_end_clamps() {
        let mut engine = MaskEngine::new("__", MaskOptions::default()).unwrap();
        let r = engine.apply_erase_forward(2, 2);
        assert_eq!(r.buffer, "__");
        assert_eq!(r.caret, 2);
    }

    #[test]
    fn test_erase_backward_at_start() {
        let mut engine = MaskEngine::new("__", MaskOptions::default()).unwrap();
        let r = engine.apply_erase_backward(0, 0);
        assert_eq!(r.buffer, "__");
        assert_eq!(r.caret, 0);
    }

    #[test]
    fn test_erase_selection_restores_literals() {
        let mut engine = phone();
        engine.apply_paste("1234567890", 1);
        let r = engine.apply_erase_backward(2, 7);
        assert_eq!(r.buffer, "(1_) __5-6789");
        assert_eq!(r.caret, 2);
    }

    #[test]
    fn test_paste_drops_non_data_chars() {
        let mut engine = phone();
        let r = engine.apply_paste("+(12) 345-67-89 0", 1);
        assert_eq!(r.buffer, "(12) 345-6789");
        assert_eq!(r.caret, 13);
    }

    #[test]
    fn test_listeners_notified() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut engine = MaskEngine::new("__", MaskOptions::numeric()).unwrap();
        let sink = Rc::clone(&seen);
        engine.on_value_change(move |v| sink.borrow_mut().push(v.clone()));

        engine.apply_insert('4', 0);
        engine.apply_paste("2", 1);
        engine.apply_erase_backward(2, 2);

        assert_eq!(
            *seen.borrow(),
            vec![
                DerivedValue::Number(4.0),
                DerivedValue::Number(42.0),
                DerivedValue::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_disabled_ignores_edits() {
        let calls = Rc::new(RefCell::new(0));
        let mut engine = phone();
        let counter = Rc::clone(&calls);
        engine.on_value_change(move |_| *counter.borrow_mut() += 1);
        engine.set_disabled(true);

        let r = engine.apply_insert('1', 1);
        assert_eq!(r.buffer, "(__) ___-____");
        assert_eq!(r.caret, 1);
        assert_eq!(engine.apply_paste("123", 1).buffer, "(__) ___-____");
        assert_eq!(engine.apply_erase_forward(1, 1).caret, 1);
        assert_eq!(*calls.borrow(), 0);

        engine.set_disabled(false);
        assert_eq!(engine.apply_insert('1', 1).buffer, "(1_) ___-____");
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_write_value_conforming() {
        let mut engine = phone();
        engine.write_value("(12) 3__-____");
        assert_eq!(engine.text(), "(12) 3__-____");
    }

    #[test]
    fn test_write_value_refills_raw_digits() {
        let mut engine = phone();
        engine.write_value("5551234");
        assert_eq!(engine.text(), "(55) 512-34__");
    }

    #[test]
    fn test_clear() {
        let mut engine = phone();
        engine.apply_paste("12", 0);
        engine.clear();
        assert_eq!(engine.text(), "(__) ___-____");
    }

    #[test]
    fn test_apply_dispatch() {
        let mut engine = phone();
        let r = engine.apply(EditIntent::Insert { ch: '7', caret: 1 });
        assert_eq!(r.caret, 2);
        let r = engine.apply(EditIntent::EraseBackward(Selection::collapsed(2)));
        assert_eq!(r.buffer, "(__) ___-____");
        assert_eq!(r.caret, 1);
    }
}
