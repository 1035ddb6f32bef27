//! Live masked buffer, index-aligned with its template.

use std::ops::Range;

use super::template::MaskTemplate;

/// Mutable character buffer with the same length as the template.
///
/// Only the engine writes to it; literal cells are never overwritten with
/// anything but their own literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskBuffer {
    chars: Vec<char>,
}

impl MaskBuffer {
    /// Fully unfilled buffer (equal to the template)
    pub fn from_template(template: &MaskTemplate) -> Self {
        Self {
            chars: template.chars().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at position, None if out of bounds
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Write a single character. Out of bounds writes are ignored.
    pub fn set(&mut self, index: usize, ch: char) {
        if let Some(slot) = self.chars.get_mut(index) {
            *slot = ch;
        }
    }

    /// Restore a range to the template characters (clamped).
    ///
    /// Returns the range that was actually restored.
    pub fn restore(&mut self, template: &MaskTemplate, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.chars[start..end].copy_from_slice(template.span(start, end));
        start..end
    }

    /// Reset every cell to the template
    pub fn reset(&mut self, template: &MaskTemplate) {
        self.chars.clear();
        self.chars.extend_from_slice(template.chars());
    }

    /// Replace the whole buffer. Caller guarantees the text conforms.
    pub(crate) fn overwrite(&mut self, text: &str) {
        self.chars.clear();
        self.chars.extend(text.chars());
    }

    /// Full content as String
    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }
}

impl std::fmt::Display for MaskBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::MaskOptions;

    fn template(mask: &str) -> MaskTemplate {
        MaskTemplate::parse(mask, &MaskOptions::default()).unwrap()
    }

    #[test]
    fn test_starts_unfilled() {
        let t = template("(__) ___");
        let b = MaskBuffer::from_template(&t);
        assert_eq!(b.content(), "(__) ___");
        assert_eq!(b.len(), t.len());
    }

    #[test]
    fn test_set_ignores_out_of_bounds() {
        let t = template("__");
        let mut b = MaskBuffer::from_template(&t);
        b.set(1, '7');
        b.set(5, '9');
        assert_eq!(b.content(), "_7");
    }

    #[test]
    fn test_restore_range() {
        let t = template("__-__");
        let mut b = MaskBuffer::from_template(&t);
        for (i, ch) in ['1', '2', '-', '3', '4'].into_iter().enumerate() {
            b.set(i, ch);
        }
        let restored = b.restore(&t, 1..4);
        assert_eq!(restored, 1..4);
        assert_eq!(b.content(), "1_-_4");
    }

    #[test]
    fn test_restore_clamps_and_handles_empty() {
        let t = template("__");
        let mut b = MaskBuffer::from_template(&t);
        b.set(0, '1');
        b.set(1, '2');
        assert_eq!(b.restore(&t, 1..10), 1..2);
        assert_eq!(b.content(), "1_");
        assert_eq!(b.restore(&t, 7..9), 2..2);
        assert_eq!(b.content(), "1_");
    }

    #[test]
    fn test_reset() {
        let t = template("_/_");
        let mut b = MaskBuffer::from_template(&t);
        b.set(0, '3');
        b.reset(&t);
        assert_eq!(b.to_string(), "_/_");
    }
}
