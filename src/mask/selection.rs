//! Selection ranges for erase intents.

/// A character range reported by the host surface.
///
/// The range is always normalized such that `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Start character index (inclusive)
    pub start: usize,
    /// End character index (exclusive)
    pub end: usize,
}

impl Selection {
    /// Create a new selection, normalizing so `start <= end`
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends to `[0, len]`
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Widen a collapsed selection one character to the left.
    /// Non-empty selections are returned unchanged.
    pub fn expand_backward(self) -> Self {
        if self.is_empty() {
            Self::new(self.start.saturating_sub(1), self.end)
        } else {
            self
        }
    }

    /// Widen a collapsed selection one character to the right.
    /// Non-empty selections are returned unchanged.
    pub fn expand_forward(self) -> Self {
        if self.is_empty() {
            Self::new(self.start, self.end.saturating_add(1))
        } else {
            self
        }
    }
}

impl From<std::ops::Range<usize>> for Selection {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_normalizes() {
        let sel = Selection::new(10, 5);
        assert_eq!(sel.start, 5);
        assert_eq!(sel.end, 10);
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_expand_collapsed() {
        assert_eq!(Selection::collapsed(3).expand_backward(), Selection::new(2, 3));
        assert_eq!(Selection::collapsed(3).expand_forward(), Selection::new(3, 4));
    }

    #[test]
    fn test_expand_at_start_saturates() {
        let sel = Selection::collapsed(0).expand_backward();
        assert!(sel.is_empty());
        assert_eq!(sel.start, 0);
    }

    #[test]
    fn test_expand_leaves_ranges_alone() {
        let sel = Selection::new(1, 4);
        assert_eq!(sel.expand_backward(), sel);
        assert_eq!(sel.expand_forward(), sel);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Selection::new(2, 40).clamped(5), Selection::new(2, 5));
        assert_eq!(Selection::new(9, 40).clamped(5), Selection::collapsed(5));
    }

    #[test]
    fn test_from_range() {
        assert_eq!(Selection::from(5..2), Selection::new(2, 5));
    }
}
