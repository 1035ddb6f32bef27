//! Replaying scripted events against a [`MaskedField`].

use serde::Serialize;

use crate::cli::ReplayEvent;
use crate::field::{KeyOutcome, MaskedField};
use crate::mask::DerivedValue;

/// State of the field after one replayed event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub event: String,
    pub text: String,
    pub caret: usize,
    pub selection: (usize, usize),
    pub value: DerivedValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<KeyOutcome>,
}

impl ReplayStep {
    fn capture(field: &MaskedField, event: &ReplayEvent, outcome: Option<KeyOutcome>) -> Self {
        let sel = field.selection();
        Self {
            event: event.to_string(),
            text: field.text().to_string(),
            caret: field.caret(),
            selection: (sel.start, sel.end),
            value: field.value().clone(),
            outcome,
        }
    }
}

/// Apply a single event
pub fn apply_event(field: &mut MaskedField, event: &ReplayEvent) -> ReplayStep {
    let outcome = match event {
        ReplayEvent::Key(key) => Some(field.handle_key(key)),
        ReplayEvent::Paste(text) => Some(KeyOutcome::Edited(field.paste(text))),
        ReplayEvent::Select { start, end } => {
            field.select(*start, *end);
            None
        }
        ReplayEvent::Caret(pos) => {
            field.set_caret(*pos);
            None
        }
    };
    ReplayStep::capture(field, event, outcome)
}

/// Apply every event in order, collecting a step per event
pub fn replay(field: &mut MaskedField, events: &[ReplayEvent]) -> Vec<ReplayStep> {
    events.iter().map(|e| apply_event(field, e)).collect()
}

/// Render text with the caret as `|` or the selection in brackets
///
/// # Examples
///
/// ```
/// use inputmask::replay::render_with_caret;
///
/// assert_eq!(render_with_caret("(1_)", (2, 2)), "(1|_)");
/// assert_eq!(render_with_caret("1234", (1, 3)), "1[23]4");
/// ```
pub fn render_with_caret(text: &str, selection: (usize, usize)) -> String {
    let (start, end) = selection;
    let mut out = String::with_capacity(text.len() + 2);
    let mut count = 0;
    for (i, ch) in text.chars().enumerate() {
        if start == end && i == start {
            out.push('|');
        } else if start != end && i == start {
            out.push('[');
        } else if start != end && i == end {
            out.push(']');
        }
        out.push(ch);
        count = i + 1;
    }
    if start == end && start >= count {
        out.push('|');
    } else if start != end && end >= count {
        out.push(']');
    }
    out
}
