//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use inputmask::mask::{Cell, MaskEngine, MaskOptions};

pub const PHONE: &str = "(__) ___-____";
pub const DATE: &str = "__/__/____";

/// Create an engine with default options
pub fn engine(mask: &str) -> MaskEngine {
    MaskEngine::new(mask, MaskOptions::default()).unwrap()
}

/// Create a numeric-mode engine with default placeholders
pub fn numeric_engine(mask: &str) -> MaskEngine {
    MaskEngine::new(mask, MaskOptions::numeric()).unwrap()
}

/// Create an engine whose buffer already holds `data` pasted at the first
/// placeholder
pub fn filled_engine(mask: &str, data: &str) -> MaskEngine {
    let mut engine = engine(mask);
    let start = engine.template().first_placeholder().unwrap_or(0);
    engine.apply_paste(data, start);
    engine
}

/// Check the template invariant: every literal cell shows its literal and
/// the buffer length equals the template length
pub fn assert_conforms(engine: &MaskEngine) {
    let template = engine.template();
    let buffer: Vec<char> = engine.text().chars().collect();
    assert_eq!(buffer.len(), template.len(), "length drifted");
    for (i, cell) in template.cells().iter().enumerate() {
        if let Cell::Literal(lit) = cell {
            assert_eq!(
                buffer[i], *lit,
                "literal {:?} at {} overwritten in {:?}",
                lit,
                i,
                engine.text()
            );
        }
    }
}
