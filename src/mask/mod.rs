//! Masked text input engine.
//!
//! A mask is a fixed-length template of literal characters and two kinds of
//! placeholders (digit and any-character). The engine keeps a live buffer
//! that always has the template's shape and applies incremental edits to it:
//! - Single key insert
//! - Backspace / Delete over a caret or a selection
//! - Multi-character paste
//!
//! # Architecture
//!
//! - [`MaskTemplate`]: Immutable cell layout built from the mask string
//! - [`MaskBuffer`]: Live characters, index-aligned with the template
//! - [`MaskEngine`]: Owns both and applies [`EditIntent`]s
//! - [`MaskOptions`]: Placeholder characters and value mode
//! - [`DerivedValue`]: What the engine reports to value listeners
//!
//! # Example
//!
//! ```
//! use inputmask::mask::{MaskEngine, MaskOptions};
//!
//! let mut engine = MaskEngine::new("(__) ___-____", MaskOptions::default()).unwrap();
//!
//! let result = engine.apply_insert('5', 1);
//! assert_eq!(result.buffer, "(5_) ___-____");
//! assert_eq!(result.caret, 2);
//! ```

mod buffer;
mod engine;
mod error;
mod messages;
mod options;
mod selection;
mod template;
mod value;

pub use buffer::MaskBuffer;
pub use engine::{MaskEngine, ValueListener};
pub use error::MaskError;
pub use messages::{EditIntent, EditResult};
pub use options::{MaskOptions, DEFAULT_ANY_PLACEHOLDER, DEFAULT_NUMBER_PLACEHOLDER};
pub use selection::Selection;
pub use template::{Cell, MaskTemplate, PlaceholderClass};
pub use value::DerivedValue;
