//! inputmask - fixed-format masked text input
//!
//! This crate provides a pure mask-state transition engine (insert, erase,
//! paste over a literal/placeholder template) plus a small host surface and
//! replay tooling around it.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod field;
pub mod mask;
pub mod replay;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::MaskConfig;
pub use field::{KeyInput, MaskedField};
pub use mask::{DerivedValue, EditIntent, EditResult, MaskEngine, MaskError, MaskOptions};
