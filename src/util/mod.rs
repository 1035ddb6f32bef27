//! Utility modules

pub mod text;

pub use text::{
    char_type, filter_data_chars, is_data_char, is_numeric_char, numeric_text, CharType,
};
