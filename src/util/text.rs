//! Character classification for masked input

use std::borrow::Cow;

/// Character class as seen by the key filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Base-10 digit
    Digit,
    /// Letter (any script)
    Letter,
    /// Punctuation, whitespace and everything else
    Other,
}

/// Get the character type for key filtering
pub fn char_type(ch: char) -> CharType {
    if ch.is_ascii_digit() {
        CharType::Digit
    } else if ch.is_alphabetic() {
        CharType::Letter
    } else {
        CharType::Other
    }
}

/// Check if a character can be typed into a mask (letter or digit)
pub fn is_data_char(ch: char) -> bool {
    char_type(ch) != CharType::Other
}

/// Check if a character survives numeric value derivation
pub fn is_numeric_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == ','
}

/// Drop every character that is not a letter or digit.
///
/// Returns a `Cow::Borrowed` if nothing needs to be dropped (fast path).
///
/// # Examples
///
/// ```
/// use inputmask::util::filter_data_chars;
///
/// assert_eq!(filter_data_chars("12ab"), "12ab");
/// assert_eq!(filter_data_chars("+1 (555) 010-99"), "155501099");
/// ```
pub fn filter_data_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_data_char) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| is_data_char(*c)).collect())
}

/// Keep digits and decimal separators, normalizing `,` to `.`
///
/// # Examples
///
/// ```
/// use inputmask::util::numeric_text;
///
/// assert_eq!(numeric_text("(12) 3_"), "123");
/// assert_eq!(numeric_text("1 234,5 EUR"), "1234.5");
/// ```
pub fn numeric_text(s: &str) -> String {
    s.chars()
        .filter(|c| is_numeric_char(*c))
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}
