//! Errors for mask construction.

/// Errors that can occur when creating a mask engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// No mask template was supplied (absent or empty)
    MissingMask,
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskError::MissingMask => write!(f, "an input mask requires a mask value"),
        }
    }
}

impl std::error::Error for MaskError {}
