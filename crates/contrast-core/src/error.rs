#![forbid(unsafe_code)]

//! Errors raised at the evaluator boundary.

use std::fmt;

/// Errors from constructing evaluator inputs.
///
/// In-domain evaluation is total; these only describe rejected input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContrastError {
    /// A luminance value was NaN or outside `[0, 1]`.
    LuminanceOutOfRange { value: f64 },
    /// A threshold was NaN or infinite.
    InvalidThreshold { value: f64 },
    /// A stored ratio was NaN or outside `[1, 21]`.
    RatioOutOfRange { value: f64 },
}

impl fmt::Display for ContrastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LuminanceOutOfRange { value } => {
                write!(f, "luminance {value} is outside [0, 1]")
            }
            Self::InvalidThreshold { value } => {
                write!(f, "threshold {value} is not a finite ratio")
            }
            Self::RatioOutOfRange { value } => {
                write!(f, "contrast ratio {value} is outside [1, 21]")
            }
        }
    }
}

impl std::error::Error for ContrastError {}
