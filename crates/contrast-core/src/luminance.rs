//! Relative luminance boundary.
//!
//! The evaluator never derives luminance from pixel data. Hosts implement
//! [`Luminous`] for their own color type and the evaluator only sees the
//! resulting [`Luminance`].

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::warn;

use crate::error::ContrastError;

/// Relative luminance in the closed range `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Luminance(f64);

impl Luminance {
    /// Darkest possible luminance.
    pub const BLACK: Self = Self(0.0);
    /// Brightest possible luminance.
    pub const WHITE: Self = Self(1.0);

    /// Validate a luminance value.
    ///
    /// Values outside `[0, 1]` (and NaN) are rejected as-is; nothing is
    /// clamped, so upstream color-derivation bugs stay visible.
    pub fn new(value: f64) -> Result<Self, ContrastError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            #[cfg(feature = "tracing")]
            warn!(value, "rejected out-of-range luminance");
            Err(ContrastError::LuminanceOutOfRange { value })
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Luminance {
    type Error = ContrastError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Luminance> for f64 {
    fn from(value: Luminance) -> Self {
        value.0
    }
}

impl fmt::Display for Luminance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Anything able to report its relative luminance.
pub trait Luminous {
    fn relative_luminance(&self) -> Luminance;
}

impl Luminous for Luminance {
    #[inline]
    fn relative_luminance(&self) -> Luminance {
        *self
    }
}

impl<T: Luminous + ?Sized> Luminous for &T {
    #[inline]
    fn relative_luminance(&self) -> Luminance {
        (**self).relative_luminance()
    }
}
