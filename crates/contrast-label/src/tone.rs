//! Label tones and their colors.

use std::fmt;

use contrast_core::ContrastResult;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// `#RRGGBB`, uppercase.
    #[must_use]
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.as_key())
    }
}

/// Text color for a verdict label.
///
/// Derived from `ContrastResult::passes` on its own, independently of the
/// label text, so a host may use either without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelTone {
    /// Passing pair, white text.
    #[default]
    Normal,
    /// Failing pair, yellow text.
    Warning,
}

impl LabelTone {
    #[must_use]
    pub const fn for_result(result: &ContrastResult) -> Self {
        if result.passes() {
            Self::Normal
        } else {
            Self::Warning
        }
    }

    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Normal => Rgb::WHITE,
            Self::Warning => Rgb::YELLOW,
        }
    }

    #[must_use]
    pub fn hex(self) -> String {
        self.rgb().hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contrast_core::{ContrastEvaluator, Luminance};

    fn evaluate(a: f64, b: f64) -> ContrastResult {
        ContrastEvaluator::default().try_evaluate(a, b).unwrap()
    }

    #[test]
    fn rgb_as_key_is_unique() {
        let a = Rgb::new(1, 2, 3);
        let b = Rgb::new(3, 2, 1);
        assert_ne!(a.as_key(), b.as_key());
        assert_eq!(a.as_key(), Rgb::new(1, 2, 3).as_key());
    }

    #[test]
    fn rgb_hex_is_zero_padded() {
        assert_eq!(Rgb::new(0, 0, 15).hex(), "#00000F");
        assert_eq!(Rgb::WHITE.to_string(), "#FFFFFF");
        assert_eq!(Rgb::YELLOW.hex(), Rgb::YELLOW.to_string());
    }

    #[test]
    fn passing_result_is_white() {
        let tone = LabelTone::for_result(&evaluate(0.8, 0.1));
        assert_eq!(tone, LabelTone::Normal);
        assert_eq!(tone.hex(), "#FFFFFF");
    }

    #[test]
    fn failing_result_is_yellow() {
        let tone = LabelTone::for_result(&evaluate(0.3, 0.2));
        assert_eq!(tone, LabelTone::Warning);
        assert_eq!(tone.hex(), "#FFFF00");
    }

    #[test]
    fn tone_follows_the_result_threshold() {
        let (a, b) = (Luminance::new(0.5).unwrap(), Luminance::new(0.1).unwrap());
        let large = ContrastEvaluator::large_text().evaluate(&a, &b);
        let normal = ContrastEvaluator::default().evaluate(&a, &b);
        assert_eq!(LabelTone::for_result(&large), LabelTone::Normal);
        assert_eq!(LabelTone::for_result(&normal), LabelTone::Warning);
    }
}
