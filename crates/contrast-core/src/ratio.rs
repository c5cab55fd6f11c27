#![forbid(unsafe_code)]

//! WCAG contrast ratio and threshold verdicts.
//!
//! # Invariants
//!
//! 1. **Bounded**: for luminances in `[0, 1]` the ratio lies in
//!    `[MIN_RATIO, MAX_RATIO]`, and `compute_ratio(1.0, 0.0)` is exactly 21.
//!
//! 2. **Symmetric**: argument order never changes the ratio; the formula
//!    sorts its inputs with `max`/`min` before dividing.
//!
//! 3. **Total**: the `FLARE` offset keeps the denominator at or above 0.05,
//!    so in-domain evaluation cannot fail or divide by zero.
//!
//! # Usage
//!
//! ```
//! use contrast_core::{ContrastEvaluator, Luminance, Threshold};
//!
//! let evaluator = ContrastEvaluator::new(Threshold::AA_NORMAL_TEXT);
//! let fg = Luminance::new(0.8).unwrap();
//! let bg = Luminance::new(0.1).unwrap();
//!
//! let result = evaluator.evaluate(&fg, &bg);
//! assert!(result.passes());
//! assert!((result.ratio() - 5.667).abs() < 1e-3);
//! ```

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::{trace, warn};

use crate::error::ContrastError;
use crate::luminance::{Luminance, Luminous};

/// Black-level flare added to both luminances before dividing.
pub const FLARE: f64 = 0.05;
/// Ratio of two identical luminances.
pub const MIN_RATIO: f64 = 1.0;
/// Ratio of white against black.
pub const MAX_RATIO: f64 = 21.0;

/// Contrast ratio between two relative luminances.
///
/// Both inputs must lie in `[0, 1]`; anything else is a caller contract
/// violation. No clamping happens here. Use [`ContrastEvaluator::try_evaluate`]
/// when the inputs come from an unchecked source.
#[inline]
#[must_use]
pub fn compute_ratio(luminance_a: f64, luminance_b: f64) -> f64 {
    debug_assert!(
        (0.0..=1.0).contains(&luminance_a),
        "luminance_a out of range: {luminance_a}"
    );
    debug_assert!(
        (0.0..=1.0).contains(&luminance_b),
        "luminance_b out of range: {luminance_b}"
    );
    let brightest = luminance_a.max(luminance_b);
    let darkest = luminance_a.min(luminance_b);
    (brightest + FLARE) / (darkest + FLARE)
}

/// `true` when the pair reaches `threshold`.
#[inline]
#[must_use]
pub fn is_accessible(luminance_a: f64, luminance_b: f64, threshold: f64) -> bool {
    compute_ratio(luminance_a, luminance_b) >= threshold
}

/// [`is_accessible`] against the normal-text minimum (4.5:1).
#[inline]
#[must_use]
pub fn is_accessible_default(luminance_a: f64, luminance_b: f64) -> bool {
    is_accessible(luminance_a, luminance_b, Threshold::AA_NORMAL_TEXT.get())
}

/// Minimum contrast ratio a pair must reach.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Threshold(f64);

impl Threshold {
    /// WCAG AA, normal-size text.
    pub const AA_NORMAL_TEXT: Self = Self(4.5);
    /// WCAG AA, large text.
    pub const AA_LARGE_TEXT: Self = Self(3.0);
    /// WCAG AAA, normal-size text.
    pub const AAA_NORMAL_TEXT: Self = Self(7.0);
    /// WCAG AAA, large text.
    pub const AAA_LARGE_TEXT: Self = Self(4.5);

    /// Any finite ratio is accepted. Values at or below 1.0 make every
    /// pair pass, which is legal if unusual.
    pub fn new(value: f64) -> Result<Self, ContrastError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            #[cfg(feature = "tracing")]
            warn!(value, "rejected non-finite threshold");
            Err(ContrastError::InvalidThreshold { value })
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::AA_NORMAL_TEXT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ContrastError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(value: Threshold) -> Self {
        value.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:1", self.0)
    }
}

/// Text size class that picks the AA threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl TextSize {
    #[must_use]
    pub const fn threshold(self) -> Threshold {
        match self {
            Self::Normal => Threshold::AA_NORMAL_TEXT,
            Self::Large => Threshold::AA_LARGE_TEXT,
        }
    }

    /// Parse `normal` / `large` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one evaluation. Created per call and never mutated.
///
/// Deserialized results are re-validated: the ratio must lie in
/// `[MIN_RATIO, MAX_RATIO]` and the verdict is recomputed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawContrastResult"))]
pub struct ContrastResult {
    ratio: f64,
    passes: bool,
    threshold: Threshold,
}

impl ContrastResult {
    /// Contrast ratio, always `>= 1.0`.
    #[inline]
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    #[inline]
    #[must_use]
    pub const fn passes(&self) -> bool {
        self.passes
    }

    /// Threshold the verdict was judged against.
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }
}

/// Wire shape of [`ContrastResult`]; any incoming `passes` is ignored.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawContrastResult {
    ratio: f64,
    threshold: Threshold,
}

#[cfg(feature = "serde")]
impl TryFrom<RawContrastResult> for ContrastResult {
    type Error = ContrastError;

    fn try_from(raw: RawContrastResult) -> Result<Self, Self::Error> {
        if !(MIN_RATIO..=MAX_RATIO).contains(&raw.ratio) {
            return Err(ContrastError::RatioOutOfRange { value: raw.ratio });
        }
        Ok(Self {
            ratio: raw.ratio,
            passes: raw.ratio >= raw.threshold.get(),
            threshold: raw.threshold,
        })
    }
}

impl fmt::Display for ContrastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passes { "pass" } else { "fail" };
        write!(f, "{:.2}:1 ({verdict} at {})", self.ratio, self.threshold)
    }
}

/// Threshold-carrying contrast evaluator.
///
/// Stateless apart from its threshold; `Copy` and safe to share across
/// threads without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContrastEvaluator {
    threshold: Threshold,
}

impl ContrastEvaluator {
    #[must_use]
    pub const fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    /// Evaluator using the large-text minimum (3.0:1).
    #[must_use]
    pub const fn large_text() -> Self {
        Self::new(Threshold::AA_LARGE_TEXT)
    }

    #[must_use]
    pub const fn for_text_size(size: TextSize) -> Self {
        Self::new(size.threshold())
    }

    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Ratio between two luminous values, ignoring the threshold.
    #[inline]
    #[must_use]
    pub fn ratio<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: Luminous + ?Sized,
        B: Luminous + ?Sized,
    {
        compute_ratio(a.relative_luminance().get(), b.relative_luminance().get())
    }

    /// Evaluate two validated colors.
    #[must_use]
    pub fn evaluate<A, B>(&self, a: &A, b: &B) -> ContrastResult
    where
        A: Luminous + ?Sized,
        B: Luminous + ?Sized,
    {
        let ratio = self.ratio(a, b);
        let passes = ratio >= self.threshold.get();

        #[cfg(feature = "tracing")]
        trace!(
            ratio,
            passes,
            threshold = self.threshold.get(),
            "contrast evaluated"
        );

        ContrastResult {
            ratio,
            passes,
            threshold: self.threshold,
        }
    }

    /// Validate raw luminances, then evaluate.
    pub fn try_evaluate(
        &self,
        luminance_a: f64,
        luminance_b: f64,
    ) -> Result<ContrastResult, ContrastError> {
        let a = Luminance::new(luminance_a)?;
        let b = Luminance::new(luminance_b)?;
        Ok(self.evaluate(&a, &b))
    }
}
