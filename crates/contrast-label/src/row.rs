//! Dashboard rows: one named foreground/background role pair per row.

use contrast_core::{ContrastEvaluator, ContrastResult, Luminous};
use tracing::debug_span;

use crate::config::LabelConfig;
use crate::label::VerdictLabel;
use crate::tone::LabelTone;

/// A single evaluated role pair, e.g. `onPrimary/primary`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastRow {
    pub role: String,
    pub result: ContrastResult,
}

impl ContrastRow {
    #[must_use]
    pub fn new(role: impl Into<String>, result: ContrastResult) -> Self {
        Self {
            role: role.into(),
            result,
        }
    }

    /// Evaluate `foreground` against `background` and name the row.
    #[must_use]
    pub fn evaluate<F, B>(
        evaluator: &ContrastEvaluator,
        role: impl Into<String>,
        foreground: &F,
        background: &B,
    ) -> Self
    where
        F: Luminous + ?Sized,
        B: Luminous + ?Sized,
    {
        Self::new(role, evaluator.evaluate(foreground, background))
    }

    #[must_use]
    pub fn tone(&self) -> LabelTone {
        LabelTone::for_result(&self.result)
    }

    #[must_use]
    pub fn label<'a>(&self, config: &'a LabelConfig) -> VerdictLabel<'a> {
        VerdictLabel::new(&self.result, config)
    }

    /// `"{role}: {label}"`.
    #[must_use]
    pub fn render(&self, config: &LabelConfig) -> String {
        let _span = debug_span!(
            "contrast_row_render",
            role = %self.role,
            ratio = self.result.ratio(),
            passes = self.result.passes()
        )
        .entered();
        format!("{}: {}", self.role, self.label(config))
    }
}
