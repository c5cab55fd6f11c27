//! Pass/fail label text.

use std::fmt;

use contrast_core::ContrastResult;

use crate::config::LabelConfig;

/// Displayable verdict for one result, e.g. `PASS (4.53)` or `FAIL`.
#[derive(Debug, Clone, Copy)]
pub struct VerdictLabel<'a> {
    result: ContrastResult,
    config: &'a LabelConfig,
}

impl<'a> VerdictLabel<'a> {
    #[must_use]
    pub fn new(result: &ContrastResult, config: &'a LabelConfig) -> Self {
        Self {
            result: *result,
            config,
        }
    }

    #[must_use]
    pub const fn passes(&self) -> bool {
        self.result.passes()
    }

    fn shows_ratio(&self) -> bool {
        self.result.passes() || self.config.ratio_on_fail
    }
}

impl fmt::Display for VerdictLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = if self.result.passes() {
            &self.config.pass_text
        } else {
            &self.config.fail_text
        };
        if self.shows_ratio() {
            write!(
                f,
                "{word} ({:.prec$})",
                self.result.ratio(),
                prec = self.config.precision
            )
        } else {
            f.write_str(word)
        }
    }
}
