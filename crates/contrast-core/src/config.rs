//! Evaluator configuration (deterministic, env-overridable).

use std::env;
use std::fmt;

#[cfg(feature = "tracing")]
use tracing::warn;

use crate::ratio::{ContrastEvaluator, MIN_RATIO, TextSize, Threshold};

const ENV_TEXT_SIZE: &str = "CONTRAST_TEXT_SIZE";
const ENV_THRESHOLD: &str = "CONTRAST_THRESHOLD";

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    pub fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Evaluator settings.
///
/// # Environment Variables
/// - `CONTRAST_TEXT_SIZE` = normal|large
/// - `CONTRAST_THRESHOLD` (f64, overrides the text-size threshold)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvaluatorConfig {
    pub text_size: TextSize,
    pub threshold_override: Option<Threshold>,
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct EvaluatorConfigParse {
    pub config: EvaluatorConfig,
    pub errors: Vec<ConfigError>,
}

impl EvaluatorConfigParse {
    /// Log every diagnostic at `warn` (with the `tracing` feature) and keep
    /// the parsed config.
    #[must_use]
    pub fn into_logged(self) -> EvaluatorConfig {
        #[cfg(feature = "tracing")]
        for error in &self.errors {
            warn!(field = error.field, value = %error.value, "{}", error.message);
        }
        self.config
    }
}

impl EvaluatorConfig {
    /// Parse config from environment variables, logging any diagnostics.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().into_logged()
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> EvaluatorConfigParse {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse config through a custom environment lookup.
    #[must_use]
    pub fn from_lookup<F>(mut get: F) -> EvaluatorConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_TEXT_SIZE) {
            match TextSize::parse(&value) {
                Some(parsed) => config.text_size = parsed,
                None => errors.push(ConfigError::new(
                    "text_size",
                    value,
                    "expected normal|large",
                )),
            }
        }

        if let Some(value) = get(ENV_THRESHOLD) {
            match parse_f64(&value).and_then(|raw| Threshold::new(raw).ok()) {
                Some(parsed) => config.threshold_override = Some(parsed),
                None => errors.push(ConfigError::new(
                    "threshold",
                    value,
                    "expected finite ratio",
                )),
            }
        }

        if let Err(mut validation) = config.validate() {
            // Keep the text-size default rather than a threshold nothing can fail.
            config.threshold_override = None;
            errors.append(&mut validation);
        }

        EvaluatorConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if let Some(threshold) = self.threshold_override.filter(|t| t.get() < MIN_RATIO) {
            errors.push(ConfigError::new(
                "threshold",
                threshold.get().to_string(),
                "threshold below 1.0 passes every pair",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Effective threshold: the override if set, otherwise the text-size minimum.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold_override
            .unwrap_or_else(|| self.text_size.threshold())
    }

    #[must_use]
    pub fn evaluator(&self) -> ContrastEvaluator {
        ContrastEvaluator::new(self.threshold())
    }

    /// Short human-readable summary for debug overlays.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let source = if self.threshold_override.is_some() {
            "override"
        } else {
            "wcag"
        };
        format!(
            "Contrast: {} · {} ({source})",
            self.text_size,
            self.threshold()
        )
    }
}

#[inline]
fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}
