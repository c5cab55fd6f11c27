//! Label configuration (deterministic, env-overridable).

use std::env;

use contrast_core::{ConfigError, ContrastResult};
use tracing::warn;

use crate::label::VerdictLabel;

const ENV_LABEL_PRECISION: &str = "CONTRAST_LABEL_PRECISION";
const ENV_LABEL_RATIO_ON_FAIL: &str = "CONTRAST_LABEL_RATIO_ON_FAIL";
const ENV_LABEL_PASS_TEXT: &str = "CONTRAST_LABEL_PASS_TEXT";
const ENV_LABEL_FAIL_TEXT: &str = "CONTRAST_LABEL_FAIL_TEXT";

/// Largest accepted ratio precision.
pub const MAX_PRECISION: usize = 6;

/// How verdict labels are rendered.
///
/// # Environment Variables
/// - `CONTRAST_LABEL_PRECISION` (usize, 0..=6)
/// - `CONTRAST_LABEL_RATIO_ON_FAIL` (bool)
/// - `CONTRAST_LABEL_PASS_TEXT` (non-empty string)
/// - `CONTRAST_LABEL_FAIL_TEXT` (non-empty string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    /// Decimal places for the ratio.
    pub precision: usize,
    /// Append the ratio to failing labels too.
    pub ratio_on_fail: bool,
    pub pass_text: String,
    pub fail_text: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            ratio_on_fail: false,
            pass_text: "PASS".to_string(),
            fail_text: "FAIL".to_string(),
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct LabelConfigParse {
    pub config: LabelConfig,
    pub errors: Vec<ConfigError>,
}

impl LabelConfigParse {
    /// Log every diagnostic at `warn` and keep the parsed config.
    #[must_use]
    pub fn into_logged(self) -> LabelConfig {
        for error in &self.errors {
            warn!(field = error.field, value = %error.value, "{}", error.message);
        }
        self.config
    }
}

impl LabelConfig {
    /// Parse config from environment variables, logging any diagnostics.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().into_logged()
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> LabelConfigParse {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse config through a custom environment lookup.
    #[must_use]
    pub fn from_lookup<F>(mut get: F) -> LabelConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_LABEL_PRECISION) {
            match parse_usize(&value) {
                Some(parsed) => config.precision = parsed,
                None => errors.push(ConfigError::new(
                    "precision",
                    value,
                    "expected non-negative integer",
                )),
            }
        }

        if let Some(value) = get(ENV_LABEL_RATIO_ON_FAIL) {
            match parse_bool(&value) {
                Some(parsed) => config.ratio_on_fail = parsed,
                None => errors.push(ConfigError::new(
                    "ratio_on_fail",
                    value,
                    "expected bool (1/0/true/false)",
                )),
            }
        }

        if let Some(value) = get(ENV_LABEL_PASS_TEXT) {
            config.pass_text = value.trim().to_string();
        }

        if let Some(value) = get(ENV_LABEL_FAIL_TEXT) {
            config.fail_text = value.trim().to_string();
        }

        if let Err(validation) = config.validate() {
            let defaults = Self::default();
            for error in &validation {
                match error.field {
                    "precision" => config.precision = defaults.precision,
                    "pass_text" => config.pass_text = defaults.pass_text.clone(),
                    "fail_text" => config.fail_text = defaults.fail_text.clone(),
                    _ => {}
                }
            }
            errors.extend(validation);
        }

        LabelConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.precision > MAX_PRECISION {
            errors.push(ConfigError::new(
                "precision",
                self.precision.to_string(),
                format!("precision must be at most {MAX_PRECISION}"),
            ));
        }
        validate_non_empty("pass_text", &self.pass_text, &mut errors);
        validate_non_empty("fail_text", &self.fail_text, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render the label for one result.
    #[must_use]
    pub fn render(&self, result: &ContrastResult) -> String {
        VerdictLabel::new(result, self).to_string()
    }

    /// Short human-readable summary for debug overlays.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let on_fail = if self.ratio_on_fail { "ratio" } else { "bare" };
        format!(
            "Labels: {}/{} · {} dp · fail {on_fail}",
            self.pass_text, self.fail_text, self.precision
        )
    }
}

fn validate_non_empty(field: &'static str, value: &str, errors: &mut Vec<ConfigError>) {
    if value.is_empty() {
        errors.push(ConfigError::new(field, value, "must not be empty"));
    }
}

#[inline]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[inline]
fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(vars: &[(&str, &str)]) -> LabelConfigParse {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        LabelConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let parsed = parse(&[]);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config, LabelConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let parsed = parse(&[
            ("CONTRAST_LABEL_PRECISION", "1"),
            ("CONTRAST_LABEL_RATIO_ON_FAIL", "yes"),
            ("CONTRAST_LABEL_PASS_TEXT", " OK "),
            ("CONTRAST_LABEL_FAIL_TEXT", "LOW"),
        ]);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        assert_eq!(parsed.config.precision, 1);
        assert!(parsed.config.ratio_on_fail);
        assert_eq!(parsed.config.pass_text, "OK");
        assert_eq!(parsed.config.fail_text, "LOW");
    }

    #[test]
    fn unparseable_values_keep_defaults() {
        let parsed = parse(&[
            ("CONTRAST_LABEL_PRECISION", "-1"),
            ("CONTRAST_LABEL_RATIO_ON_FAIL", "maybe"),
        ]);
        assert_eq!(parsed.config, LabelConfig::default());
        let fields: Vec<_> = parsed.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["precision", "ratio_on_fail"]);
    }

    #[test]
    fn validation_resets_offending_fields() {
        let parsed = parse(&[
            ("CONTRAST_LABEL_PRECISION", "9"),
            ("CONTRAST_LABEL_PASS_TEXT", "   "),
        ]);
        assert_eq!(parsed.config, LabelConfig::default());
        let fields: Vec<_> = parsed.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["precision", "pass_text"]);
    }

    #[test]
    fn summary_short() {
        assert_eq!(
            LabelConfig::default().summary_short(),
            "Labels: PASS/FAIL · 2 dp · fail bare"
        );
    }
}
