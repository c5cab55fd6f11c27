#![forbid(unsafe_code)]

//! Contrast kernel: luminance inputs, WCAG ratio math, and verdicts.
//!
//! # Role in the workspace
//! `contrast-core` is the pure evaluator. It takes two relative luminance
//! values, computes the WCAG contrast ratio, and judges it against a
//! threshold. It never derives luminance from pixels and never renders.
//!
//! # Primary responsibilities
//! - **Luminance / Threshold**: validated boundary types that reject
//!   out-of-domain input instead of clamping it.
//! - **compute_ratio / is_accessible**: the raw formula and verdict.
//! - **ContrastEvaluator**: a threshold-carrying evaluator producing
//!   immutable [`ContrastResult`] values.
//! - **EvaluatorConfig**: env-overridable evaluator settings.
//!
//! # How it fits in the system
//! A host UI framework implements [`Luminous`] for its own color type and
//! hands colors to a [`ContrastEvaluator`]. The resulting [`ContrastResult`]
//! is consumed by `contrast-label`, which formats pass/fail labels.

pub mod config;
pub mod error;
pub mod luminance;
pub mod ratio;

pub use config::{ConfigError, EvaluatorConfig, EvaluatorConfigParse};
pub use error::ContrastError;
pub use luminance::{Luminance, Luminous};
pub use ratio::{
    ContrastEvaluator, ContrastResult, FLARE, MAX_RATIO, MIN_RATIO, TextSize, Threshold,
    compute_ratio, is_accessible, is_accessible_default,
};
