#![forbid(unsafe_code)]

//! Presentation boundary for contrast verdicts.
//!
//! This crate provides:
//! - [`VerdictLabel`] for `PASS (4.53)` / `FAIL` label text
//! - [`LabelTone`] for the label text color, derived from the verdict alone
//! - [`ContrastRow`] for one named role pair in an accessibility dashboard
//! - [`LabelConfig`] for env-overridable label settings

pub mod config;
pub mod label;
pub mod row;
pub mod tone;

pub use config::{LabelConfig, LabelConfigParse, MAX_PRECISION};
pub use label::VerdictLabel;
pub use row::ContrastRow;
pub use tone::{LabelTone, Rgb};
