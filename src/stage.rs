//! Core transform stage abstraction.
//!
//! Every operation in the catalog is a `Stage`: a named transform over
//! `Cow<'a, str>` with a cheap, exact `needs_apply` pre-check. The pre-check
//! is a contract, not a hint — a stage must predict precisely whether `apply`
//! would change the text, which is what makes already-clean input flow through
//! a whole pipeline without a single allocation.
//!
//! All built-in stages are total functions over valid Unicode text; the error
//! type exists for the trait's sake so external stages can fail.

pub mod case;
pub mod clean;
pub mod separators;
pub mod to_ascii;
pub mod transliterate;
pub mod truncate;
pub mod word_chars;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("transform failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single transform step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in error messages.
    fn name(&self) -> &'static str;

    /// Exact pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
