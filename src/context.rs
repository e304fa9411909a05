// src/context.rs
// Per-call configuration handed to every stage. Built once, up front, so that
// locale resolution errors surface before any text is touched.

use crate::locale::{self, ApproxMap, LocaleError};

/// Runtime context passed to every normalization stage.
///
/// Carries the resolved approximation overrides for this call. `None` means
/// only the default Latin table applies during transliteration.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub overrides: Option<ApproxMap>,
}

impl Context {
    /// Context with an explicit override table (caller-supplied or already
    /// resolved from a locale tag).
    #[inline]
    pub fn with_overrides(overrides: ApproxMap) -> Self {
        Self {
            overrides: Some(overrides),
        }
    }

    /// Resolve a registered locale into a context.
    ///
    /// Fails with [`LocaleError::Unknown`] when no table is registered under
    /// `tag` — never silently falls back to the defaults.
    pub fn for_locale(tag: &str) -> Result<Self, LocaleError> {
        Ok(Self::with_overrides(locale::resolve(tag)?))
    }
}
