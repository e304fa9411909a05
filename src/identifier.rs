//! The text value under transformation.
//!
//! An [`Identifier`] is always valid Unicode: construction repairs mis-encoded
//! bytes and applies canonical composition, so every later transform operates
//! on clean scalar values. Each operation comes in two forms — a pure one
//! returning a fresh value (`clean`, `truncate`, …) and an in-place one
//! (`clean_mut`, `truncate_mut`, …) returning the mutated text. The pure forms
//! copy state first and never alias the source.

use crate::{
    locale::LocaleError,
    options::{NormalizeOptions, Transliterations},
    repair,
    stage::{
        StageError,
        case::{Downcase, Upcase},
        clean::Clean,
        separators::WithSeparators,
        to_ascii::ToAscii,
        transliterate::Transliterate,
        truncate::{Truncate, TruncateBytes},
        word_chars::WORD_CHARS,
    },
};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlugError {
    #[error("locale error: {0}")]
    Locale(#[from] LocaleError),
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Identifier {
    text: String,
}

impl Identifier {
    /// Build from text, applying canonical composition so combining
    /// sequences become precomposed codepoints.
    pub fn new(input: impl AsRef<str>) -> Self {
        Self {
            text: repair::compose(Cow::Borrowed(input.as_ref())).into_owned(),
        }
    }

    /// Build from raw bytes: legacy-encoding repair first, composition after.
    /// Total over arbitrary binary input.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            text: repair::compose(repair::tidy(bytes)).into_owned(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in encoded bytes (what `max_length` budgets against).
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Run one borrowing transform and store the result only if it changed.
    /// Truncating stages shorten by subslicing, so a borrowed result with a
    /// different length is a change too.
    fn rewrite(&mut self, f: impl FnOnce(Cow<'_, str>) -> Cow<'_, str>) -> &str {
        let replacement = match f(Cow::Borrowed(&self.text)) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(s) if s.len() != self.text.len() => Some(s.to_owned()),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replacement {
            self.text = s;
        }
        &self.text
    }

    // ── transliterate ───────────────────────────────────────────────

    pub fn transliterate_mut(&mut self, t: &Transliterations) -> Result<&str, SlugError> {
        let ctx = t.resolve()?;
        Ok(self.rewrite(|text| Transliterate.run(text, &ctx)))
    }

    pub fn transliterate(&self, t: &Transliterations) -> Result<Identifier, SlugError> {
        let mut copy = self.clone();
        copy.transliterate_mut(t)?;
        Ok(copy)
    }

    // ── single-step transforms ──────────────────────────────────────

    pub fn to_ascii_mut(&mut self) -> &str {
        self.rewrite(|text| ToAscii.run(text))
    }

    pub fn to_ascii(&self) -> Identifier {
        let mut copy = self.clone();
        copy.to_ascii_mut();
        copy
    }

    pub fn clean_mut(&mut self) -> &str {
        self.rewrite(|text| Clean.run(text))
    }

    pub fn clean(&self) -> Identifier {
        let mut copy = self.clone();
        copy.clean_mut();
        copy
    }

    pub fn word_chars_mut(&mut self) -> &str {
        self.rewrite(|text| WORD_CHARS.run(text))
    }

    pub fn word_chars(&self) -> Identifier {
        let mut copy = self.clone();
        copy.word_chars_mut();
        copy
    }

    pub fn truncate_mut(&mut self, max_chars: usize) -> &str {
        self.rewrite(|text| Truncate { max_chars }.run(text))
    }

    pub fn truncate(&self, max_chars: usize) -> Identifier {
        let mut copy = self.clone();
        copy.truncate_mut(max_chars);
        copy
    }

    pub fn truncate_bytes_mut(&mut self, max_bytes: usize) -> &str {
        self.rewrite(|text| TruncateBytes { max_bytes }.run(text))
    }

    pub fn truncate_bytes(&self, max_bytes: usize) -> Identifier {
        let mut copy = self.clone();
        copy.truncate_bytes_mut(max_bytes);
        copy
    }

    pub fn with_separators_mut(&mut self, separator: char) -> &str {
        self.rewrite(|text| WithSeparators { separator }.run(text))
    }

    pub fn with_separators(&self, separator: char) -> Identifier {
        let mut copy = self.clone();
        copy.with_separators_mut(separator);
        copy
    }

    pub fn downcase_mut(&mut self) -> &str {
        self.rewrite(|text| Downcase.run(text))
    }

    pub fn downcase(&self) -> Identifier {
        let mut copy = self.clone();
        copy.downcase_mut();
        copy
    }

    pub fn upcase_mut(&mut self) -> &str {
        self.rewrite(|text| Upcase.run(text))
    }

    pub fn upcase(&self) -> Identifier {
        let mut copy = self.clone();
        copy.upcase_mut();
        copy
    }

    // ── normalization ───────────────────────────────────────────────

    /// Run the full slug pipeline configured by `options`.
    pub fn normalize_mut(&mut self, options: &NormalizeOptions) -> Result<&str, SlugError> {
        let ctx = options.resolve()?;
        let replacement = {
            match options.pipeline().process(Cow::Borrowed(&self.text), &ctx) {
                Ok(Cow::Owned(s)) => Some(s),
                Ok(Cow::Borrowed(s)) if s.len() != self.text.len() => Some(s.to_owned()),
                Ok(Cow::Borrowed(_)) => None,
                Err(e) => return Err(e.into()),
            }
        };
        if let Some(s) = replacement {
            self.text = s;
        }
        Ok(&self.text)
    }

    pub fn normalize(&self, options: &NormalizeOptions) -> Result<Identifier, SlugError> {
        let mut copy = self.clone();
        copy.normalize_mut(options)?;
        Ok(copy)
    }

    /// Normalize into a safe programmatic name: ASCII only, underscores.
    pub fn to_identifier_token_mut(&mut self) -> Result<&str, SlugError> {
        self.normalize_mut(&NormalizeOptions::identifier_token())
    }

    pub fn to_identifier_token(&self) -> Result<Identifier, SlugError> {
        let mut copy = self.clone();
        copy.to_identifier_token_mut()?;
        Ok(copy)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Identifier {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for Identifier {
    fn from(input: String) -> Self {
        Self::new(&input)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_composes() {
        let id = Identifier::new("e\u{0301}clair");
        assert_eq!(id, "éclair");
    }

    #[test]
    fn copy_forms_never_alias() {
        let original = Identifier::new("  Hello   World--foo  ");
        let cleaned = original.clean();
        assert_eq!(cleaned, "Hello World foo");
        assert_eq!(original, "  Hello   World--foo  ");
    }

    #[test]
    fn in_place_forms_return_the_mutated_text() {
        let mut id = Identifier::new("Hello World");
        assert_eq!(id.downcase_mut(), "hello world");
        assert_eq!(id, "hello world");
    }

    #[test]
    fn from_bytes_repairs_before_composing() {
        let id = Identifier::from_bytes(b"Caf\xE9");
        assert_eq!(id, "Café");
    }

    #[test]
    fn truncation_stores_the_shortened_text() {
        let mut id = Identifier::new("hello world");
        assert_eq!(id.truncate_mut(5), "hello");
        assert_eq!(id, "hello");

        let id = Identifier::new("üéøá");
        assert_eq!(id.truncate(3), "üéø");
        assert_eq!(id.truncate_bytes(3), "ü");
    }

    #[test]
    fn normalize_keeps_a_truncation_only_change() {
        // Every other stage passes "abcdef" through; the cut must still stick.
        let opts = NormalizeOptions::default().max_length(3);
        let id = Identifier::new("abcdef");
        assert_eq!(id.normalize(&opts).unwrap(), "abc");

        let mut id = Identifier::new("abcdef");
        assert_eq!(id.normalize_mut(&opts).unwrap(), "abc");
        assert_eq!(id, "abc");
    }
}
