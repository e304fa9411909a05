//! Unicode-aware case mapping — full `str::to_lowercase`/`to_uppercase`
//! semantics, not byte-wise ASCII folding, so ß → "ss" and İ behaves.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;
use std::iter;

#[derive(Debug, Clone, Copy)]
pub struct Downcase;

#[derive(Debug, Clone, Copy)]
pub struct Upcase;

#[inline]
fn lowercase_changes(c: char) -> bool {
    c.to_lowercase().ne(iter::once(c))
}

#[inline]
fn uppercase_changes(c: char) -> bool {
    c.to_uppercase().ne(iter::once(c))
}

impl Stage for Downcase {
    fn name(&self) -> &'static str {
        "downcase"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(lowercase_changes))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text))
    }
}

impl Downcase {
    pub(crate) fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !text.chars().any(lowercase_changes) {
            return text;
        }
        match text {
            // ASCII fast path: case-map in place, no second allocation.
            Cow::Owned(mut s) if s.is_ascii() => {
                s.make_ascii_lowercase();
                Cow::Owned(s)
            }
            text => Cow::Owned(text.to_lowercase()),
        }
    }
}

impl Stage for Upcase {
    fn name(&self) -> &'static str {
        "upcase"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(uppercase_changes))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text))
    }
}

impl Upcase {
    pub(crate) fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !text.chars().any(uppercase_changes) {
            return text;
        }
        match text {
            Cow::Owned(mut s) if s.is_ascii() => {
                s.make_ascii_uppercase();
                Cow::Owned(s)
            }
            text => Cow::Owned(text.to_uppercase()),
        }
    }
}

impl StageTestConfig for Downcase {
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "123 !@#", "日本", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("HELLO", "hello"), ("Łódź", "łódź"), ("İ", "i\u{0307}")]
    }
}

impl StageTestConfig for Upcase {
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", "TEST", "", "straße"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["HELLO", "123 !@#", "日本", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("hello", "HELLO"), ("straße", "STRASSE")]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_lowercase() {
        let ctx = Context::default();
        let out = Downcase.apply(Cow::Borrowed("ŁÓDŹ"), &ctx).unwrap();
        assert_eq!(out, "łódź");
    }

    #[test]
    fn sharp_s_expands_on_upcase() {
        let ctx = Context::default();
        let out = Upcase.apply(Cow::Borrowed("straße"), &ctx).unwrap();
        assert_eq!(out, "STRASSE");
    }

    #[test]
    fn already_lower_is_zero_copy() {
        let ctx = Context::default();
        let input = "already lower";
        let out = Downcase.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)));
    }
}
