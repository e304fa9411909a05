//! Strips every codepoint outside the 7-bit ASCII range. Intended to run
//! *after* transliteration, so anything a table could rescue already has been.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy)]
pub struct ToAscii;

impl Stage for ToAscii {
    fn name(&self) -> &'static str {
        "to_ascii"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.is_ascii())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text))
    }
}

impl ToAscii {
    pub(crate) fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        Cow::Owned(text.chars().filter(char::is_ascii).collect())
    }
}

impl StageTestConfig for ToAscii {
    fn should_pass_through() -> &'static [&'static str] {
        &["hello world 123", "!@#$%", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("café", "caf"),
            ("日本", ""),
            ("naïve approach", "nave approach"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(ToAscii);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_everything_non_ascii() {
        let ctx = Context::default();
        let out = ToAscii.apply(Cow::Borrowed("ü2é日"), &ctx).unwrap();
        assert_eq!(out, "2");
    }

    #[test]
    fn ascii_input_is_zero_copy() {
        let ctx = Context::default();
        let input = "plain ascii";
        let out = ToAscii.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)));
    }
}
