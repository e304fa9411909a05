//! Removes every codepoint outside the word-character set: Unicode letters,
//! digits, and a configurable keep-list (space and line breaks by default).

use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy)]
pub struct WordChars {
    /// Non-alphanumeric codepoints that survive the strip.
    pub keep: &'static [char],
}

pub const WORD_CHARS: WordChars = WordChars {
    keep: &[' ', '\n', '\r'],
};

impl Default for WordChars {
    fn default() -> Self {
        WORD_CHARS
    }
}

impl WordChars {
    #[inline]
    fn is_kept(&self, c: char) -> bool {
        c.is_alphanumeric() || self.keep.contains(&c)
    }

    pub(crate) fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.chars().all(|c| self.is_kept(c)) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| self.is_kept(c)).collect())
    }
}

impl Stage for WordChars {
    fn name(&self) -> &'static str {
        "word_chars"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.chars().all(|c| self.is_kept(c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text))
    }
}

impl StageTestConfig for WordChars {
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", "déjà vu", "TEST!", "", "line\nbreak"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world 123", "日本", "line\nbreak", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello, world!", "hello world"),
            ("foo-bar_baz", "foobarbaz"),
            ("¡Feliz año!", "Feliz año"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(WORD_CHARS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_keeps_letters_and_digits() {
        let out = WORD_CHARS
            .apply(Cow::Borrowed("abc, def! 123?"), &Context::default())
            .unwrap();
        assert_eq!(out, "abc def 123");
    }

    #[test]
    fn unicode_letters_are_word_chars() {
        let out = WORD_CHARS
            .apply(Cow::Borrowed("дом 日本 café"), &Context::default())
            .unwrap();
        assert_eq!(out, "дом 日本 café");
    }

    #[test]
    fn custom_keep_list() {
        let stage = WordChars { keep: &[' ', '.'] };
        let out = stage
            .apply(Cow::Borrowed("v1.2.3-beta"), &Context::default())
            .unwrap();
        assert_eq!(out, "v1.2.3beta");
    }
}
