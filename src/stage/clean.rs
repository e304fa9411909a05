//! Whitespace and dash tidying.
//!
//! Literal dashes become spaces, every whitespace run collapses to a single
//! ASCII space, and the edges are trimmed. Runs in one pass with at most one
//! allocation; already-clean text is zero-copy.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy)]
pub struct Clean;

impl Stage for Clean {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(self.dirty(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text))
    }
}

impl Clean {
    fn dirty(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        if memchr(b'-', text.as_bytes()).is_some() {
            return true;
        }
        // Leading or trailing whitespace gets trimmed.
        if text.chars().next().is_some_and(char::is_whitespace)
            || text.chars().next_back().is_some_and(char::is_whitespace)
        {
            return true;
        }
        // Interior: a run of two or more, or any whitespace that is not a
        // plain space, collapses to a single ' '.
        let mut prev_ws = false;
        for c in text.chars() {
            let ws = c.is_whitespace();
            if ws && (prev_ws || c != ' ') {
                return true;
            }
            prev_ws = ws;
        }
        false
    }

    pub(crate) fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.dirty(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut pending_ws = false;
        for c in text.chars() {
            if c == '-' || c.is_whitespace() {
                // Leading whitespace never becomes pending, which trims it.
                pending_ws = !out.is_empty();
                continue;
            }
            if pending_ws {
                out.push(' ');
                pending_ws = false;
            }
            out.push(c);
        }
        // A trailing pending run is dropped, which trims the end.
        Cow::Owned(out)
    }
}

impl StageTestConfig for Clean {
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà vu ", "TEST", "", "a\t \t b", "--"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "a b c", "déjà vu", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Hello   World--foo", "Hello World foo"),
            ("  x  ", "x"),
            ("a\t\nb", "a b"),
            ("- leading dash", "leading dash"),
            ("---", ""),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn clean(input: &str) -> String {
        Clean
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap()
            .into_owned()
    }

    #[test]
    fn dashes_become_spaces() {
        assert_eq!(clean("Hello   World--foo"), "Hello World foo");
    }

    #[test]
    fn unicode_whitespace_collapses() {
        assert_eq!(clean("a\u{00A0}\u{3000}b"), "a b");
    }

    #[test]
    fn single_tab_becomes_space() {
        assert_eq!(clean("a\tb"), "a b");
    }

    #[test]
    fn whitespace_only_input_empties() {
        assert_eq!(clean(" \t \n "), "");
    }

    #[test]
    fn clean_text_is_zero_copy() {
        let input = "hello world";
        let out = Clean
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)));
    }
}
