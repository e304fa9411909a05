//! Truncation by scalar-value count and by encoded byte budget.
//!
//! Both stages keep whole codepoints only. `TruncateBytes` appends codepoints
//! while the cumulative byte count stays within budget and stops before the
//! one that would exceed it — it never slices mid-sequence.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Keep the first `max_chars` Unicode scalar values.
#[derive(Debug, Clone, Copy)]
pub struct Truncate {
    pub max_chars: usize,
}

impl Stage for Truncate {
    fn name(&self) -> &'static str {
        "truncate"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        // A scalar value is at least one byte, so byte length bounds the count.
        if text.len() <= self.max_chars {
            return Ok(false);
        }
        Ok(text.chars().count() > self.max_chars)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text))
    }
}

impl Truncate {
    pub(crate) fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text.char_indices().nth(self.max_chars) {
            None => text,
            Some((end, _)) => truncate_at(text, end),
        }
    }
}

/// Keep the longest whole-codepoint prefix of at most `max_bytes` encoded
/// bytes.
#[derive(Debug, Clone, Copy)]
pub struct TruncateBytes {
    pub max_bytes: usize,
}

impl Stage for TruncateBytes {
    fn name(&self) -> &'static str {
        "truncate_bytes"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.len() > self.max_bytes)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text))
    }
}

impl TruncateBytes {
    pub(crate) fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.len() <= self.max_bytes {
            return text;
        }
        // Back off to the nearest codepoint boundary at or below the budget.
        let mut end = self.max_bytes;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        truncate_at(text, end)
    }
}

/// Cut a `Cow` at a known char boundary without copying borrowed data.
fn truncate_at(text: Cow<'_, str>, end: usize) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..end]),
        Cow::Owned(mut s) => {
            s.truncate(end);
            Cow::Owned(s)
        }
    }
}

// Contract instances use `max_chars: 3` / `max_bytes: 3`.
impl StageTestConfig for Truncate {
    fn should_pass_through() -> &'static [&'static str] {
        &["abc", "üéø", "日本", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("üéøáü", "üéø"), ("hello world", "hel"), ("日本語です", "日本語")]
    }
}

impl StageTestConfig for TruncateBytes {
    fn should_pass_through() -> &'static [&'static str] {
        &["abc", "ü", "日", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("üéøá", "ü"), ("hello world", "hel"), ("日本", "日")]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Truncate { max_chars: 3 });
        assert_stage_contract!(TruncateBytes { max_bytes: 3 });
    }
}
