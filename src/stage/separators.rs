//! Replaces every whitespace codepoint with the configured separator. This is
//! the last step of normalization; `clean` has already collapsed runs, so one
//! whitespace codepoint means one separator.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy)]
pub struct WithSeparators {
    pub separator: char,
}

impl Default for WithSeparators {
    fn default() -> Self {
        Self {
            separator: crate::options::DEFAULT_SEPARATOR,
        }
    }
}

impl Stage for WithSeparators {
    fn name(&self) -> &'static str {
        "with_separators"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        // Replacing the separator with itself is not a change.
        Ok(text
            .chars()
            .any(|c| c.is_whitespace() && c != self.separator))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text))
    }
}

impl WithSeparators {
    pub(crate) fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !text
            .chars()
            .any(|c| c.is_whitespace() && c != self.separator)
        {
            return text;
        }
        Cow::Owned(
            text.chars()
                .map(|c| if c.is_whitespace() { self.separator } else { c })
                .collect(),
        )
    }
}

impl StageTestConfig for WithSeparators {
    fn should_pass_through() -> &'static [&'static str] {
        &["hello-world", "abc", "déjà-vu", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello world foo", "hello-world-foo"),
            ("a\tb", "a-b"),
            ("nbsp\u{00A0}here", "nbsp-here"),
        ]
    }
}
