//! stage/transliterate.rs — best-effort ASCII approximation.
//!
//! Maps every codepoint through the approximation chain: per-call overrides
//! (a resolved locale table or a caller-supplied map), then the default Latin
//! table. Codepoints with no approximation pass through unchanged, which is
//! what keeps CJK and other unmapped scripts intact instead of destroying
//! them.

use crate::{
    context::Context,
    locale::approximate,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Zero-sized, stateless; the table lives in the [`Context`].
#[derive(Debug, Clone, Copy)]
pub struct Transliterate;

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        // The default table has no ASCII keys; an override table may.
        if ctx.overrides.is_none() && text.is_ascii() {
            return Ok(false);
        }
        let overrides = ctx.overrides.as_ref();
        Ok(text.chars().any(|c| approximate(c, overrides).is_some()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.run(text, ctx))
    }
}

impl Transliterate {
    pub(crate) fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if ctx.overrides.is_none() && text.is_ascii() {
            return text;
        }
        let overrides = ctx.overrides.as_ref();

        // Pre-scan: count replacements and the extra bytes they need, so the
        // output allocates once. Zero hits stays zero-copy.
        let mut hits = 0usize;
        let mut extra = 0usize;
        for c in text.chars() {
            if let Some(replacement) = approximate(c, overrides) {
                hits += 1;
                extra += replacement.len().saturating_sub(c.len_utf8());
            }
        }
        if hits == 0 {
            return text;
        }

        let mut out = String::with_capacity(text.len() + extra);
        for c in text.chars() {
            match approximate(c, overrides) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

use crate::testing::stage_contract::StageTestConfig;

impl StageTestConfig for Transliterate {
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world123", "", "日本", "русский"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Łódź, Poland", "Lodz, Poland"),
            ("Jürgen Müller", "Jurgen Muller"),
            ("üéøá", "ueoa"),
            ("smörgåsbord", "smorgasbord"),
        ]
    }
}
