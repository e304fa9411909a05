//! Normalization options.
//!
//! One options value per call, defaults stated explicitly rather than implied.
//! Locale resolution happens once, in [`NormalizeOptions::resolve`], so an
//! unknown locale tag fails before any text is transformed.

use crate::{
    context::Context,
    locale::{self, ApproxMap, LocaleError},
    pipeline::{Pipeline, Stages},
    stage::{
        case::Downcase,
        clean::Clean,
        separators::WithSeparators,
        to_ascii::ToAscii,
        transliterate::Transliterate,
        truncate::TruncateBytes,
        word_chars::WORD_CHARS,
    },
};
use std::sync::Arc;

pub const DEFAULT_MAX_LENGTH: usize = 255;
pub const DEFAULT_SEPARATOR: char = '-';

/// Where transliteration overrides come from.
#[derive(Debug, Clone, Default)]
pub enum Transliterations {
    /// Default Latin table only.
    #[default]
    None,
    /// One registered locale tag.
    Locale(String),
    /// Several tags, merged in order; later tags win per codepoint.
    Locales(Vec<String>),
    /// An explicit caller-supplied table.
    Table(ApproxMap),
}

impl Transliterations {
    /// Resolve into a stage context; the only fallible step of any pipeline.
    pub fn resolve(&self) -> Result<Context, LocaleError> {
        let overrides = match self {
            Transliterations::None => None,
            Transliterations::Locale(tag) => Some(locale::resolve(tag)?),
            Transliterations::Locales(tags) => Some(locale::resolve_many(tags)?),
            Transliterations::Table(table) => Some(table.clone()),
        };
        Ok(Context { overrides })
    }
}

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Apply approximation tables before the other steps.
    pub transliterate: bool,
    /// Locale tag(s) or explicit override mapping for transliteration.
    pub transliterations: Transliterations,
    /// Drop every non-ASCII codepoint after transliteration.
    pub to_ascii: bool,
    /// Byte budget for the final truncation.
    pub max_length: usize,
    /// Character substituted for whitespace.
    pub separator: char,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            transliterate: true,
            transliterations: Transliterations::None,
            to_ascii: false,
            max_length: DEFAULT_MAX_LENGTH,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl NormalizeOptions {
    /// Preset for programmatic names: ASCII only, underscore-separated.
    pub fn identifier_token() -> Self {
        Self {
            to_ascii: true,
            separator: '_',
            ..Self::default()
        }
    }

    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.transliterations = Transliterations::Locale(tag.into());
        self
    }

    pub fn locales<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transliterations = Transliterations::Locales(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn overrides(mut self, table: ApproxMap) -> Self {
        self.transliterations = Transliterations::Table(table);
        self
    }

    pub fn transliterate(mut self, on: bool) -> Self {
        self.transliterate = on;
        self
    }

    pub fn to_ascii(mut self, on: bool) -> Self {
        self.to_ascii = on;
        self
    }

    pub fn max_length(mut self, bytes: usize) -> Self {
        self.max_length = bytes;
        self
    }

    pub fn separator(mut self, c: char) -> Self {
        self.separator = c;
        self
    }

    /// Resolve the configured transliterations into a stage context.
    pub fn resolve(&self) -> Result<Context, LocaleError> {
        self.transliterations.resolve()
    }

    /// Build the fixed normalization pipeline for these options.
    ///
    /// `clean` reappears twice on purpose: stripping non-word characters can
    /// leave orphaned whitespace runs that must be re-collapsed before
    /// separator substitution, and truncation can cut right after a space —
    /// the final `clean` trims it so the slug never ends in a separator.
    pub fn pipeline(&self) -> Pipeline {
        let mut stages = Stages::new();
        if self.transliterate {
            stages.push(Arc::new(Transliterate));
        }
        if self.to_ascii {
            stages.push(Arc::new(ToAscii));
        }
        stages.push(Arc::new(Clean));
        stages.push(Arc::new(WORD_CHARS));
        stages.push(Arc::new(Clean));
        stages.push(Arc::new(Downcase));
        stages.push(Arc::new(TruncateBytes {
            max_bytes: self.max_length,
        }));
        stages.push(Arc::new(Clean));
        stages.push(Arc::new(WithSeparators {
            separator: self.separator,
        }));
        Pipeline::new(stages)
    }
}
