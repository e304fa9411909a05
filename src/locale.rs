//! Codepoint approximation tables.
//!
//! A single default Latin table maps accented and ligature codepoints to plain
//! ASCII. Named locale tables override it where a language has its own
//! convention (German ü → "ue" where the default says "u"). Locale tables are
//! process-wide: the built-in set is static `phf` data, and callers may layer
//! additional entries on top at runtime via [`add_approximations`].

pub mod data;

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};
use thiserror::Error;

/// Override mapping from a single Unicode scalar value to its ASCII
/// replacement sequence.
pub type ApproxMap = HashMap<char, String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unknown locale `{0}`: no approximation table registered")]
    Unknown(String),
}

/// Runtime extensions layered over the built-in locale tables.
///
/// Readers never observe a partially merged table: every merge happens under
/// the write lock, every resolution under the read lock.
static RUNTIME: LazyLock<RwLock<HashMap<String, ApproxMap>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Merge `mappings` into the table registered under `tag`, creating the table
/// if it does not exist yet. Later registrations win for the same codepoint,
/// and runtime entries shadow the built-in table of the same name.
pub fn add_approximations<I, S>(tag: &str, mappings: I)
where
    I: IntoIterator<Item = (char, S)>,
    S: Into<String>,
{
    let mut registry = RUNTIME.write().unwrap_or_else(PoisonError::into_inner);
    registry
        .entry(tag.to_owned())
        .or_default()
        .extend(mappings.into_iter().map(|(c, r)| (c, r.into())));
}

/// Resolve a locale tag into a flat override map: built-in entries first,
/// runtime registrations on top.
pub fn resolve(tag: &str) -> Result<ApproxMap, LocaleError> {
    let mut map = ApproxMap::new();
    merge_into(&mut map, tag)?;
    Ok(map)
}

/// Resolve several locale tags in order; a later tag overrides an earlier one
/// for the same codepoint.
pub fn resolve_many<S: AsRef<str>>(tags: &[S]) -> Result<ApproxMap, LocaleError> {
    let mut map = ApproxMap::new();
    for tag in tags {
        merge_into(&mut map, tag.as_ref())?;
    }
    Ok(map)
}

fn merge_into(map: &mut ApproxMap, tag: &str) -> Result<(), LocaleError> {
    let builtin = data::LOCALE_TABLE.get(tag);
    let registry = RUNTIME.read().unwrap_or_else(PoisonError::into_inner);
    let runtime = registry.get(tag);

    if builtin.is_none() && runtime.is_none() {
        return Err(LocaleError::Unknown(tag.to_owned()));
    }
    if let Some(table) = builtin {
        map.extend(table.entries().map(|(c, r)| (*c, (*r).to_owned())));
    }
    if let Some(table) = runtime {
        map.extend(table.iter().map(|(c, r)| (*c, r.clone())));
    }
    Ok(())
}

/// Approximate one codepoint against the resolution chain:
/// caller overrides, then the default Latin table. `None` means the character
/// has no approximation and passes through unchanged — this is what keeps CJK
/// and other unmapped scripts intact.
#[inline]
pub fn approximate<'a>(c: char, overrides: Option<&'a ApproxMap>) -> Option<&'a str> {
    if let Some(map) = overrides {
        if let Some(replacement) = map.get(&c) {
            return Some(replacement);
        }
    }
    data::DEFAULT.get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_hits() {
        assert_eq!(approximate('ü', None), Some("u"));
        assert_eq!(approximate('Ł', None), Some("L"));
        assert_eq!(approximate('ß', None), Some("ss"));
    }

    #[test]
    fn unmapped_scripts_pass_through() {
        assert_eq!(approximate('日', None), None);
        assert_eq!(approximate('क', None), None);
        assert_eq!(approximate('a', None), None);
    }

    #[test]
    fn overrides_win_over_default() {
        let german = resolve("german").unwrap();
        assert_eq!(approximate('ü', Some(&german)), Some("ue"));
        // Codepoints the override table does not mention fall back to the default.
        assert_eq!(approximate('é', Some(&german)), Some("e"));
    }

    #[test]
    fn unknown_locale_is_an_error() {
        assert_eq!(
            resolve("klingon"),
            Err(LocaleError::Unknown("klingon".to_owned()))
        );
    }

    #[test]
    fn runtime_registration_shadows_builtin() {
        add_approximations("spanish-test", [('ñ', "nh")]);
        let table = resolve("spanish-test").unwrap();
        assert_eq!(approximate('ñ', Some(&table)), Some("nh"));

        // Later registrations override earlier ones for the same key.
        add_approximations("spanish-test", [('ñ', "ny")]);
        let table = resolve("spanish-test").unwrap();
        assert_eq!(approximate('ñ', Some(&table)), Some("ny"));
    }

    #[test]
    fn resolve_many_later_tag_wins() {
        add_approximations("base-test", [('ø', "o")]);
        add_approximations("shadow-test", [('ø', "oe")]);
        let merged = resolve_many(&["base-test", "shadow-test"]).unwrap();
        assert_eq!(merged.get(&'ø').map(String::as_str), Some("oe"));
    }
}
