//! Byte tidying and canonical composition.
//!
//! [`tidy`] turns arbitrary bytes into valid UTF-8: valid spans pass through
//! untouched (zero-copy when the whole input is clean), invalid spans are
//! reinterpreted byte-by-byte as Windows-1252, falling back to ISO-8859-1 for
//! the codepoints CP1252 leaves undefined. [`compose`] applies Unicode NFC so
//! that "e" + combining acute becomes "é". Both are total: no input, however
//! malformed, makes them fail.

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::borrow::Cow;
use std::sync::LazyLock;

static NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// CP1252 repertoire for 0x80..=0x9F. `None` marks the five bytes CP1252
/// leaves undefined; those fall back to the ISO-8859-1 C1 controls, which are
/// useless in an identifier, so they become U+FFFD instead.
const CP1252_C1: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 €
    None,             // 0x81
    Some('\u{201A}'), // 0x82 ‚
    Some('\u{0192}'), // 0x83 ƒ
    Some('\u{201E}'), // 0x84 „
    Some('\u{2026}'), // 0x85 …
    Some('\u{2020}'), // 0x86 †
    Some('\u{2021}'), // 0x87 ‡
    Some('\u{02C6}'), // 0x88 ˆ
    Some('\u{2030}'), // 0x89 ‰
    Some('\u{0160}'), // 0x8A Š
    Some('\u{2039}'), // 0x8B ‹
    Some('\u{0152}'), // 0x8C Œ
    None,             // 0x8D
    Some('\u{017D}'), // 0x8E Ž
    None,             // 0x8F
    None,             // 0x90
    Some('\u{2018}'), // 0x91 '
    Some('\u{2019}'), // 0x92 '
    Some('\u{201C}'), // 0x93 "
    Some('\u{201D}'), // 0x94 "
    Some('\u{2022}'), // 0x95 •
    Some('\u{2013}'), // 0x96 –
    Some('\u{2014}'), // 0x97 —
    Some('\u{02DC}'), // 0x98 ˜
    Some('\u{2122}'), // 0x99 ™
    Some('\u{0161}'), // 0x9A š
    Some('\u{203A}'), // 0x9B ›
    Some('\u{0153}'), // 0x9C œ
    None,             // 0x9D
    Some('\u{017E}'), // 0x9E ž
    Some('\u{0178}'), // 0x9F Ÿ
];

/// Reinterpret one byte that broke UTF-8 decoding. Bytes below 0xA0 go through
/// the CP1252 table; 0xA0..=0xFF is identical in CP1252 and ISO-8859-1, where
/// the byte value *is* the codepoint.
#[inline]
fn legacy_byte(b: u8) -> char {
    if b < 0x80 {
        // An ASCII byte is never part of an invalid sequence, but stay total.
        char::from(b)
    } else if b < 0xA0 {
        CP1252_C1[(b - 0x80) as usize].unwrap_or('\u{FFFD}')
    } else {
        char::from(b)
    }
}

/// Repair a byte sequence into valid Unicode text.
///
/// Well-formed UTF-8 is returned borrowed. Mixed input keeps its valid spans
/// verbatim and converts each offending byte through [`legacy_byte`].
pub fn tidy(bytes: &[u8]) -> Cow<'_, str> {
    #[cfg(feature = "simd")]
    if let Ok(text) = simdutf8::basic::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(tidy_slow(bytes)),
    }
}

fn tidy_slow(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                out.push_str(text);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // The prefix was just validated by `from_utf8`.
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                // `error_len() == None` means the input ends mid-sequence:
                // everything left is legacy bytes.
                let bad = e.error_len().unwrap_or(rest.len());
                for &b in &rest[..bad] {
                    out.push(legacy_byte(b));
                }
                bytes = &rest[bad..];
            }
        }
    }
}

/// Unicode canonical composition (NFC). Zero-copy when already composed.
pub fn compose(text: Cow<'_, str>) -> Cow<'_, str> {
    if NFC.is_normalized(&text) {
        text
    } else {
        Cow::Owned(NFC.normalize(&text).into_owned())
    }
}
