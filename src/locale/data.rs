//! Static approximation data.
//!
//! The default table covers Latin-1 Supplement and Latin Extended-A plus the
//! common ligatures. Locale tables carry only the codepoints where a
//! language's romanization convention differs from the default.

use paste::paste;
use phf::{Map, phf_map};

/// Default Latin approximation table. Every replacement is pure ASCII, so
/// transliteration against this table is idempotent.
pub static DEFAULT: Map<char, &'static str> = phf_map! {
    // Latin-1 Supplement, uppercase
    'À' => "A", 'Á' => "A", 'Â' => "A", 'Ã' => "A", 'Ä' => "A", 'Å' => "A",
    'Æ' => "AE", 'Ç' => "C",
    'È' => "E", 'É' => "E", 'Ê' => "E", 'Ë' => "E",
    'Ì' => "I", 'Í' => "I", 'Î' => "I", 'Ï' => "I",
    'Ð' => "D", 'Ñ' => "N",
    'Ò' => "O", 'Ó' => "O", 'Ô' => "O", 'Õ' => "O", 'Ö' => "O", 'Ø' => "O",
    'Ù' => "U", 'Ú' => "U", 'Û' => "U", 'Ü' => "U",
    'Ý' => "Y", 'Þ' => "Th", 'ß' => "ss",
    // Latin-1 Supplement, lowercase
    'à' => "a", 'á' => "a", 'â' => "a", 'ã' => "a", 'ä' => "a", 'å' => "a",
    'æ' => "ae", 'ç' => "c",
    'è' => "e", 'é' => "e", 'ê' => "e", 'ë' => "e",
    'ì' => "i", 'í' => "i", 'î' => "i", 'ï' => "i",
    'ð' => "d", 'ñ' => "n",
    'ò' => "o", 'ó' => "o", 'ô' => "o", 'õ' => "o", 'ö' => "o", 'ø' => "o",
    'ù' => "u", 'ú' => "u", 'û' => "u", 'ü' => "u",
    'ý' => "y", 'þ' => "th", 'ÿ' => "y",
    // Latin Extended-A
    'Ā' => "A", 'ā' => "a", 'Ă' => "A", 'ă' => "a", 'Ą' => "A", 'ą' => "a",
    'Ć' => "C", 'ć' => "c", 'Ĉ' => "C", 'ĉ' => "c", 'Ċ' => "C", 'ċ' => "c",
    'Č' => "C", 'č' => "c",
    'Ď' => "D", 'ď' => "d", 'Đ' => "D", 'đ' => "d",
    'Ē' => "E", 'ē' => "e", 'Ĕ' => "E", 'ĕ' => "e", 'Ė' => "E", 'ė' => "e",
    'Ę' => "E", 'ę' => "e", 'Ě' => "E", 'ě' => "e",
    'Ĝ' => "G", 'ĝ' => "g", 'Ğ' => "G", 'ğ' => "g", 'Ġ' => "G", 'ġ' => "g",
    'Ģ' => "G", 'ģ' => "g",
    'Ĥ' => "H", 'ĥ' => "h", 'Ħ' => "H", 'ħ' => "h",
    'Ĩ' => "I", 'ĩ' => "i", 'Ī' => "I", 'ī' => "i", 'Ĭ' => "I", 'ĭ' => "i",
    'Į' => "I", 'į' => "i", 'İ' => "I", 'ı' => "i",
    'Ĳ' => "IJ", 'ĳ' => "ij", 'Ĵ' => "J", 'ĵ' => "j",
    'Ķ' => "K", 'ķ' => "k", 'ĸ' => "k",
    'Ĺ' => "L", 'ĺ' => "l", 'Ļ' => "L", 'ļ' => "l", 'Ľ' => "L", 'ľ' => "l",
    'Ŀ' => "L", 'ŀ' => "l", 'Ł' => "L", 'ł' => "l",
    'Ń' => "N", 'ń' => "n", 'Ņ' => "N", 'ņ' => "n", 'Ň' => "N", 'ň' => "n",
    'ŉ' => "n", 'Ŋ' => "N", 'ŋ' => "n",
    'Ō' => "O", 'ō' => "o", 'Ŏ' => "O", 'ŏ' => "o", 'Ő' => "O", 'ő' => "o",
    'Œ' => "OE", 'œ' => "oe",
    'Ŕ' => "R", 'ŕ' => "r", 'Ŗ' => "R", 'ŗ' => "r", 'Ř' => "R", 'ř' => "r",
    'Ś' => "S", 'ś' => "s", 'Ŝ' => "S", 'ŝ' => "s", 'Ş' => "S", 'ş' => "s",
    'Š' => "S", 'š' => "s",
    'Ţ' => "T", 'ţ' => "t", 'Ť' => "T", 'ť' => "t", 'Ŧ' => "T", 'ŧ' => "t",
    'Ũ' => "U", 'ũ' => "u", 'Ū' => "U", 'ū' => "u", 'Ŭ' => "U", 'ŭ' => "u",
    'Ů' => "U", 'ů' => "u", 'Ű' => "U", 'ű' => "u", 'Ų' => "U", 'ų' => "u",
    'Ŵ' => "W", 'ŵ' => "w",
    'Ŷ' => "Y", 'ŷ' => "y", 'Ÿ' => "Y",
    'Ź' => "Z", 'ź' => "z", 'Ż' => "Z", 'ż' => "z", 'Ž' => "Z", 'ž' => "z",
    // Latin Extended-B, the handful that shows up in European names
    'Ș' => "S", 'ș' => "s", 'Ț' => "T", 'ț' => "t",
    // Capital sharp s; without it, downcasing to ß would reopen a mapping.
    'ẞ' => "SS",
};

/// Generates one static `phf` map per locale plus the global tag lookup.
macro_rules! define_locales {
    ($(
        $tag:literal => $name:ident [ $($from:literal => $to:literal),* $(,)? ]
    ),* $(,)?) => {
        paste! {
            $(
                static [<$name:upper>]: Map<char, &'static str> = phf_map! {
                    $($from => $to),*
                };
            )*

            pub static LOCALE_TABLE: Map<&'static str, &'static Map<char, &'static str>> = phf_map! {
                $( $tag => &[<$name:upper>] ),*
            };
        }
    };
}

define_locales! {
    "danish" => danish [
        'æ' => "ae", 'Æ' => "Ae",
        'ø' => "oe", 'Ø' => "Oe",
        'å' => "aa", 'Å' => "Aa",
    ],
    "german" => german [
        'ä' => "ae", 'Ä' => "Ae",
        'ö' => "oe", 'Ö' => "Oe",
        'ü' => "ue", 'Ü' => "Ue",
        'ß' => "ss",
    ],
    "norwegian" => norwegian [
        'æ' => "ae", 'Æ' => "Ae",
        'ø' => "oe", 'Ø' => "Oe",
        'å' => "aa", 'Å' => "Aa",
    ],
    "romanian" => romanian [
        'ă' => "a", 'Ă' => "A",
        'â' => "a", 'Â' => "A",
        'î' => "i", 'Î' => "I",
        'ş' => "s", 'Ş' => "S", 'ș' => "s", 'Ș' => "S",
        'ţ' => "t", 'Ţ' => "T", 'ț' => "t", 'Ț' => "T",
    ],
    "serbian" => serbian [
        'đ' => "dj", 'Đ' => "Dj",
        'а' => "a", 'А' => "A", 'б' => "b", 'Б' => "B", 'в' => "v", 'В' => "V",
        'г' => "g", 'Г' => "G", 'д' => "d", 'Д' => "D", 'ђ' => "dj", 'Ђ' => "Dj",
        'е' => "e", 'Е' => "E", 'ж' => "z", 'Ж' => "Z", 'з' => "z", 'З' => "Z",
        'и' => "i", 'И' => "I", 'ј' => "j", 'Ј' => "J", 'к' => "k", 'К' => "K",
        'л' => "l", 'Л' => "L", 'љ' => "lj", 'Љ' => "Lj", 'м' => "m", 'М' => "M",
        'н' => "n", 'Н' => "N", 'њ' => "nj", 'Њ' => "Nj", 'о' => "o", 'О' => "O",
        'п' => "p", 'П' => "P", 'р' => "r", 'Р' => "R", 'с' => "s", 'С' => "S",
        'т' => "t", 'Т' => "T", 'ћ' => "c", 'Ћ' => "C", 'у' => "u", 'У' => "U",
        'ф' => "f", 'Ф' => "F", 'х' => "h", 'Х' => "H", 'ц' => "c", 'Ц' => "C",
        'ч' => "c", 'Ч' => "C", 'џ' => "dz", 'Џ' => "Dz", 'ш' => "s", 'Ш' => "S",
    ],
    "spanish" => spanish [
        'ñ' => "ni", 'Ñ' => "Ni",
    ],
    "swedish" => swedish [
        'å' => "aa", 'Å' => "Aa",
        'ä' => "ae", 'Ä' => "Ae",
        'ö' => "oe", 'Ö' => "Oe",
    ],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_replacements_are_ascii() {
        for (c, replacement) in DEFAULT.entries() {
            assert!(
                replacement.is_ascii(),
                "default entry {c:?} maps to non-ASCII {replacement:?}"
            );
        }
    }

    #[test]
    fn locale_replacements_are_ascii() {
        for (tag, table) in LOCALE_TABLE.entries() {
            for (c, replacement) in table.entries() {
                assert!(
                    replacement.is_ascii(),
                    "{tag} entry {c:?} maps to non-ASCII {replacement:?}"
                );
            }
        }
    }

    #[test]
    fn builtin_locales_present() {
        for tag in ["danish", "german", "norwegian", "romanian", "serbian", "spanish", "swedish"] {
            assert!(LOCALE_TABLE.contains_key(tag), "missing builtin `{tag}`");
        }
    }
}
