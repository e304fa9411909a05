#[cfg(test)]
mod unit_tests {

    use crate::{Identifier, LocaleError, SlugError, Transliterations, add_approximations};

    const DEFAULT: Transliterations = Transliterations::None;

    #[test]
    fn transliterate_polish() {
        let id = Identifier::new("Łódź, Poland");
        assert_eq!(id.transliterate(&DEFAULT).unwrap(), "Lodz, Poland");
    }

    #[test]
    fn transliterate_preserves_cjk() {
        let id = Identifier::new("日本");
        assert_eq!(id.transliterate(&DEFAULT).unwrap(), "日本");
    }

    #[test]
    fn transliterate_locale_disambiguates() {
        let id = Identifier::new("Jürgen Müller");
        assert_eq!(id.transliterate(&DEFAULT).unwrap(), "Jurgen Muller");
        let german = Transliterations::Locale("german".to_owned());
        assert_eq!(id.transliterate(&german).unwrap(), "Juergen Mueller");
        // The source is untouched by either copy form.
        assert_eq!(id, "Jürgen Müller");
    }

    #[test]
    fn transliterate_unknown_locale_errors() {
        let id = Identifier::new("text");
        let bad = Transliterations::Locale("klingon".to_owned());
        assert!(matches!(
            id.transliterate(&bad),
            Err(SlugError::Locale(LocaleError::Unknown(tag))) if tag == "klingon"
        ));
    }

    #[test]
    fn runtime_spanish_override() {
        add_approximations("spanish", [('ñ', "nh")]);
        let id = Identifier::new("¡Feliz año!");
        let spanish = Transliterations::Locale("spanish".to_owned());
        assert_eq!(id.transliterate(&spanish).unwrap(), "¡Feliz anho!");
    }

    #[test]
    fn truncate_chars_vs_bytes() {
        let id = Identifier::new("üéøá");
        assert_eq!(id.truncate(3), "üéø");
        assert_eq!(id.truncate_bytes(3), "ü");
        assert_eq!(id, "üéøá");
    }

    #[test]
    fn clean_collapses_and_trims() {
        let mut id = Identifier::new("  Hello   World--foo  ");
        assert_eq!(id.clean_mut(), "Hello World foo");
    }

    #[test]
    fn word_chars_strips_punctuation() {
        let id = Identifier::new("ready, set, go!");
        assert_eq!(id.word_chars(), "ready set go");
    }

    #[test]
    fn case_mapping_is_unicode_aware() {
        let id = Identifier::new("Łódź");
        assert_eq!(id.downcase(), "łódź");
        assert_eq!(id.upcase(), "ŁÓDŹ");
    }

    #[test]
    fn separators_replace_whitespace() {
        let id = Identifier::new("a b\tc");
        assert_eq!(id.with_separators('-'), "a-b-c");
        assert_eq!(id.with_separators('_'), "a_b_c");
    }

    #[test]
    fn in_place_chain() {
        let mut id = Identifier::new("  Größe   42  ");
        id.transliterate_mut(&DEFAULT).unwrap();
        id.clean_mut();
        id.downcase_mut();
        id.with_separators_mut('-');
        assert_eq!(id, "grosse-42");
    }
}
