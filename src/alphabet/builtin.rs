//! Built-in alphabets.
//!
//! Letter alphabets are stored uppercase so that tables built from them
//! fold case. Digit, punctuation and symbol sets are meant to be chained
//! as slave alphabets.

use std::sync::Arc;

use super::{Alphabet, GermanCase, GreekCase};

pub const ENGLISH: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LATIN: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZÁÉÍÓÚÜ";
pub const GERMAN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÜẞ";
pub const GREEK: &str = "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ";
pub const CYRILLIC: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
pub const ITALIAN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÀÈÉÌÒÙ";
pub const PORTUGUESE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÁÂÃÀÇÉÊÍÓÔÕÚ";
pub const CZECH: &str = "AÁBCČDĎEÉĚFGHIÍJKLMNŇOÓPQRŘSŠTŤUÚŮVWXYÝZŽ";
pub const NUMBERS: &str = "0123456789";
pub const NUMBERS_EXTENDED: &str = "0123456789#$%+-*/=<>@";
pub const NUMBERS_ARABIC: &str = "٠١٢٣٤٥٦٧٨٩";
pub const PUNCTUATION: &str = "!\"'(),-.:;?¡¿";
pub const SYMBOLS: &str = "#$%&*+/<=>@[\\]^_`{|}~";

/// The 26 ASCII letters.
pub fn english() -> Alphabet {
    Alphabet::from_parts("English", ENGLISH.chars().collect(), "en")
}

/// Spanish flavour of the Latin alphabet (with `Ñ` and accented vowels).
pub fn latin() -> Alphabet {
    Alphabet::from_parts("Latin", LATIN.chars().collect(), "es")
}

/// English letters plus umlauts and capital sharp s, with [`GermanCase`].
pub fn german() -> Alphabet {
    Alphabet::from_parts("German", GERMAN.chars().collect(), "de")
        .with_special_case(Arc::new(GermanCase))
}

/// The 24 Greek capitals, with [`GreekCase`].
pub fn greek() -> Alphabet {
    Alphabet::from_parts("Greek", GREEK.chars().collect(), "el")
        .with_special_case(Arc::new(GreekCase))
}

/// Russian Cyrillic, `Ё` included.
pub fn cyrillic() -> Alphabet {
    Alphabet::from_parts("Cyrillic", CYRILLIC.chars().collect(), "ru")
}

/// English letters plus Italian accented vowels.
pub fn italian() -> Alphabet {
    Alphabet::from_parts("Italian", ITALIAN.chars().collect(), "it")
}

/// English letters plus Portuguese diacritics.
pub fn portuguese() -> Alphabet {
    Alphabet::from_parts("Portuguese", PORTUGUESE.chars().collect(), "pt")
}

/// Czech letters in collation order.
pub fn czech() -> Alphabet {
    Alphabet::from_parts("Czech", CZECH.chars().collect(), "cs")
}

/// All 256 byte values as code points U+0000..U+00FF.
pub fn binary() -> Alphabet {
    Alphabet::from_parts("Binary", (0u8..=255).map(char::from).collect(), "")
}

/// ASCII digits.
pub fn numbers() -> Alphabet {
    Alphabet::from_parts("Numbers", NUMBERS.chars().collect(), "")
}

/// Digits plus the arithmetic and currency signs that accompany them.
pub fn numbers_extended() -> Alphabet {
    Alphabet::from_parts("NumbersExtended", NUMBERS_EXTENDED.chars().collect(), "")
}

/// Eastern Arabic-Indic digits.
pub fn numbers_arabic() -> Alphabet {
    Alphabet::from_parts("NumbersArabic", NUMBERS_ARABIC.chars().collect(), "ar")
}

/// Common punctuation, Spanish inverted marks included.
pub fn punctuation() -> Alphabet {
    Alphabet::from_parts("Punctuation", PUNCTUATION.chars().collect(), "")
}

/// ASCII symbols other than digits and punctuation.
pub fn symbols() -> Alphabet {
    Alphabet::from_parts("Symbols", SYMBOLS.chars().collect(), "")
}

/// Every built-in alphabet.
pub fn all() -> Vec<Alphabet> {
    vec![
        english(),
        latin(),
        german(),
        greek(),
        cyrillic(),
        italian(),
        portuguese(),
        czech(),
        binary(),
        numbers(),
        numbers_extended(),
        numbers_arabic(),
        punctuation(),
        symbols(),
    ]
}

/// Looks up a built-in alphabet by name, ignoring case. Accepts the
/// language name (`"spanish"`, `"russian"`) and the ISO code (`"es"`).
///
/// # Examples
///
/// ```
/// use tabula::alphabet::builtin;
///
/// assert_eq!(builtin::by_name("Spanish").unwrap().name(), "Latin");
/// assert!(builtin::by_name("klingon").is_none());
/// ```
pub fn by_name(name: &str) -> Option<Alphabet> {
    let alphabet = match name.trim().to_lowercase().as_str() {
        "english" | "en" => english(),
        "latin" | "spanish" | "es" => latin(),
        "german" | "de" => german(),
        "greek" | "el" => greek(),
        "cyrillic" | "russian" | "ru" => cyrillic(),
        "italian" | "it" => italian(),
        "portuguese" | "pt" => portuguese(),
        "czech" | "cs" => czech(),
        "binary" => binary(),
        "numbers" => numbers(),
        "numbersextended" | "numbers-extended" => numbers_extended(),
        "numbersarabic" | "numbers-arabic" | "ar" => numbers_arabic(),
        "punctuation" => punctuation(),
        "symbols" => symbols(),
        _ => return None,
    };
    Some(alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_pass_check() {
        for alphabet in all() {
            assert!(
                alphabet.check().is_ok(),
                "built-in alphabet '{}' failed check",
                alphabet.name()
            );
        }
    }

    #[test]
    fn test_letter_builtins_fold_uniquely() {
        for alphabet in all().into_iter().filter(|a| !a.has_lowercase()) {
            let lower = alphabet.to_lower();
            assert!(lower.is_ok(), "'{}' collapses on lowercasing", alphabet.name());
        }
    }

    #[test]
    fn test_sizes() {
        assert_eq!(english().size(), 26);
        assert_eq!(greek().size(), 24);
        assert_eq!(cyrillic().size(), 33);
        assert_eq!(binary().size(), 256);
        assert_eq!(numbers().size(), 10);
    }

    #[test]
    fn test_binary_is_case_sensitive_and_byte_sized() {
        let b = binary();
        assert!(b.has_lowercase());
        assert!(b.fits_in_byte());
        assert_eq!(b.symbol_at(-1), Some('\u{FF}'));
    }

    #[test]
    fn test_special_cases_attached() {
        assert_eq!(german().special_case().map(|h| h.name()), Some("german"));
        assert_eq!(greek().special_case().map(|h| h.name()), Some("greek"));
        assert!(english().special_case().is_none());
    }

    #[test]
    fn test_by_name_aliases() {
        assert_eq!(by_name("RU").unwrap().name(), "Cyrillic");
        assert_eq!(by_name(" english ").unwrap().name(), "English");
        assert_eq!(by_name("numbers-extended").unwrap().name(), "NumbersExtended");
    }

    #[test]
    fn test_symbol_sets_are_symbols_only() {
        assert!(numbers().is_symbols_only());
        assert!(punctuation().is_symbols_only());
        assert!(symbols().is_symbols_only());
        assert!(!english().is_symbols_only());
    }
}
