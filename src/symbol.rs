//! Symbol abstraction shared by the text and byte cipher paths.
//!
//! Tables, translators, key sequencers and the engine loop are generic over
//! [`Symbol`]. `char` is the symbol of text streams, `u8` the symbol of
//! byte streams. Case folding is expressed through [`Folding`], which
//! honours an alphabet's [`SpecialCaseHandler`].

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::alphabet::SpecialCaseHandler;

/// A single unit of a cipher stream.
pub trait Symbol: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Converts a code point into this symbol type, if representable.
    fn from_char(c: char) -> Option<Self>;

    /// Returns the code point this symbol stands for.
    fn to_char(self) -> char;

    /// Returns `true` if the symbol is a lowercase letter.
    fn is_lower(self) -> bool;

    /// Uppercases the symbol, using `special` when present.
    fn to_upper_with(self, special: Option<&dyn SpecialCaseHandler>) -> Self;

    /// Lowercases the symbol, using `special` when present.
    fn to_lower_with(self, special: Option<&dyn SpecialCaseHandler>) -> Self;
}

/// Default single-symbol uppercase mapping.
///
/// Mappings that expand to several code points (e.g. `'ß'` to `"SS"`)
/// cannot be represented in a fixed-width alphabet and leave the symbol
/// unchanged.
pub fn default_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Default single-symbol lowercase mapping (see [`default_upper`]).
pub fn default_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl Symbol for char {
    fn from_char(c: char) -> Option<Self> {
        Some(c)
    }

    fn to_char(self) -> char {
        self
    }

    fn is_lower(self) -> bool {
        self.is_lowercase()
    }

    fn to_upper_with(self, special: Option<&dyn SpecialCaseHandler>) -> Self {
        match special {
            Some(handler) => handler.to_upper(self),
            None => default_upper(self),
        }
    }

    fn to_lower_with(self, special: Option<&dyn SpecialCaseHandler>) -> Self {
        match special {
            Some(handler) => handler.to_lower(self),
            None => default_lower(self),
        }
    }
}

impl Symbol for u8 {
    fn from_char(c: char) -> Option<Self> {
        u8::try_from(u32::from(c)).ok()
    }

    fn to_char(self) -> char {
        char::from(self)
    }

    // Case follows the Latin-1 code point; a mapping that leaves the byte
    // range keeps the byte unchanged.
    fn is_lower(self) -> bool {
        char::from(self).is_lower()
    }

    fn to_upper_with(self, special: Option<&dyn SpecialCaseHandler>) -> Self {
        u8::from_char(char::from(self).to_upper_with(special)).unwrap_or(self)
    }

    fn to_lower_with(self, special: Option<&dyn SpecialCaseHandler>) -> Self {
        u8::from_char(char::from(self).to_lower_with(special)).unwrap_or(self)
    }
}

/// Case-folding policy of a table or translator.
///
/// When enabled, input symbols are uppercased before lookup and the
/// original case is restored on the result.
#[derive(Debug, Clone, Default)]
pub struct Folding {
    enabled: bool,
    special: Option<Arc<dyn SpecialCaseHandler>>,
}

impl Folding {
    /// Case-sensitive policy: symbols are used as-is.
    pub fn none() -> Self {
        Folding::default()
    }

    /// Uppercase folding with an optional special-case handler.
    pub fn upper(special: Option<Arc<dyn SpecialCaseHandler>>) -> Self {
        Folding {
            enabled: true,
            special,
        }
    }

    /// Returns `true` if folding is applied.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the special-case handler, if any.
    pub fn special(&self) -> Option<&dyn SpecialCaseHandler> {
        self.special.as_deref()
    }

    /// Folds `symbol` to the table's case.
    ///
    /// # Returns
    /// The folded symbol and whether the input was lowercase.
    pub fn fold<S: Symbol>(&self, symbol: S) -> (S, bool) {
        if !self.enabled {
            return (symbol, false);
        }
        let was_lower = symbol.is_lower();
        (symbol.to_upper_with(self.special()), was_lower)
    }

    /// Re-applies lowercase to `symbol` if the input was lowercase.
    pub fn restore<S: Symbol>(&self, symbol: S, was_lower: bool) -> S {
        if self.enabled && was_lower {
            symbol.to_lower_with(self.special())
        } else {
            symbol
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::GermanCase;

    #[test]
    fn test_default_upper_single_symbol() {
        assert_eq!(default_upper('a'), 'A');
        assert_eq!(default_upper('ж'), 'Ж');
        assert_eq!(default_upper('7'), '7');
    }

    #[test]
    fn test_default_upper_leaves_expanding_symbol() {
        // 'ß'.to_uppercase() is "SS"
        assert_eq!(default_upper('ß'), 'ß');
    }

    #[test]
    fn test_byte_symbol_conversion() {
        assert_eq!(u8::from_char('A'), Some(65));
        assert_eq!(u8::from_char('\u{FF}'), Some(0xFF));
        assert_eq!(u8::from_char('Ω'), None);
        assert_eq!(0xE9u8.to_char(), 'é');
    }

    #[test]
    fn test_byte_case_follows_latin1() {
        assert!(b'q'.is_lower());
        assert!(!b'Q'.is_lower());
        assert_eq!(b'q'.to_upper_with(None), b'Q');
        assert_eq!(b'Q'.to_lower_with(None), b'q');
        assert_eq!(0xF1u8.to_upper_with(None), 0xD1); // ñ -> Ñ
        assert_eq!(b'7'.to_upper_with(None), b'7');
        // ÿ uppercases to U+0178, outside the byte range.
        assert_eq!(0xFFu8.to_upper_with(None), 0xFF);
    }

    #[test]
    fn test_byte_folding_matches_char_folding() {
        let folding = Folding::upper(None);
        for b in 0..=255u8 {
            let (folded, was_lower) = folding.fold(b);
            let (c, c_lower) = folding.fold(char::from(b));
            assert_eq!(was_lower, c_lower);
            if u32::from(c) <= 0xFF {
                assert_eq!(char::from(folded), c);
            }
        }
    }

    #[test]
    fn test_folding_roundtrip_preserves_case() {
        let folding = Folding::upper(None);
        let (folded, was_lower) = folding.fold('q');
        assert_eq!(folded, 'Q');
        assert!(was_lower);
        assert_eq!(folding.restore('X', was_lower), 'x');
        assert_eq!(folding.restore('X', false), 'X');
    }

    #[test]
    fn test_folding_disabled_is_identity() {
        let folding = Folding::none();
        assert_eq!(folding.fold('q'), ('q', false));
        assert_eq!(folding.restore('q', true), 'q');
    }

    #[test]
    fn test_folding_with_special_case() {
        let folding = Folding::upper(Some(Arc::new(GermanCase)));
        assert_eq!(folding.fold('ß'), ('ẞ', true));
        assert_eq!(folding.restore('ẞ', true), 'ß');
    }
}
