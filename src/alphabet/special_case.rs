//! Pluggable case conversion for scripts the default mapping mishandles.
//!
//! The standard uppercase routine maps some lowercase letters to several
//! code points (German `'ß'` to `"SS"`) or merges distinct letters (Greek
//! `'σ'` and `'ς'` both to `'Σ'`). A [`SpecialCaseHandler`] attached to an alphabet replaces
//! the default single-symbol mapping for that alphabet.

use std::fmt;

use crate::symbol::{default_lower, default_upper};

/// Upper/lower conversion functions for one script.
pub trait SpecialCaseHandler: fmt::Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Uppercases a single symbol.
    fn to_upper(&self, c: char) -> char;

    /// Lowercases a single symbol.
    fn to_lower(&self, c: char) -> char;
}

/// German casing: `'ß'` and `'ẞ'` (U+1E9E) form a case pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanCase;

impl SpecialCaseHandler for GermanCase {
    fn name(&self) -> &'static str {
        "german"
    }

    fn to_upper(&self, c: char) -> char {
        match c {
            'ß' => 'ẞ',
            _ => default_upper(c),
        }
    }

    fn to_lower(&self, c: char) -> char {
        match c {
            'ẞ' => 'ß',
            _ => default_lower(c),
        }
    }
}

/// Greek casing: final sigma `'ς'` has no single-symbol case pair.
///
/// `'Σ'` lowercases to medial `'σ'` only, so `'ς'` is left unfolded and
/// passes through a Greek cipher untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreekCase;

impl SpecialCaseHandler for GreekCase {
    fn name(&self) -> &'static str {
        "greek"
    }

    fn to_upper(&self, c: char) -> char {
        match c {
            'ς' => 'ς',
            _ => default_upper(c),
        }
    }

    fn to_lower(&self, c: char) -> char {
        default_lower(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_sharp_s_pair() {
        assert_eq!(GermanCase.to_upper('ß'), 'ẞ');
        assert_eq!(GermanCase.to_lower('ẞ'), 'ß');
    }

    #[test]
    fn test_german_falls_back_to_default() {
        assert_eq!(GermanCase.to_upper('ä'), 'Ä');
        assert_eq!(GermanCase.to_lower('Ö'), 'ö');
    }

    #[test]
    fn test_greek_final_sigma_unfolded() {
        assert_eq!(GreekCase.to_upper('ς'), 'ς');
        assert_eq!(GreekCase.to_lower('ς'), 'ς');
        assert_eq!(GreekCase.to_upper('σ'), 'Σ');
        assert_eq!(GreekCase.to_lower('Σ'), 'σ');
    }
}
