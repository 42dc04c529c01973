//! Ordered, de-duplicated symbol sets with optional per-script casing.
//!
//! An [`Alphabet`] is immutable once built; [`rotate`](Alphabet::rotate),
//! [`to_upper`](Alphabet::to_upper), [`to_lower`](Alphabet::to_lower) and
//! [`rename`](Alphabet::rename) return new alphabets. Positions and
//! rotations are counted in symbols, never in bytes, so multi-byte scripts
//! (Greek, Cyrillic, German `ẞ`) behave like ASCII ones.

pub mod builtin;
mod special_case;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::CipherError;
use crate::symbol::{Folding, Symbol};

pub use special_case::{GermanCase, GreekCase, SpecialCaseHandler};

/// Ordered sequence of unique symbols.
#[derive(Debug, Clone)]
pub struct Alphabet {
    name: String,
    symbols: Vec<char>,
    is_foreign: bool,
    is_unicode: bool,
    is_symbols_only: bool,
    special_case: Option<Arc<dyn SpecialCaseHandler>>,
    language_code: String,
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.symbols == other.symbols
            && self.language_code == other.language_code
    }
}

impl Eq for Alphabet {}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Alphabet {
    /// Creates a validated alphabet.
    ///
    /// The descriptive flags are derived from the symbols and language code:
    /// an alphabet is *unicode* if any symbol is outside ASCII, *symbols only*
    /// if it holds no letter, and *foreign* if its language code is set and
    /// is not English.
    ///
    /// # Parameters
    /// - `name`: Display name (must not be blank).
    /// - `symbols`: The symbols in order.
    /// - `language_code`: ISO 639-1 code, or empty for script-neutral sets.
    ///
    /// # Errors
    /// See [`check`](Self::check).
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::alphabet::Alphabet;
    ///
    /// let hex = Alphabet::new("Hex", "0123456789ABCDEF", "").unwrap();
    /// assert_eq!(hex.size(), 16);
    /// assert!(!hex.is_symbols_only());
    /// assert!(Alphabet::new("Dup", "ABA", "").is_err());
    /// ```
    pub fn new(name: &str, symbols: &str, language_code: &str) -> Result<Self, CipherError> {
        let alphabet = Self::from_parts(name, symbols.chars().collect(), language_code);
        alphabet.check()?;
        Ok(alphabet)
    }

    /// Builds an alphabet without validating it. Callers guarantee the
    /// invariants (used for built-ins, which are covered by tests).
    pub(crate) fn from_parts(name: &str, symbols: Vec<char>, language_code: &str) -> Self {
        let is_unicode = symbols.iter().any(|c| !c.is_ascii());
        let is_symbols_only = !symbols.iter().any(|c| c.is_alphabetic());
        let is_foreign = !language_code.is_empty() && !language_code.eq_ignore_ascii_case("en");
        Alphabet {
            name: name.to_string(),
            symbols,
            is_foreign,
            is_unicode,
            is_symbols_only,
            special_case: None,
            language_code: language_code.to_string(),
        }
    }

    /// Attaches a special-case handler used for all case conversions.
    pub fn with_special_case(mut self, handler: Arc<dyn SpecialCaseHandler>) -> Self {
        self.special_case = Some(handler);
        self
    }

    /// Verifies the alphabet invariants.
    ///
    /// # Errors
    /// - [`CipherError::BlankAlphabetName`] if the name is blank.
    /// - [`CipherError::EmptyAlphabet`] if there are no symbols.
    /// - [`CipherError::DuplicateSymbol`] if a symbol repeats.
    pub fn check(&self) -> Result<(), CipherError> {
        if self.name.trim().is_empty() {
            return Err(CipherError::BlankAlphabetName);
        }
        if self.symbols.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        check_unique(&self.name, &self.symbols)
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Zero-based position of `symbol`, or `None` if absent.
    pub fn position_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    /// Symbol at `index`. Negative indices count from the end, so `-1` is
    /// the last symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::alphabet::builtin;
    ///
    /// let en = builtin::english();
    /// assert_eq!(en.symbol_at(0), Some('A'));
    /// assert_eq!(en.symbol_at(-1), Some('Z'));
    /// assert_eq!(en.symbol_at(26), None);
    /// ```
    pub fn symbol_at(&self, index: isize) -> Option<char> {
        let size = self.size() as isize;
        let index = if index < 0 { index + size } else { index };
        if (0..size).contains(&index) {
            Some(self.symbols[index as usize])
        } else {
            None
        }
    }

    /// Membership test, optionally ignoring case.
    pub fn contains(&self, symbol: char, case_insensitive: bool) -> bool {
        if self.symbols.contains(&symbol) {
            return true;
        }
        if !case_insensitive {
            return false;
        }
        let special = self.special_case.as_deref();
        let upper = symbol.to_upper_with(special);
        let lower = symbol.to_lower_with(special);
        self.symbols.iter().any(|&c| c == upper || c == lower)
    }

    /// Returns a copy cyclically shifted by `n` symbols.
    ///
    /// Positive `n` rotates right (the last symbol moves to the front),
    /// negative `n` rotates left. A left rotation by `n` is carried out as
    /// the right rotation by `size - n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::alphabet::Alphabet;
    ///
    /// let abc = Alphabet::new("ABCD", "ABCD", "en").unwrap();
    /// assert_eq!(abc.rotate(1).to_string(), "DABC");
    /// assert_eq!(abc.rotate(-1).to_string(), "BCDA");
    /// ```
    pub fn rotate(&self, n: isize) -> Alphabet {
        let mut rotated = self.clone();
        if self.symbols.is_empty() {
            return rotated;
        }
        let shift = n.rem_euclid(self.size() as isize) as usize;
        rotated.symbols.rotate_right(shift);
        rotated
    }

    /// Returns an uppercased copy.
    ///
    /// # Errors
    /// [`CipherError::DuplicateSymbol`] if two symbols collapse into one.
    pub fn to_upper(&self) -> Result<Alphabet, CipherError> {
        let special = self.special_case.as_deref();
        self.mapped(|c| c.to_upper_with(special))
    }

    /// Returns a lowercased copy.
    ///
    /// # Errors
    /// [`CipherError::DuplicateSymbol`] if two symbols collapse into one.
    pub fn to_lower(&self) -> Result<Alphabet, CipherError> {
        let special = self.special_case.as_deref();
        self.mapped(|c| c.to_lower_with(special))
    }

    /// Returns a copy with a different name.
    ///
    /// # Errors
    /// [`CipherError::BlankAlphabetName`] if `name` is blank.
    pub fn rename(&self, name: &str) -> Result<Alphabet, CipherError> {
        if name.trim().is_empty() {
            return Err(CipherError::BlankAlphabetName);
        }
        let mut renamed = self.clone();
        renamed.name = name.to_string();
        Ok(renamed)
    }

    fn mapped(&self, f: impl Fn(char) -> char) -> Result<Alphabet, CipherError> {
        let mut copy = self.clone();
        copy.symbols = self.symbols.iter().map(|&c| f(c)).collect();
        check_unique(&copy.name, &copy.symbols)?;
        Ok(copy)
    }

    /// Symbols converted to `S`, uppercased when `fold_case` is set, with
    /// the folding policy that matches them.
    ///
    /// # Errors
    /// - [`CipherError::DuplicateSymbol`] if folding collapses two symbols.
    /// - [`CipherError::NotByteAlphabet`] if a symbol cannot be represented
    ///   as `S`.
    pub fn folded_symbols<S: Symbol>(&self, fold_case: bool) -> Result<(Vec<S>, Folding), CipherError> {
        let (source, folding) = if fold_case {
            (self.to_upper()?, Folding::upper(self.special_case.clone()))
        } else {
            (self.clone(), Folding::none())
        };
        let symbols = source
            .symbols
            .iter()
            .map(|&c| S::from_char(c))
            .collect::<Option<Vec<S>>>()
            .ok_or_else(|| CipherError::NotByteAlphabet(self.name.clone()))?;
        Ok((symbols, folding))
    }

    /// Returns `true` if any symbol is a lowercase letter. Such alphabets
    /// are treated as case-sensitive.
    pub fn has_lowercase(&self) -> bool {
        self.symbols.iter().any(|c| c.is_lowercase())
    }

    /// Returns `true` if every symbol fits in a single byte (U+0000..U+00FF).
    pub fn fits_in_byte(&self) -> bool {
        self.symbols.iter().all(|&c| u32::from(c) <= 0xFF)
    }

    /// The alphabet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// ISO 639-1 language code (empty for script-neutral sets).
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Non-English language alphabet.
    pub fn is_foreign(&self) -> bool {
        self.is_foreign
    }

    /// Holds at least one non-ASCII symbol.
    pub fn is_unicode(&self) -> bool {
        self.is_unicode
    }

    /// Holds no letters (digits, punctuation, symbols).
    pub fn is_symbols_only(&self) -> bool {
        self.is_symbols_only
    }

    /// Attached special-case handler, if any.
    pub fn special_case(&self) -> Option<&Arc<dyn SpecialCaseHandler>> {
        self.special_case.as_ref()
    }
}

fn check_unique(name: &str, symbols: &[char]) -> Result<(), CipherError> {
    let mut seen = HashSet::with_capacity(symbols.len());
    for &c in symbols {
        if !seen.insert(c) {
            return Err(CipherError::DuplicateSymbol {
                alphabet: name.to_string(),
                symbol: format!("{:?}", c),
            });
        }
    }
    Ok(())
}
