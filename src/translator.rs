//! RuneTranslator: bijective symbol map between equal-size alphabets.
//!
//! Used to precompute the Affine-transliterated alphabet once, instead of
//! evaluating the linear formula per symbol. Because construction
//! guarantees a complete bijection, a lookup miss is reported as an error.

use std::collections::HashMap;

use crate::error::CipherError;
use crate::modular::AffineParams;
use crate::symbol::{Folding, Symbol};

/// Precomputed source→target bijection.
#[derive(Debug, Clone)]
pub struct RuneTranslator<S: Symbol> {
    source: Vec<S>,
    target: Vec<S>,
    forward: HashMap<S, S>,
    reverse: HashMap<S, S>,
    folding: Folding,
}

impl<S: Symbol> RuneTranslator<S> {
    /// Builds the translator pairing `source[i]` with `target[i]`.
    ///
    /// # Errors
    /// - [`CipherError::TranslatorSizeMismatch`] if the lengths differ.
    /// - [`CipherError::DuplicateSymbol`] if either side repeats a symbol.
    pub fn new(source: Vec<S>, target: Vec<S>, folding: Folding) -> Result<Self, CipherError> {
        if source.len() != target.len() {
            return Err(CipherError::TranslatorSizeMismatch {
                source_len: source.len(),
                target_len: target.len(),
            });
        }
        let mut forward = HashMap::with_capacity(source.len());
        let mut reverse = HashMap::with_capacity(target.len());
        for (&s, &t) in source.iter().zip(target.iter()) {
            if forward.insert(s, t).is_some() {
                return Err(duplicate("source", s));
            }
            if reverse.insert(t, s).is_some() {
                return Err(duplicate("target", t));
            }
        }
        Ok(RuneTranslator {
            source,
            target,
            forward,
            reverse,
            folding,
        })
    }

    /// Builds the Affine translator: `symbols[x]` maps to
    /// `symbols[(A·x + B) mod N]`.
    ///
    /// # Errors
    /// [`CipherError::TranslatorSizeMismatch`] if `params.n()` differs from
    /// the number of symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::modular::AffineParams;
    /// use tabula::symbol::Folding;
    /// use tabula::translator::RuneTranslator;
    ///
    /// let symbols: Vec<char> = ('A'..='Z').collect();
    /// let params = AffineParams::new(5, 3, 26).unwrap();
    /// let tr = RuneTranslator::affine(symbols, &params, Folding::upper(None)).unwrap();
    /// assert_eq!(tr.lookup('D'), Ok('S'));
    /// assert_eq!(tr.reverse_lookup('s'), Ok('d'));
    /// ```
    pub fn affine(
        symbols: Vec<S>,
        params: &AffineParams,
        folding: Folding,
    ) -> Result<Self, CipherError> {
        if params.n() != symbols.len() {
            return Err(CipherError::TranslatorSizeMismatch {
                source_len: symbols.len(),
                target_len: params.n(),
            });
        }
        let target = (0..symbols.len())
            .map(|x| symbols[params.encode(x)])
            .collect();
        Self::new(symbols, target, folding)
    }

    /// Number of mapped symbols.
    pub fn size(&self) -> usize {
        self.source.len()
    }

    /// Source alphabet, in index order.
    pub fn source(&self) -> &[S] {
        &self.source
    }

    /// Target alphabet; `target()[i]` is the image of `source()[i]`.
    pub fn target(&self) -> &[S] {
        &self.target
    }

    /// Case policy applied on lookup.
    pub fn folding(&self) -> &Folding {
        &self.folding
    }

    /// Position of `symbol` in the source alphabet, after folding.
    pub fn position_of(&self, symbol: S) -> Option<usize> {
        let (folded, _) = self.folding.fold(symbol);
        self.source.iter().position(|&s| s == folded)
    }

    /// Source symbol at `index`, if in range.
    pub fn symbol_at(&self, index: usize) -> Option<S> {
        self.source.get(index).copied()
    }

    /// Membership test on the source alphabet, after folding.
    pub fn contains(&self, symbol: S) -> bool {
        let (folded, _) = self.folding.fold(symbol);
        self.forward.contains_key(&folded)
    }

    /// Maps a source symbol to its target, preserving case.
    ///
    /// # Errors
    /// [`CipherError::SymbolNotMapped`] if `symbol` is not in the source.
    pub fn lookup(&self, symbol: S) -> Result<S, CipherError> {
        self.translate(&self.forward, symbol)
    }

    /// Maps a target symbol back to its source, preserving case.
    ///
    /// # Errors
    /// [`CipherError::SymbolNotMapped`] if `symbol` is not in the target.
    pub fn reverse_lookup(&self, symbol: S) -> Result<S, CipherError> {
        self.translate(&self.reverse, symbol)
    }

    fn translate(&self, table: &HashMap<S, S>, symbol: S) -> Result<S, CipherError> {
        let (folded, was_lower) = self.folding.fold(symbol);
        match table.get(&folded) {
            Some(&mapped) => Ok(self.folding.restore(mapped, was_lower)),
            None => Err(CipherError::SymbolNotMapped(format!("{:?}", symbol))),
        }
    }
}

fn duplicate<S: Symbol>(side: &str, symbol: S) -> CipherError {
    CipherError::DuplicateSymbol {
        alphabet: format!("translator {}", side),
        symbol: format!("{:?}", symbol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Vec<char> {
        ('A'..='Z').collect()
    }

    #[test]
    fn test_size_mismatch() {
        let err = RuneTranslator::new(vec!['A', 'B'], vec!['X'], Folding::none()).unwrap_err();
        assert_eq!(
            err,
            CipherError::TranslatorSizeMismatch {
                source_len: 2,
                target_len: 1
            }
        );
    }

    #[test]
    fn test_not_a_bijection() {
        let err = RuneTranslator::new(vec!['A', 'B'], vec!['X', 'X'], Folding::none()).unwrap_err();
        assert!(matches!(err, CipherError::DuplicateSymbol { .. }));
    }

    #[test]
    fn test_affine_table() {
        let params = AffineParams::new(5, 3, 26).unwrap();
        let tr = RuneTranslator::affine(english(), &params, Folding::upper(None)).unwrap();
        assert_eq!(tr.lookup('D'), Ok('S'));
        assert_eq!(tr.reverse_lookup('S'), Ok('D'));
        // A·0 + B
        assert_eq!(tr.lookup('A'), Ok('D'));
    }

    #[test]
    fn test_affine_is_bijective_for_every_coprime() {
        for a in crate::modular::valid_coprimes_up_to(26) {
            let params = AffineParams::new(a, 7, 26).unwrap();
            let tr = RuneTranslator::affine(english(), &params, Folding::none()).unwrap();
            for c in english() {
                assert_eq!(tr.reverse_lookup(tr.lookup(c).unwrap()), Ok(c));
            }
        }
    }

    #[test]
    fn test_lookup_miss_is_error() {
        let params = AffineParams::new(5, 3, 26).unwrap();
        let tr = RuneTranslator::affine(english(), &params, Folding::upper(None)).unwrap();
        assert_eq!(tr.lookup('7'), Err(CipherError::SymbolNotMapped("'7'".to_string())));
        assert!(tr.reverse_lookup('!').is_err());
    }

    #[test]
    fn test_case_preserved() {
        let params = AffineParams::new(5, 3, 26).unwrap();
        let tr = RuneTranslator::affine(english(), &params, Folding::upper(None)).unwrap();
        assert_eq!(tr.lookup('d'), Ok('s'));
        assert!(tr.contains('d'));
        assert!(tr.folding().is_enabled());
        assert!(!RuneTranslator::new(vec!['a'], vec!['b'], Folding::none())
            .unwrap()
            .folding()
            .is_enabled());
    }

    #[test]
    fn test_affine_params_size_must_match() {
        let params = AffineParams::new(3, 1, 10).unwrap();
        assert!(RuneTranslator::affine(english(), &params, Folding::none()).is_err());
    }

    #[test]
    fn test_byte_translator() {
        let symbols: Vec<u8> = (0..=255).collect();
        let params = AffineParams::new(7, 11, 256).unwrap();
        let tr = RuneTranslator::affine(symbols, &params, Folding::none()).unwrap();
        assert_eq!(tr.lookup(1u8), Ok(18u8));
        assert_eq!(tr.reverse_lookup(18u8), Ok(1u8));
    }
}
