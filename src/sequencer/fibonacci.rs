//! Fibonacci-derived schedule: ten keys offset from the prime key by the
//! first ten Fibonacci numbers, cycled round-robin.

use super::{index_of, offset_key, verify_keys, Cursor, KeySequencer};
use crate::error::CipherError;
use crate::symbol::Symbol;

/// Offsets applied to the prime key's index.
pub const FIBONACCI_TERMS: [usize; 10] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];

#[derive(Debug, Clone)]
pub struct Fibonacci<S: Symbol> {
    keys: Vec<S>,
    domain: String,
    cursor: Cursor,
}

impl<S: Symbol> Fibonacci<S> {
    /// Derives the ten keys `symbols[(index(prime) + F_i) mod N]`, each
    /// moved to index 1 if it lands on index 0.
    ///
    /// # Errors
    /// [`CipherError::KeyNotInAlphabet`] if `prime` is not in `symbols`.
    pub fn new(prime: S, symbols: &[S], domain: &str) -> Result<Self, CipherError> {
        let base = index_of(prime, symbols, domain)?;
        let keys = FIBONACCI_TERMS
            .iter()
            .map(|&term| offset_key(symbols, base, term))
            .collect();
        Ok(Fibonacci {
            keys,
            domain: domain.to_string(),
            cursor: Cursor::default(),
        })
    }

    /// The ten derived keys, in schedule order.
    pub fn keys(&self) -> &[S] {
        &self.keys
    }
}

impl<S: Symbol> KeySequencer<S> for Fibonacci<S> {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn skip(&mut self) -> usize {
        self.cursor.skip()
    }

    fn skipped(&self) -> usize {
        self.cursor.skipped()
    }

    fn get_key(&mut self, position: usize, _target: S) -> S {
        let effective = self.cursor.effective(position);
        self.keys[effective % self.keys.len()]
    }

    fn verify(&self, is_member: &dyn Fn(S) -> bool) -> Result<(), CipherError> {
        verify_keys(&self.keys, &self.domain, is_member)
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Vec<char> {
        ('A'..='Z').collect()
    }

    #[test]
    fn test_key_derivation() {
        let seq = Fibonacci::new('C', &english(), "English").unwrap();
        let keys: String = seq.keys().iter().collect();
        // C + {0,1,1,2,3,5,8,13,21,34} mod 26
        assert_eq!(keys, "CDDEFHKPXK");
    }

    #[test]
    fn test_zero_index_bumped() {
        let seq = Fibonacci::new('A', &english(), "English").unwrap();
        assert_eq!(seq.keys()[0], 'B');
    }

    #[test]
    fn test_cycles_every_ten() {
        let mut seq = Fibonacci::new('C', &english(), "English").unwrap();
        let first: Vec<char> = (0..10).map(|p| seq.get_key(p, 'A')).collect();
        let second: Vec<char> = (10..20).map(|p| seq.get_key(p, 'A')).collect();
        assert_eq!(first, second);
    }
}
