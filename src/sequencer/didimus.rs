//! Bi-positional shift: the prime key on even effective positions, an
//! alternate key derived from it on odd ones.

use super::{index_of, offset_key, verify_keys, Cursor, KeySequencer};
use crate::error::CipherError;
use crate::symbol::Symbol;

#[derive(Debug, Clone)]
pub struct Didimus<S: Symbol> {
    prime: S,
    alternate: S,
    domain: String,
    cursor: Cursor,
}

impl<S: Symbol> Didimus<S> {
    /// Creates the schedule.
    ///
    /// The alternate key is the symbol at `(index(prime) + offset) mod N`,
    /// moved to index 1 if that lands on index 0.
    ///
    /// # Parameters
    /// - `prime`: Prime key, already folded.
    /// - `offset`: Distance from the prime key to the alternate key.
    /// - `symbols`: Folded alphabet symbols.
    /// - `domain`: Alphabet name, for errors.
    ///
    /// # Errors
    /// [`CipherError::KeyNotInAlphabet`] if `prime` is not in `symbols`.
    pub fn new(prime: S, offset: usize, symbols: &[S], domain: &str) -> Result<Self, CipherError> {
        let base = index_of(prime, symbols, domain)?;
        Ok(Didimus {
            prime,
            alternate: offset_key(symbols, base, offset),
            domain: domain.to_string(),
            cursor: Cursor::default(),
        })
    }

    /// Key of even effective positions.
    pub fn prime(&self) -> S {
        self.prime
    }

    /// Key of odd effective positions.
    pub fn alternate(&self) -> S {
        self.alternate
    }
}

impl<S: Symbol> KeySequencer<S> for Didimus<S> {
    fn name(&self) -> &'static str {
        "didimus"
    }

    fn skip(&mut self) -> usize {
        self.cursor.skip()
    }

    fn skipped(&self) -> usize {
        self.cursor.skipped()
    }

    fn get_key(&mut self, position: usize, _target: S) -> S {
        if self.cursor.effective(position) % 2 == 0 {
            self.prime
        } else {
            self.alternate
        }
    }

    fn verify(&self, is_member: &dyn Fn(S) -> bool) -> Result<(), CipherError> {
        verify_keys(&[self.prime, self.alternate], &self.domain, is_member)
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}
