//! Fixed shift: the same key symbol at every position.

use super::{verify_keys, Cursor, KeySequencer};
use crate::error::CipherError;
use crate::symbol::Symbol;

#[derive(Debug, Clone)]
pub struct Caesar<S: Symbol> {
    key: S,
    domain: String,
    cursor: Cursor,
}

impl<S: Symbol> Caesar<S> {
    /// # Parameters
    /// - `key`: Shift key, already folded to the alphabet's case.
    /// - `domain`: Name of the alphabet the key belongs to.
    pub fn new(key: S, domain: &str) -> Self {
        Caesar {
            key,
            domain: domain.to_string(),
            cursor: Cursor::default(),
        }
    }

    /// Folded shift key.
    pub fn key(&self) -> S {
        self.key
    }
}

impl<S: Symbol> KeySequencer<S> for Caesar<S> {
    fn name(&self) -> &'static str {
        "caesar"
    }

    fn skip(&mut self) -> usize {
        self.cursor.skip()
    }

    fn skipped(&self) -> usize {
        self.cursor.skipped()
    }

    fn get_key(&mut self, position: usize, _target: S) -> S {
        self.cursor.effective(position);
        self.key
    }

    fn verify(&self, is_member: &dyn Fn(S) -> bool) -> Result<(), CipherError> {
        verify_keys(&[self.key], &self.domain, is_member)
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}
