//! Periodic secret: the secret repeats over the effective positions.

use super::{verify_keys, Cursor, KeySequencer};
use crate::error::CipherError;
use crate::symbol::Symbol;

#[derive(Debug, Clone)]
pub struct Bellaso<S: Symbol> {
    secret: Vec<S>,
    domain: String,
    cursor: Cursor,
}

impl<S: Symbol> Bellaso<S> {
    /// # Parameters
    /// - `secret`: Trimmed, case-folded secret (see
    ///   [`prepare_secret`](super::prepare_secret)).
    /// - `domain`: Alphabet name, for errors.
    ///
    /// # Errors
    /// [`CipherError::EmptySecret`] if `secret` is empty.
    pub fn new(secret: Vec<S>, domain: &str) -> Result<Self, CipherError> {
        if secret.is_empty() {
            return Err(CipherError::EmptySecret);
        }
        Ok(Bellaso {
            secret,
            domain: domain.to_string(),
            cursor: Cursor::default(),
        })
    }

    /// Folded secret, one key per position.
    pub fn secret(&self) -> &[S] {
        &self.secret
    }
}

impl<S: Symbol> KeySequencer<S> for Bellaso<S> {
    fn name(&self) -> &'static str {
        "bellaso"
    }

    fn skip(&mut self) -> usize {
        self.cursor.skip()
    }

    fn skipped(&self) -> usize {
        self.cursor.skipped()
    }

    fn get_key(&mut self, position: usize, _target: S) -> S {
        let effective = self.cursor.effective(position);
        self.secret[effective % self.secret.len()]
    }

    fn verify(&self, is_member: &dyn Fn(S) -> bool) -> Result<(), CipherError> {
        verify_keys(&self.secret, &self.domain, is_member)
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}
