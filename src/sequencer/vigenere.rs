//! Autokey schedule with plaintext feedback.
//!
//! The first `|secret|` effective positions use the secret. From then on
//! every key is the plaintext symbol `|secret|` positions back, supplied by
//! the engine through [`KeySequencer::feedback`]: when encrypting the
//! symbol just consumed, when decrypting the symbol just produced. Both
//! directions therefore feed the same plaintext stream.

use super::{verify_keys, Cursor, KeySequencer, RingBuffer};
use crate::error::CipherError;
use crate::symbol::Symbol;

#[derive(Debug, Clone)]
pub struct Vigenere<S: Symbol> {
    secret: Vec<S>,
    buffer: RingBuffer<S>,
    domain: String,
    cursor: Cursor,
}

impl<S: Symbol> Vigenere<S> {
    /// Creates the schedule with a feedback buffer of `|secret|` slots,
    /// which is exactly the lag between feeding and consuming a symbol.
    ///
    /// # Errors
    /// [`CipherError::EmptySecret`] if `secret` is empty.
    pub fn new(secret: Vec<S>, domain: &str) -> Result<Self, CipherError> {
        if secret.is_empty() {
            return Err(CipherError::EmptySecret);
        }
        let buffer = RingBuffer::with_capacity(secret.len());
        Ok(Vigenere {
            secret,
            buffer,
            domain: domain.to_string(),
            cursor: Cursor::default(),
        })
    }

    /// Folded secret keying the first `|secret|` positions.
    pub fn secret(&self) -> &[S] {
        &self.secret
    }

    /// Symbols fed but not yet consumed as keys.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

impl<S: Symbol> KeySequencer<S> for Vigenere<S> {
    fn name(&self) -> &'static str {
        "vigenere"
    }

    fn skip(&mut self) -> usize {
        self.cursor.skip()
    }

    fn skipped(&self) -> usize {
        self.cursor.skipped()
    }

    /// # Panics
    /// If the feedback buffer is empty past the secret, i.e. the engine did
    /// not call `feedback` after every keyed symbol.
    fn get_key(&mut self, position: usize, _target: S) -> S {
        let effective = self.cursor.effective(position);
        if effective < self.secret.len() {
            return self.secret[effective];
        }
        self.buffer
            .pop()
            .expect("autokey feedback buffer empty: feedback must follow every keyed symbol")
    }

    fn verify(&self, is_member: &dyn Fn(S) -> bool) -> Result<(), CipherError> {
        verify_keys(&self.secret, &self.domain, is_member)
    }

    fn reset(&mut self) {
        self.cursor.reset();
        self.buffer.clear();
    }

    fn feedback(&mut self, symbol: S) -> Result<(), CipherError> {
        self.buffer.push(symbol)
    }

    fn uses_feedback(&self) -> bool {
        true
    }
}
