//! Key sequencers: per-position key schedules for each cipher family.
//!
//! A sequencer is session-scoped mutable state owned by one cipher. The
//! engine walks the stream in order and, for every symbol, either calls
//! [`KeySequencer::skip`] (symbol outside the active alphabets) or
//! [`KeySequencer::get_key`] with the absolute stream position. Position
//! dependent schedules work on the *effective* position, i.e. the absolute
//! position minus the number of skipped symbols, so inserting or removing
//! spaces and punctuation never shifts the key schedule.
//!
//! ```text
//! Caesar     K K K K K ...                 fixed shift
//! Didimus    K A K A K ...                 bi-positional
//! Fibonacci  K0 K1 ... K9 K0 ...           Fibonacci offsets, cycled
//! Bellaso    S0 S1 S2 S0 S1 ...            periodic secret
//! Vigenere   S0 S1 S2 P0 P1 ...            autokey with plaintext feedback
//! Affine     (formula, no key)
//! ```

mod affine;
mod bellaso;
mod caesar;
mod didimus;
mod fibonacci;
mod ring;
mod vigenere;

use std::fmt;

use crate::error::CipherError;
use crate::symbol::{Folding, Symbol};

pub use affine::Affine;
pub use bellaso::Bellaso;
pub use caesar::Caesar;
pub use didimus::Didimus;
pub use fibonacci::{Fibonacci, FIBONACCI_TERMS};
pub use ring::RingBuffer;
pub use vigenere::Vigenere;

/// Common contract of all key schedules.
pub trait KeySequencer<S: Symbol>: fmt::Debug + Send {
    /// Schedule name used in logs.
    fn name(&self) -> &'static str;

    /// Records a stream symbol outside the active alphabets.
    ///
    /// # Returns
    /// The updated skip count.
    fn skip(&mut self) -> usize;

    /// Number of symbols skipped in the current session.
    fn skipped(&self) -> usize;

    /// Key symbol for the stream symbol at absolute `position`.
    ///
    /// # Panics
    /// If the engine breaks the ordering contract (see the variant docs).
    fn get_key(&mut self, position: usize, target: S) -> S;

    /// Checks every key symbol this schedule can emit against `is_member`.
    ///
    /// # Errors
    /// [`CipherError::KeyNotInAlphabet`] for the first non-member key.
    fn verify(&self, is_member: &dyn Fn(S) -> bool) -> Result<(), CipherError>;

    /// Clears all session state.
    fn reset(&mut self);

    /// Tells the schedule which direction the next run goes.
    ///
    /// The engine calls it before every run. Schedules whose keys do not
    /// depend on direction keep the default no-op; the autokey schedule is
    /// direction-neutral because the engine always feeds plaintext back.
    fn set_decryption_mode(&mut self, _decrypting: bool) {}

    /// Feeds the plaintext symbol of the last processed position back into
    /// the schedule.
    fn feedback(&mut self, _symbol: S) -> Result<(), CipherError> {
        Ok(())
    }

    /// Returns `true` if the engine must call [`feedback`](Self::feedback)
    /// after every keyed symbol.
    fn uses_feedback(&self) -> bool {
        false
    }
}

/// Skip counter and effective-position arithmetic shared by all schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    skipped: usize,
}

impl Cursor {
    /// Counts one skipped symbol and returns the new total.
    pub fn skip(&mut self) -> usize {
        self.skipped += 1;
        self.skipped
    }

    /// Symbols skipped since the last reset.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Converts an absolute stream position to the alphabet-relative one.
    ///
    /// # Panics
    /// If `position` is smaller than the skip count, which means the
    /// caller skipped symbols it never counted as positions.
    pub fn effective(&self, position: usize) -> usize {
        position
            .checked_sub(self.skipped)
            .expect("stream position behind skip counter")
    }

    /// Clears the skip count.
    pub fn reset(&mut self) {
        *self = Cursor::default();
    }
}

/// Trims and case-folds a secret, converting it to the symbol type.
///
/// # Errors
/// - [`CipherError::EmptySecret`] if nothing remains after trimming.
/// - [`CipherError::KeyNotInAlphabet`] if a symbol cannot be represented
///   as `S`.
pub fn prepare_secret<S: Symbol>(
    secret: &str,
    folding: &Folding,
    domain: &str,
) -> Result<Vec<S>, CipherError> {
    let trimmed = secret.trim();
    if trimmed.is_empty() {
        return Err(CipherError::EmptySecret);
    }
    trimmed
        .chars()
        .map(|c| {
            S::from_char(c)
                .map(|s| folding.fold(s).0)
                .ok_or_else(|| not_in_domain(c, domain))
        })
        .collect()
}

/// Converts and folds a single key symbol.
///
/// # Errors
/// [`CipherError::KeyNotInAlphabet`] if `key` cannot be represented as `S`.
pub fn prepare_key<S: Symbol>(key: char, folding: &Folding, domain: &str) -> Result<S, CipherError> {
    S::from_char(key)
        .map(|s| folding.fold(s).0)
        .ok_or_else(|| not_in_domain(key, domain))
}

/// Index of `key` in `symbols`.
pub(crate) fn index_of<S: Symbol>(key: S, symbols: &[S], domain: &str) -> Result<usize, CipherError> {
    symbols
        .iter()
        .position(|&s| s == key)
        .ok_or_else(|| not_in_domain(key, domain))
}

/// Symbol at `(base + offset) mod N`, bumped to index 1 when the sum lands
/// on index 0, which would encode as "no shift".
pub(crate) fn offset_key<S: Symbol>(symbols: &[S], base: usize, offset: usize) -> S {
    let n = symbols.len();
    let mut index = (base % n + offset % n) % n;
    if index == 0 {
        index = 1 % n;
    }
    symbols[index]
}

pub(crate) fn verify_keys<S: Symbol>(
    keys: &[S],
    domain: &str,
    is_member: &dyn Fn(S) -> bool,
) -> Result<(), CipherError> {
    match keys.iter().find(|&&k| !is_member(k)) {
        Some(&k) => Err(not_in_domain(k, domain)),
        None => Ok(()),
    }
}

fn not_in_domain(key: impl fmt::Debug, domain: &str) -> CipherError {
    CipherError::KeyNotInAlphabet {
        key: format!("{:?}", key),
        alphabet: domain.to_string(),
    }
}
