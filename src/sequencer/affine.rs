//! Affine placeholder schedule.
//!
//! The Affine transform is a fixed linear formula applied through a
//! precomputed translator, so there is no key material. The schedule only
//! tracks skips to satisfy the common contract and hands the target back.

use super::{Cursor, KeySequencer};
use crate::error::CipherError;
use crate::symbol::Symbol;

#[derive(Debug, Clone, Default)]
pub struct Affine {
    cursor: Cursor,
}

impl Affine {
    /// Schedule with a zero skip count.
    pub fn new() -> Self {
        Affine::default()
    }
}

impl<S: Symbol> KeySequencer<S> for Affine {
    fn name(&self) -> &'static str {
        "affine"
    }

    fn skip(&mut self) -> usize {
        self.cursor.skip()
    }

    fn skipped(&self) -> usize {
        self.cursor.skipped()
    }

    fn get_key(&mut self, position: usize, target: S) -> S {
        self.cursor.effective(position);
        target
    }

    fn verify(&self, _is_member: &dyn Fn(S) -> bool) -> Result<(), CipherError> {
        Ok(())
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}
