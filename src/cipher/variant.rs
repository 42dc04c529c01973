//! Cipher families and their key material.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::DiskParams;
use crate::error::CipherError;
use crate::modular::verify_settings;
use crate::sequencer::{
    prepare_key, prepare_secret, Affine, Bellaso, Caesar, Didimus, Fibonacci, KeySequencer,
    Vigenere,
};
use crate::symbol::{Folding, Symbol};

/// Cipher family identifier.
///
/// Each family carries a stable 16-bit tag written into file headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Caesar,
    Didimus,
    Fibonacci,
    Bellaso,
    Vigenere,
    Affine,
}

impl Algorithm {
    /// All families in declaration order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Caesar,
        Algorithm::Didimus,
        Algorithm::Fibonacci,
        Algorithm::Bellaso,
        Algorithm::Vigenere,
        Algorithm::Affine,
    ];

    /// Header tag of the family.
    pub fn tag(self) -> u16 {
        match self {
            Algorithm::Caesar => 0xCAE5,
            Algorithm::Didimus => 0xD1D1,
            Algorithm::Fibonacci => 0xF1B0,
            Algorithm::Bellaso => 0xBE11,
            Algorithm::Vigenere => 0xA070,
            Algorithm::Affine => 0xAFF1,
        }
    }

    /// Position in [`ALL`](Self::ALL).
    pub fn ordinal(self) -> u16 {
        self as u16
    }

    /// Inverse of [`tag`](Self::tag).
    pub fn from_tag(tag: u16) -> Option<Algorithm> {
        Self::ALL.iter().copied().find(|a| a.tag() == tag)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Caesar => "Caesar",
            Algorithm::Didimus => "Didimus",
            Algorithm::Fibonacci => "Fibonacci",
            Algorithm::Bellaso => "Bellaso",
            Algorithm::Vigenere => "Vigenere",
            Algorithm::Affine => "Affine",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cipher family together with its key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum CipherVariant {
    /// Fixed shift by the position of `key`.
    Caesar { key: char },
    /// `key` on even effective positions, `key + offset` on odd ones.
    Didimus { key: char, offset: usize },
    /// `key` offset by the first ten Fibonacci terms, cycled.
    Fibonacci { key: char },
    /// Periodic secret.
    Bellaso { secret: String },
    /// Autokey: the secret, then the plaintext itself.
    Vigenere { secret: String },
    /// `E(x) = (a·x + b) mod N`.
    Affine { a: usize, b: usize },
}

impl CipherVariant {
    /// Family tag of this variant.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            CipherVariant::Caesar { .. } => Algorithm::Caesar,
            CipherVariant::Didimus { .. } => Algorithm::Didimus,
            CipherVariant::Fibonacci { .. } => Algorithm::Fibonacci,
            CipherVariant::Bellaso { .. } => Algorithm::Bellaso,
            CipherVariant::Vigenere { .. } => Algorithm::Vigenere,
            CipherVariant::Affine { .. } => Algorithm::Affine,
        }
    }

    /// Disk parameters for a master alphabet of `size` symbols.
    ///
    /// # Errors
    /// Errors of [`verify_settings`] for the Affine family.
    pub(crate) fn disk_params(&self, size: usize) -> Result<DiskParams, CipherError> {
        match *self {
            CipherVariant::Affine { a, b } => Ok(DiskParams::Affine(verify_settings(a, b, size)?)),
            _ => Ok(DiskParams::Tabula),
        }
    }

    /// Builds the key schedule over the master `symbols`.
    ///
    /// Keys are folded with `folding` so they match the table rows.
    ///
    /// # Errors
    /// - [`CipherError::EmptySecret`] for a blank Bellaso or Vigenère secret.
    /// - [`CipherError::KeyNotInAlphabet`] if a key symbol cannot be
    ///   represented or offset within `symbols`.
    pub(crate) fn sequencer<S: Symbol>(
        &self,
        symbols: &[S],
        folding: &Folding,
        domain: &str,
    ) -> Result<Box<dyn KeySequencer<S>>, CipherError> {
        let sequencer: Box<dyn KeySequencer<S>> = match self {
            CipherVariant::Caesar { key } => {
                Box::new(Caesar::new(prepare_key(*key, folding, domain)?, domain))
            }
            CipherVariant::Didimus { key, offset } => {
                let prime = prepare_key(*key, folding, domain)?;
                Box::new(Didimus::new(prime, *offset, symbols, domain)?)
            }
            CipherVariant::Fibonacci { key } => {
                let prime = prepare_key(*key, folding, domain)?;
                Box::new(Fibonacci::new(prime, symbols, domain)?)
            }
            CipherVariant::Bellaso { secret } => {
                Box::new(Bellaso::new(prepare_secret(secret, folding, domain)?, domain)?)
            }
            CipherVariant::Vigenere { secret } => {
                Box::new(Vigenere::new(prepare_secret(secret, folding, domain)?, domain)?)
            }
            CipherVariant::Affine { .. } => Box::new(Affine::new()),
        };
        Ok(sequencer)
    }
}
