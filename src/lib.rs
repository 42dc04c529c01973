//! Classical substitution ciphers over Unicode alphabets.
//!
//! Six cipher families share one engine: Caesar, Didimus, Fibonacci,
//! Bellaso, Vigenère (autokey) and Affine. Alphabets are ordered sets of
//! Unicode scalar values, so Greek, Cyrillic or German text is handled the
//! same way as ASCII. Symbols outside the active alphabets pass through
//! unchanged and never advance the key schedule.
//!
//! These ciphers are for teaching and puzzles. They offer no security.
//!
//! # Architecture
//!
//! ```text
//! Alphabet ──▶ TabulaRecta   (shift families, N×N rotation table)
//!          └─▶ RuneTranslator (Affine, precomputed bijection)
//!                    ▲
//! KeySequencer ──────┤ key per effective position
//!                    │
//! Chain      master alphabet + optional slave (digits, punctuation)
//!     ↕
//! Cipher     public command surface (encode/decode text and bytes)
//!     ↕
//! Pipe       cipher stages and presentation post-processing
//! ```
//!
//! # Examples
//!
//! Autokey Vigenère with a digit slave alphabet:
//!
//! ```
//! use tabula::alphabet::builtin;
//! use tabula::{Cipher, CipherVariant, Context};
//!
//! let ctx = Context::default();
//! let variant = CipherVariant::Vigenere { secret: "KEY".to_string() };
//! let mut cipher = Cipher::new(builtin::english(), variant, &ctx).unwrap();
//! assert_eq!(cipher.encode("MESSAGE").unwrap(), "WIQEEYW");
//!
//! cipher.with_chain(Some(builtin::numbers())).unwrap();
//! let sealed = cipher.encode("Meet at 10:45").unwrap();
//! assert_eq!(cipher.decode(&sealed).unwrap(), "Meet at 10:45");
//! ```
//!
//! Affine over the English alphabet:
//!
//! ```
//! use tabula::alphabet::builtin;
//! use tabula::{Cipher, CipherVariant, Context};
//!
//! let mut cipher = Cipher::new(
//!     builtin::english(),
//!     CipherVariant::Affine { a: 5, b: 3 },
//!     &Context::default(),
//! )
//! .unwrap();
//! assert_eq!(cipher.encode("d").unwrap(), "s");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod chain;
pub mod cipher;
pub mod config;
pub mod error;
pub mod header;
pub mod modular;
pub mod pipe;
pub mod sequencer;
pub mod symbol;
pub mod tabula;
pub mod translator;

pub use alphabet::Alphabet;
pub use cipher::{Algorithm, Cipher, CipherVariant};
pub use config::{Config, Context};
pub use error::{CipherError, HeaderError};
pub use pipe::{Pipe, PostProcess, Stage};
