//! Error types for the tabula library.
//!
//! [`CipherError`] covers construction and run-time failures of the cipher
//! engine. [`HeaderError`] covers the binary file header codec, which is the
//! only place this crate touches `std::io`.

use thiserror::Error;

/// Errors produced by alphabets, tables, parameter validation and the
/// cipher engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Alphabet name is empty or whitespace only.
    #[error("alphabet name must not be blank")]
    BlankAlphabetName,

    /// Alphabet has no symbols.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// A symbol appears more than once (possibly only after case folding).
    #[error("alphabet '{alphabet}' contains duplicate symbol {symbol}")]
    DuplicateSymbol { alphabet: String, symbol: String },

    /// Modulus is too small to carry an Affine transform.
    #[error("modulus {0} is invalid, must be at least 2")]
    InvalidModulus(usize),

    /// Affine coefficient `A` must be positive.
    #[error("coefficient A={0} is invalid, must be positive")]
    InvalidCoefficient(usize),

    /// Affine coefficient `A` shares a factor with the alphabet size.
    #[error("coefficient A={a} is not coprime with N={n}")]
    NotCoprime { a: usize, n: usize },

    /// Slave alphabet size differs from the master while size checking is on.
    #[error("slave alphabet size {slave} differs from master size {master}")]
    AlphabetSizeMismatch { master: usize, slave: usize },

    /// A key or secret symbol is not a member of the working alphabet.
    #[error("key symbol {key} is not part of alphabet '{alphabet}'")]
    KeyNotInAlphabet { key: String, alphabet: String },

    /// Secret is empty after trimming whitespace.
    #[error("secret must contain at least one symbol")]
    EmptySecret,

    /// Translator lookup miss. Translators are complete bijections, so this
    /// always indicates a fault rather than an alphabet gap.
    #[error("symbol {0} has no translation")]
    SymbolNotMapped(String),

    /// Translator source and target differ in cardinality.
    #[error("translator source size {source_len} differs from target size {target_len}")]
    TranslatorSizeMismatch { source_len: usize, target_len: usize },

    /// Autokey feedback was pushed faster than keys were consumed.
    #[error("autokey feedback buffer full (capacity {capacity})")]
    FeedbackOverflow { capacity: usize },

    /// Byte-level operation requested on an alphabet with multi-byte symbols.
    #[error("alphabet '{0}' has symbols outside the single-byte range")]
    NotByteAlphabet(String),
}

/// Errors produced while reading or writing the binary file header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Prologue magic does not match.
    #[error("invalid header magic: expected 0xBABEF007, got {0:#010x}")]
    BadMagic(u32),

    /// Epilogue trailer does not match.
    #[error("invalid header trailer: expected 0xDEAD, got {0:#06x}")]
    BadTrailer(u16),

    /// Header was written by an incompatible major version.
    #[error("unsupported header major version {major}")]
    UnsupportedVersion { major: u8 },

    /// Algorithm sub-code is not one of the known tags.
    #[error("unknown algorithm tag {0:#06x}")]
    UnknownAlgorithm(u16),

    /// File extension does not fit in the one-byte length field.
    #[error("file extension is {0} bytes long, limit is 255")]
    ExtensionTooLong(usize),

    /// Underlying reader or writer failed.
    #[error("header I/O error: {0}")]
    Io(#[from] std::io::Error),
}
