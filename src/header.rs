//! Binary header prepended to enciphered files.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! offset  size  field
//! 0       4     magic 0xBABEF007
//! 4       1     major version
//! 5       1     minor version
//! 6       2     cipher variant
//! 8       2     algorithm tag
//! 10      1     extension length L
//! 11      L     original file extension (UTF-8)
//! 11+L    2     trailer 0xDEAD
//! ```

use std::io::{self, Read, Write};

use crate::cipher::Algorithm;
use crate::error::HeaderError;

/// Prologue magic number.
pub const MAGIC: u32 = 0xBABE_F007;

/// Epilogue trailer.
pub const TRAILER: u16 = 0xDEAD;

/// Major version written by this crate. Readers reject any other.
pub const VERSION_MAJOR: u8 = 1;

/// Minor version written by this crate.
pub const VERSION_MINOR: u8 = 0;

/// Longest extension the one-byte length field can carry.
pub const MAX_EXTENSION_LEN: usize = u8::MAX as usize;

/// Size of the fixed prologue in bytes.
pub const PROLOGUE_LEN: usize = 10;

/// Decoded file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    major: u8,
    minor: u8,
    variant: u16,
    algorithm: Algorithm,
    extension: String,
}

impl FileHeader {
    /// Header for the current version.
    ///
    /// The variant code is [`Algorithm::ordinal`].
    ///
    /// # Errors
    /// [`HeaderError::ExtensionTooLong`] if `extension` exceeds 255 bytes.
    pub fn new(algorithm: Algorithm, extension: &str) -> Result<Self, HeaderError> {
        if extension.len() > MAX_EXTENSION_LEN {
            return Err(HeaderError::ExtensionTooLong(extension.len()));
        }
        Ok(FileHeader {
            major: VERSION_MAJOR,
            minor: VERSION_MINOR,
            variant: algorithm.ordinal(),
            algorithm,
            extension: extension.to_string(),
        })
    }

    /// Format major version.
    pub fn major(&self) -> u8 {
        self.major
    }

    /// Format minor version.
    pub fn minor(&self) -> u8 {
        self.minor
    }

    /// Variant field, informational only.
    pub fn variant(&self) -> u16 {
        self.variant
    }

    /// Cipher family that sealed the payload.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Original file extension, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        PROLOGUE_LEN + 1 + self.extension.len() + 2
    }

    /// Serialises the header.
    ///
    /// # Errors
    /// - [`HeaderError::ExtensionTooLong`] if the extension exceeds 255 bytes.
    /// - [`HeaderError::Io`] if the writer fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::cipher::Algorithm;
    /// use tabula::header::FileHeader;
    ///
    /// let header = FileHeader::new(Algorithm::Vigenere, "txt").unwrap();
    /// let mut buf = Vec::new();
    /// header.write_to(&mut buf).unwrap();
    /// assert_eq!(&buf[..4], &[0x07, 0xF0, 0xBE, 0xBA]);
    /// assert_eq!(FileHeader::read_from(&mut buf.as_slice()).unwrap(), header);
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), HeaderError> {
        let ext = self.extension.as_bytes();
        let ext_len =
            u8::try_from(ext.len()).map_err(|_| HeaderError::ExtensionTooLong(ext.len()))?;
        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.extend_from_slice(&MAGIC.to_le_bytes());
        buf.push(self.major);
        buf.push(self.minor);
        buf.extend_from_slice(&self.variant.to_le_bytes());
        buf.extend_from_slice(&self.algorithm.tag().to_le_bytes());
        buf.push(ext_len);
        buf.extend_from_slice(ext);
        buf.extend_from_slice(&TRAILER.to_le_bytes());
        writer.write_all(&buf)?;
        Ok(())
    }

    /// Parses and validates a header, leaving `reader` positioned at the
    /// first payload byte.
    ///
    /// # Errors
    /// - [`HeaderError::BadMagic`], [`HeaderError::BadTrailer`] or
    ///   [`HeaderError::UnsupportedVersion`] on a malformed header.
    /// - [`HeaderError::UnknownAlgorithm`] for an unknown algorithm tag.
    /// - [`HeaderError::Io`] on a short read or a non UTF-8 extension.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, HeaderError> {
        let mut prologue = [0u8; PROLOGUE_LEN];
        reader.read_exact(&mut prologue)?;

        let magic = u32::from_le_bytes([prologue[0], prologue[1], prologue[2], prologue[3]]);
        if magic != MAGIC {
            return Err(HeaderError::BadMagic(magic));
        }
        let major = prologue[4];
        let minor = prologue[5];
        if major != VERSION_MAJOR {
            return Err(HeaderError::UnsupportedVersion { major });
        }
        let variant = u16::from_le_bytes([prologue[6], prologue[7]]);
        let tag = u16::from_le_bytes([prologue[8], prologue[9]]);
        let algorithm = Algorithm::from_tag(tag).ok_or(HeaderError::UnknownAlgorithm(tag))?;

        let mut len = [0u8; 1];
        reader.read_exact(&mut len)?;
        let mut ext = vec![0u8; usize::from(len[0])];
        reader.read_exact(&mut ext)?;
        let extension = String::from_utf8(ext)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut trailer = [0u8; 2];
        reader.read_exact(&mut trailer)?;
        let trailer = u16::from_le_bytes(trailer);
        if trailer != TRAILER {
            return Err(HeaderError::BadTrailer(trailer));
        }

        Ok(FileHeader {
            major,
            minor,
            variant,
            algorithm,
            extension,
        })
    }
}
