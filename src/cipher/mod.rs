//! Public cipher surface.
//!
//! A [`Cipher`] binds a master alphabet, an optional slave alphabet and a
//! [`CipherVariant`]. Tables and key schedule are built once at
//! construction; every [`encode`](Cipher::encode) or
//! [`decode`](Cipher::decode) call starts a fresh session over them.

mod engine;
mod variant;

use crate::alphabet::Alphabet;
use crate::chain::{Chain, DiskParams, Reconciliation};
use crate::config::Context;
use crate::error::CipherError;
use crate::modular::AffineParams;

use engine::{Direction, Engine};

pub use variant::{Algorithm, CipherVariant};

/// Substitution cipher over a Unicode alphabet.
///
/// # Examples
///
/// ```
/// use tabula::alphabet::builtin;
/// use tabula::cipher::{Cipher, CipherVariant};
/// use tabula::config::Context;
///
/// let ctx = Context::default();
/// let mut cipher = Cipher::new(
///     builtin::english(),
///     CipherVariant::Caesar { key: 'M' },
///     &ctx,
/// )
/// .unwrap();
///
/// assert_eq!(cipher.encode("Attack at dawn!").unwrap(), "Mffmow mf pmiz!");
/// assert_eq!(cipher.decode("Mffmow mf pmiz!").unwrap(), "Attack at dawn!");
/// ```
#[derive(Debug)]
pub struct Cipher {
    ctx: Context,
    variant: CipherVariant,
    chain: Chain,
    engine: Engine<char>,
}

impl Cipher {
    /// Creates a cipher over `alphabet`.
    ///
    /// # Parameters
    /// - `alphabet`: Master alphabet.
    /// - `variant`: Cipher family and key material.
    /// - `ctx`: Settings and logging span, cloned into the cipher.
    ///
    /// # Errors
    /// - Any [`Alphabet::check`] error.
    /// - [`CipherError::InvalidModulus`], [`CipherError::InvalidCoefficient`]
    ///   or [`CipherError::NotCoprime`] for bad Affine coefficients.
    /// - [`CipherError::EmptySecret`] for a blank secret.
    /// - [`CipherError::KeyNotInAlphabet`] if a key symbol is not a member
    ///   of the alphabet.
    pub fn new(
        alphabet: Alphabet,
        variant: CipherVariant,
        ctx: &Context,
    ) -> Result<Self, CipherError> {
        alphabet.check()?;
        let params = variant.disk_params(alphabet.size())?;
        let chain = Chain::new(alphabet, params);
        let engine = Engine::build(&chain, &variant, ctx)?;
        tracing::debug!(
            parent: ctx.span(),
            algorithm = %variant.algorithm(),
            alphabet = chain.master().alphabet().name(),
            "cipher created"
        );
        Ok(Cipher {
            ctx: ctx.clone(),
            variant,
            chain,
            engine,
        })
    }

    /// Replaces the master alphabet, keeping the variant and re-attaching
    /// the current slave.
    ///
    /// # Errors
    /// As [`new`](Self::new) and [`with_chain`](Self::with_chain).
    pub fn with_alphabet(self, alphabet: Alphabet) -> Result<Self, CipherError> {
        let slave = self.chain.slave().map(|link| link.alphabet().clone());
        let mut cipher = Cipher::new(alphabet, self.variant, &self.ctx)?;
        if slave.is_some() {
            cipher.with_chain(slave)?;
        }
        Ok(cipher)
    }

    /// Attaches a slave alphabet, or detaches it when `slave` is `None`.
    ///
    /// On error the cipher is left unchanged.
    ///
    /// # Returns
    /// How the slave parameters were derived from the master's.
    ///
    /// # Errors
    /// Errors of [`Chain::attach`] and of building the slave disk.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::alphabet::builtin;
    /// use tabula::chain::Reconciliation;
    /// use tabula::cipher::{Cipher, CipherVariant};
    /// use tabula::config::Context;
    ///
    /// let ctx = Context::default();
    /// let mut cipher =
    ///     Cipher::new(builtin::english(), CipherVariant::Affine { a: 5, b: 3 }, &ctx).unwrap();
    /// let how = cipher.with_chain(Some(builtin::numbers())).unwrap();
    /// assert_eq!(how, Some(Reconciliation::Recomputed));
    ///
    /// let secret = cipher.encode("Room 101").unwrap();
    /// assert_eq!(cipher.decode(&secret).unwrap(), "Room 101");
    /// ```
    pub fn with_chain(
        &mut self,
        slave: Option<Alphabet>,
    ) -> Result<Option<Reconciliation>, CipherError> {
        let mut chain = self.chain.clone();
        let how = chain.attach(slave, &self.ctx)?;
        let engine = Engine::build(&chain, &self.variant, &self.ctx)?;
        self.chain = chain;
        self.engine = engine;
        Ok(how)
    }

    /// Rebuilds the cipher over a new alphabet and, optionally, a new
    /// variant. The slave alphabet is dropped.
    ///
    /// On error the cipher is left unchanged.
    ///
    /// # Errors
    /// As [`new`](Self::new).
    pub fn rebuild(
        &mut self,
        alphabet: Alphabet,
        variant: Option<CipherVariant>,
    ) -> Result<(), CipherError> {
        let variant = variant.unwrap_or_else(|| self.variant.clone());
        *self = Cipher::new(alphabet, variant, &self.ctx)?;
        Ok(())
    }

    /// Symbols of the master alphabet as a string.
    pub fn alphabet(&self) -> String {
        self.chain.master().alphabet().to_string()
    }

    /// Master alphabet.
    pub fn master_alphabet(&self) -> &Alphabet {
        self.chain.master().alphabet()
    }

    /// Chained slave alphabet, if any.
    pub fn slave_alphabet(&self) -> Option<&Alphabet> {
        self.chain.slave().map(|link| link.alphabet())
    }

    /// Current chain with its reconciled disk parameters.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Family and key material.
    pub fn variant(&self) -> &CipherVariant {
        &self.variant
    }

    /// Family tag, as written to file headers.
    pub fn algorithm(&self) -> Algorithm {
        self.variant.algorithm()
    }

    /// Settings and logging span this cipher was built with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Affine parameters of the master and, if chained, the slave.
    pub fn affine_params(&self) -> Option<(AffineParams, Option<AffineParams>)> {
        let DiskParams::Affine(master) = self.chain.master().params() else {
            return None;
        };
        let slave = self.chain.slave().and_then(|link| match link.params() {
            DiskParams::Affine(p) => Some(p),
            DiskParams::Tabula => None,
        });
        Some((master, slave))
    }

    /// Encrypts `text`. Symbols outside the alphabets pass through.
    ///
    /// # Errors
    /// [`CipherError::FeedbackOverflow`] or [`CipherError::SymbolNotMapped`]
    /// on an internal fault.
    pub fn encode(&mut self, text: &str) -> Result<String, CipherError> {
        let out = self.engine.run(text.chars(), Direction::Encode)?;
        Ok(out.into_iter().collect())
    }

    /// Decrypts `text`.
    ///
    /// # Errors
    /// As [`encode`](Self::encode).
    pub fn decode(&mut self, text: &str) -> Result<String, CipherError> {
        let out = self.engine.run(text.chars(), Direction::Decode)?;
        Ok(out.into_iter().collect())
    }

    /// Encrypts raw bytes, treating each byte as the symbol `U+00XX`.
    ///
    /// # Errors
    /// [`CipherError::NotByteAlphabet`] if an alphabet of the chain has a
    /// symbol above `U+00FF`, plus the errors of [`encode`](Self::encode).
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::alphabet::builtin;
    /// use tabula::cipher::{Cipher, CipherVariant};
    /// use tabula::config::Context;
    ///
    /// let ctx = Context::default();
    /// let variant = CipherVariant::Bellaso { secret: "\u{7}\u{ff}\u{42}".to_string() };
    /// let mut cipher = Cipher::new(builtin::binary(), variant, &ctx).unwrap();
    /// let data = [0u8, 1, 2, 250, 255];
    /// let sealed = cipher.encode_bytes(&data).unwrap();
    /// assert_eq!(cipher.decode_bytes(&sealed).unwrap(), data);
    /// ```
    pub fn encode_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.byte_engine()?
            .run(data.iter().copied(), Direction::Encode)
    }

    /// Decrypts raw bytes.
    ///
    /// # Errors
    /// As [`encode_bytes`](Self::encode_bytes).
    pub fn decode_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.byte_engine()?
            .run(data.iter().copied(), Direction::Decode)
    }

    fn byte_engine(&self) -> Result<Engine<u8>, CipherError> {
        let engine = Engine::build(&self.chain, &self.variant, &self.ctx)?;
        Ok(engine)
    }
}
