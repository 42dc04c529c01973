//! Master/slave alphabet chaining.
//!
//! A slave alphabet (digits, punctuation, ...) extends the coverage of the
//! master alphabet. Its cipher parameters are derived from the master's,
//! never chosen independently, and the master's parameters are never
//! altered by the derivation.

use std::collections::BTreeSet;

use crate::alphabet::Alphabet;
use crate::config::Context;
use crate::error::CipherError;
use crate::modular::{valid_coprimes_up_to, AffineParams};

/// Cipher parameters carried by one alphabet of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskParams {
    /// Shift-table families; keys come from the shared sequencer.
    Tabula,
    /// Affine family.
    Affine(AffineParams),
}

/// How the slave's Affine parameters were obtained from the master's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Equal sizes: master parameters reused verbatim.
    Reused,
    /// `A` is coprime with both sizes: `A`, `B` reused, `Aʹ` recomputed.
    Adjusted,
    /// `A` replaced by a coprime of the slave size.
    Recomputed,
    /// Shift-table family, nothing to reconcile.
    Tabula,
}

/// Derives the slave's Affine parameters.
///
/// 1. Equal sizes: reuse the master parameters.
/// 2. `A` in the intersection of the valid coprimes of both sizes: keep
///    `A` and `B`, switch to the slave modulus and recompute `Aʹ`.
/// 3. Otherwise pick `A = coprimes(Ns)[A_master mod |coprimes(Ns)|]` and
///    validate `(A, B_master, Ns)` from scratch.
///
/// # Errors
/// [`CipherError::InvalidModulus`] if the slave has fewer than 2 symbols.
///
/// # Examples
///
/// ```
/// use tabula::chain::{reconcile, Reconciliation};
/// use tabula::modular::AffineParams;
///
/// let master = AffineParams::new(7, 3, 26).unwrap();
/// let (slave, how) = reconcile(&master, 10).unwrap();
/// assert_eq!(how, Reconciliation::Adjusted);
/// assert_eq!((slave.a(), slave.b(), slave.n()), (7, 3, 10));
/// ```
pub fn reconcile(
    master: &AffineParams,
    slave_size: usize,
) -> Result<(AffineParams, Reconciliation), CipherError> {
    if slave_size == master.n() {
        return Ok((*master, Reconciliation::Reused));
    }
    let slave_coprimes = valid_coprimes_up_to(slave_size);
    if slave_coprimes.is_empty() {
        return Err(CipherError::InvalidModulus(slave_size));
    }
    let master_set: BTreeSet<usize> = valid_coprimes_up_to(master.n()).into_iter().collect();
    let slave_set: BTreeSet<usize> = slave_coprimes.iter().copied().collect();
    if master_set.intersection(&slave_set).any(|&v| v == master.a()) {
        let params = master.with_modulus(slave_size)?;
        return Ok((params, Reconciliation::Adjusted));
    }
    let a = slave_coprimes[master.a() % slave_coprimes.len()];
    let params = AffineParams::new(a, master.b(), slave_size)?;
    Ok((params, Reconciliation::Recomputed))
}

/// An alphabet together with the parameters it is enciphered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    alphabet: Alphabet,
    params: DiskParams,
}

impl Link {
    /// Alphabet of this link.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Disk parameters derived for this alphabet.
    pub fn params(&self) -> DiskParams {
        self.params
    }
}

/// Master alphabet with an optional slave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    master: Link,
    slave: Option<Link>,
}

impl Chain {
    /// Unchained cipher over `master`.
    pub fn new(master: Alphabet, params: DiskParams) -> Self {
        Chain {
            master: Link {
                alphabet: master,
                params,
            },
            slave: None,
        }
    }

    /// Master link.
    pub fn master(&self) -> &Link {
        &self.master
    }

    /// Slave link, if attached.
    pub fn slave(&self) -> Option<&Link> {
        self.slave.as_ref()
    }

    /// Returns `true` if a slave is attached.
    pub fn is_chained(&self) -> bool {
        self.slave.is_some()
    }

    /// Attaches `slave`, or detaches the current slave when `None`.
    ///
    /// # Returns
    /// How the slave parameters were derived, or `None` after a detach.
    ///
    /// # Errors
    /// - Any [`Alphabet::check`] error of the slave.
    /// - [`CipherError::AlphabetSizeMismatch`] if sizes differ and
    ///   `strict_chain_size` is set.
    /// - Errors of [`reconcile`].
    pub fn attach(
        &mut self,
        slave: Option<Alphabet>,
        ctx: &Context,
    ) -> Result<Option<Reconciliation>, CipherError> {
        let Some(slave) = slave else {
            if self.slave.take().is_some() {
                tracing::debug!(parent: ctx.span(), "slave alphabet detached");
            }
            return Ok(None);
        };
        slave.check()?;
        let master_size = self.master.alphabet.size();
        if ctx.config().strict_chain_size && slave.size() != master_size {
            return Err(CipherError::AlphabetSizeMismatch {
                master: master_size,
                slave: slave.size(),
            });
        }
        let (params, how) = match self.master.params {
            DiskParams::Tabula => (DiskParams::Tabula, Reconciliation::Tabula),
            DiskParams::Affine(master) => {
                let (params, how) = reconcile(&master, slave.size())?;
                (DiskParams::Affine(params), how)
            }
        };
        tracing::debug!(
            parent: ctx.span(),
            master = self.master.alphabet.name(),
            slave = slave.name(),
            reconciliation = ?how,
            "slave alphabet attached"
        );
        self.slave = Some(Link {
            alphabet: slave,
            params,
        });
        Ok(Some(how))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::builtin;
    use crate::config::Config;

    #[test]
    fn test_reconcile_same_size_reuses() {
        let master = AffineParams::new(5, 3, 26).unwrap();
        let (slave, how) = reconcile(&master, 26).unwrap();
        assert_eq!(slave, master);
        assert_eq!(how, Reconciliation::Reused);
    }

    #[test]
    fn test_reconcile_common_coprime() {
        let master = AffineParams::new(3, 8, 26).unwrap();
        let (slave, how) = reconcile(&master, 10).unwrap();
        assert_eq!(how, Reconciliation::Adjusted);
        assert_eq!(slave.a(), 3);
        assert_eq!(slave.b(), 8);
        assert_eq!(slave.n(), 10);
        assert_eq!((slave.a() * slave.a_inverse()) % 10, 1);
    }

    #[test]
    fn test_reconcile_recomputes_coefficient() {
        // 5 is coprime with 26 but not with 10.
        let master = AffineParams::new(5, 3, 26).unwrap();
        let (slave, how) = reconcile(&master, 10).unwrap();
        assert_eq!(how, Reconciliation::Recomputed);
        // coprimes(10) = [1, 3, 7, 9], 5 mod 4 = 1
        assert_eq!(slave.a(), 3);
        assert_eq!(slave.b(), 3);
        assert_eq!(slave.n(), 10);
    }

    #[test]
    fn test_reconcile_coefficient_beyond_slave_range() {
        let master = AffineParams::new(11, 0, 26).unwrap();
        let (slave, how) = reconcile(&master, 10).unwrap();
        assert_eq!(how, Reconciliation::Recomputed);
        // coprimes(10) = [1, 3, 7, 9], 11 mod 4 = 3
        assert_eq!(slave.a(), 9);
    }

    #[test]
    fn test_reconcile_leaves_master_untouched() {
        let master = AffineParams::new(5, 3, 26).unwrap();
        let copy = master;
        let _ = reconcile(&master, 10).unwrap();
        assert_eq!(master, copy);
    }

    #[test]
    fn test_reconcile_rejects_tiny_slave() {
        let master = AffineParams::new(5, 3, 26).unwrap();
        assert_eq!(reconcile(&master, 1), Err(CipherError::InvalidModulus(1)));
    }

    #[test]
    fn test_attach_and_detach() {
        let ctx = Context::default();
        let master = AffineParams::new(5, 3, 26).unwrap();
        let mut chain = Chain::new(builtin::english(), DiskParams::Affine(master));
        let how = chain.attach(Some(builtin::numbers()), &ctx).unwrap();
        assert_eq!(how, Some(Reconciliation::Recomputed));
        assert!(chain.is_chained());
        assert_eq!(chain.master().params(), DiskParams::Affine(master));

        assert_eq!(chain.attach(None, &ctx).unwrap(), None);
        assert!(!chain.is_chained());
    }

    #[test]
    fn test_attach_tabula_family() {
        let ctx = Context::default();
        let mut chain = Chain::new(builtin::english(), DiskParams::Tabula);
        let how = chain.attach(Some(builtin::numbers()), &ctx).unwrap();
        assert_eq!(how, Some(Reconciliation::Tabula));
        assert_eq!(chain.slave().unwrap().params(), DiskParams::Tabula);
    }

    #[test]
    fn test_strict_size_check() {
        let ctx = Context::new(Config {
            strict_chain_size: true,
            ..Config::default()
        });
        let mut chain = Chain::new(builtin::english(), DiskParams::Tabula);
        assert_eq!(
            chain.attach(Some(builtin::numbers()), &ctx),
            Err(CipherError::AlphabetSizeMismatch {
                master: 26,
                slave: 10
            })
        );
        assert!(!chain.is_chained());
    }
}
