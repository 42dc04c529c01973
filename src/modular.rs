//! Modular arithmetic for the Affine cipher and chain reconciliation.
//!
//! All functions are pure. [`AffineParams`] can only be obtained through
//! [`verify_settings`] (or [`AffineParams::new`], which delegates to it),
//! so an instance with a non-invertible coefficient cannot exist.

use serde::Serialize;

use crate::error::CipherError;

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Returns `true` if `gcd(a, b) == 1`.
pub fn are_coprime(a: usize, b: usize) -> bool {
    gcd(a, b) == 1
}

/// All `v` in `[1, n)` coprime with `n`, ascending.
///
/// # Examples
///
/// ```
/// use tabula::modular::valid_coprimes_up_to;
///
/// assert_eq!(
///     valid_coprimes_up_to(26),
///     vec![1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]
/// );
/// ```
pub fn valid_coprimes_up_to(n: usize) -> Vec<usize> {
    (1..n).filter(|&v| are_coprime(v, n)).collect()
}

/// Multiplicative inverse of `a` modulo `n` via the extended Euclidean
/// algorithm.
///
/// # Errors
/// - [`CipherError::InvalidModulus`] if `n < 2`.
/// - [`CipherError::NotCoprime`] if `a` and `n` share a factor.
pub fn modular_inverse(a: usize, n: usize) -> Result<usize, CipherError> {
    if n < 2 {
        return Err(CipherError::InvalidModulus(n));
    }
    let (mut old_r, mut r) = ((a % n) as i64, n as i64);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return Err(CipherError::NotCoprime { a, n });
    }
    Ok(old_s.rem_euclid(n as i64) as usize)
}

/// Validates Affine coefficients and returns the parameter set.
///
/// The inputs are never modified; the validated parameters, including the
/// inverse `Aʹ`, are the return value.
///
/// # Parameters
/// - `a`: Multiplicative coefficient (positive, coprime with `n`).
/// - `b`: Additive coefficient, applied modulo `n`.
/// - `n`: Alphabet cardinality (at least 2).
///
/// # Errors
/// - [`CipherError::InvalidModulus`] if `n < 2`.
/// - [`CipherError::InvalidCoefficient`] if `a == 0`.
/// - [`CipherError::NotCoprime`] if `gcd(a, n) != 1`.
pub fn verify_settings(a: usize, b: usize, n: usize) -> Result<AffineParams, CipherError> {
    if n < 2 {
        return Err(CipherError::InvalidModulus(n));
    }
    if a == 0 {
        return Err(CipherError::InvalidCoefficient(a));
    }
    if !are_coprime(a, n) {
        return Err(CipherError::NotCoprime { a, n });
    }
    let a_inverse = modular_inverse(a, n)?;
    Ok(AffineParams { a, b, a_inverse, n })
}

/// Validated Affine coefficients `y = (A·x + B) mod N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AffineParams {
    a: usize,
    b: usize,
    a_inverse: usize,
    n: usize,
}

impl AffineParams {
    /// Equivalent to [`verify_settings`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::modular::AffineParams;
    ///
    /// let p = AffineParams::new(5, 3, 26).unwrap();
    /// assert_eq!(p.encode(3), 18);
    /// assert_eq!(p.decode(18), 3);
    /// assert!(AffineParams::new(13, 3, 26).is_err());
    /// ```
    pub fn new(a: usize, b: usize, n: usize) -> Result<Self, CipherError> {
        verify_settings(a, b, n)
    }

    /// Multiplicative coefficient, as given.
    pub fn a(&self) -> usize {
        self.a
    }

    /// Additive coefficient, as given.
    pub fn b(&self) -> usize {
        self.b
    }

    /// Modular inverse of `A` modulo `N`.
    pub fn a_inverse(&self) -> usize {
        self.a_inverse
    }

    /// Modulus, the alphabet cardinality.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Forward transform of index `x`.
    ///
    /// Operands are reduced modulo `N` first, so any validated `A` and `B`
    /// are safe.
    pub fn encode(&self, x: usize) -> usize {
        let n = self.n;
        ((self.a % n) * (x % n) + self.b % n) % n
    }

    /// Inverse transform `x = Aʹ·(y − B) mod N`.
    pub fn decode(&self, y: usize) -> usize {
        let n = self.n;
        let shifted = (y % n + n - self.b % n) % n;
        (self.a_inverse * shifted) % n
    }

    /// Same `A` and `B` over a different modulus.
    ///
    /// # Errors
    /// As [`verify_settings`].
    pub fn with_modulus(&self, n: usize) -> Result<Self, CipherError> {
        verify_settings(self.a, self.b, n)
    }
}
