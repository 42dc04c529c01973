//! TabulaRecta: square substitution table.
//!
//! Row `i` of the table is the alphabet rotated left by `i` symbols, so
//! `matrix[i][j] == symbols[(i + j) mod N]` and row 0 is the identity row.
//! Encoding reads the cell at (key row, plaintext column); decoding finds
//! the ciphertext symbol inside the key row and reads the column header.
//!
//! The table is generic over [`Symbol`] so the same implementation serves
//! text (`char`) and byte (`u8`) streams.

use std::collections::HashMap;

use tracing::Span;

use crate::alphabet::Alphabet;
use crate::config::Context;
use crate::error::CipherError;
use crate::symbol::{Folding, Symbol};

/// N×N rotation matrix built once per cipher session.
#[derive(Debug, Clone)]
pub struct TabulaRecta<S: Symbol> {
    matrix: Vec<Vec<S>>,
    index: HashMap<S, usize>,
    folding: Folding,
    span: Span,
}

impl<S: Symbol> TabulaRecta<S> {
    /// Builds the table for an alphabet.
    ///
    /// The alphabet is cloned and case-folded exactly once, honouring its
    /// special-case handler, before the matrix is generated.
    ///
    /// # Parameters
    /// - `alphabet`: Source alphabet.
    /// - `fold_case`: Uppercase symbols and restore case on output.
    /// - `ctx`: Logging context.
    ///
    /// # Errors
    /// - [`CipherError::DuplicateSymbol`] if folding collapses two symbols.
    /// - [`CipherError::NotByteAlphabet`] if a symbol does not fit `S`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::alphabet::builtin;
    /// use tabula::config::Context;
    /// use tabula::tabula::TabulaRecta;
    ///
    /// let tr = TabulaRecta::from_alphabet(&builtin::english(), true, &Context::default()).unwrap();
    /// assert_eq!(tr.encode('c', 'M'), 'o');
    /// assert_eq!(tr.decode('o', 'M'), 'c');
    /// ```
    pub fn from_alphabet(
        alphabet: &Alphabet,
        fold_case: bool,
        ctx: &Context,
    ) -> Result<Self, CipherError> {
        let (symbols, folding) = alphabet.folded_symbols(fold_case)?;
        tracing::debug!(
            parent: ctx.span(),
            alphabet = alphabet.name(),
            size = symbols.len(),
            fold_case,
            "building tabula recta"
        );
        Self::new(alphabet.name(), symbols, folding, ctx)
    }
}

impl TabulaRecta<u8> {
    /// Table over all 256 byte values, case-sensitive.
    pub fn binary(ctx: &Context) -> Self {
        let symbols: Vec<u8> = (0..=255).collect();
        let index = symbols.iter().enumerate().map(|(i, &s)| (s, i)).collect();
        TabulaRecta {
            matrix: generate(&symbols),
            index,
            folding: Folding::none(),
            span: ctx.span().clone(),
        }
    }
}

impl<S: Symbol> TabulaRecta<S> {
    /// Builds the table from already folded symbols.
    ///
    /// # Errors
    /// - [`CipherError::EmptyAlphabet`] if `symbols` is empty.
    /// - [`CipherError::DuplicateSymbol`] if a symbol repeats.
    pub fn new(
        name: &str,
        symbols: Vec<S>,
        folding: Folding,
        ctx: &Context,
    ) -> Result<Self, CipherError> {
        if symbols.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &s) in symbols.iter().enumerate() {
            if index.insert(s, i).is_some() {
                return Err(CipherError::DuplicateSymbol {
                    alphabet: name.to_string(),
                    symbol: format!("{:?}", s),
                });
            }
        }
        Ok(TabulaRecta {
            matrix: generate(&symbols),
            index,
            folding,
            span: ctx.span().clone(),
        })
    }

    /// Table dimension `N`.
    pub fn size(&self) -> usize {
        self.matrix.len()
    }

    /// The identity row (case-folded alphabet).
    pub fn symbols(&self) -> &[S] {
        &self.matrix[0]
    }

    /// Row `i` of the table.
    ///
    /// # Panics
    /// Caller contract violation if `i >= size()`.
    pub fn row(&self, i: usize) -> &[S] {
        assert!(i < self.size(), "tabula row {} outside {}x{} square", i, self.size(), self.size());
        &self.matrix[i]
    }

    /// Cell `(row, col)`.
    ///
    /// # Panics
    /// Caller contract violation if either index is outside the square.
    pub fn cell(&self, row: usize, col: usize) -> S {
        assert!(
            col < self.size(),
            "tabula column {} outside {}x{} square",
            col,
            self.size(),
            self.size()
        );
        self.row(row)[col]
    }

    /// Case-folding policy of the table.
    pub fn folding(&self) -> &Folding {
        &self.folding
    }

    /// Column of `symbol` in the identity row, after folding.
    pub fn position_of(&self, symbol: S) -> Option<usize> {
        let (folded, _) = self.folding.fold(symbol);
        self.index.get(&folded).copied()
    }

    /// Identity-row symbol at `index`, if in range.
    pub fn symbol_at(&self, index: usize) -> Option<S> {
        self.matrix[0].get(index).copied()
    }

    /// Membership test after folding.
    pub fn contains(&self, symbol: S) -> bool {
        self.position_of(symbol).is_some()
    }

    /// Encodes `symbol` under `key`.
    ///
    /// Returns `symbol` unchanged (and logs a warning) if either the key or
    /// the symbol is not in the table; callers pre-filter to members, so
    /// this is a pass-through rather than an error.
    pub fn encode(&self, symbol: S, key: S) -> S {
        let (folded, was_lower) = self.folding.fold(symbol);
        let (Some(row), Some(col)) = (self.position_of(key), self.index.get(&folded).copied())
        else {
            tracing::warn!(
                parent: &self.span,
                symbol = ?symbol,
                key = ?key,
                "encode pass-through, symbol or key not in tabula"
            );
            return symbol;
        };
        self.folding.restore(self.cell(row, col), was_lower)
    }

    /// Decodes `symbol` under `key` (mirror of [`encode`](Self::encode)).
    pub fn decode(&self, symbol: S, key: S) -> S {
        let (folded, was_lower) = self.folding.fold(symbol);
        let (Some(row), Some(pos)) = (self.position_of(key), self.index.get(&folded).copied())
        else {
            tracing::warn!(
                parent: &self.span,
                symbol = ?symbol,
                key = ?key,
                "decode pass-through, symbol or key not in tabula"
            );
            return symbol;
        };
        let n = self.size();
        // Column of `folded` within the key row.
        let col = (pos + n - row) % n;
        debug_assert!(self.cell(row, col) == folded);
        self.folding.restore(self.cell(0, col), was_lower)
    }
}

/// Generates the rotation matrix `m[i][j] = symbols[(i + j) mod N]`.
fn generate<S: Symbol>(symbols: &[S]) -> Vec<Vec<S>> {
    let n = symbols.len();
    (0..n)
        .map(|i| (0..n).map(|j| symbols[(i + j) % n]).collect())
        .collect()
}
