//! Engine settings and the logging context handed to constructors.
//!
//! There is no global configuration or logger. Callers build a [`Context`]
//! once and pass it by reference to every constructor that needs settings
//! or emits log events; components keep a clone of its span.

use serde::{Deserialize, Serialize};
use tracing::Span;

/// Tunable behaviour of the cipher engine.
///
/// Serialisable so that an outer profile layer can persist it; missing
/// fields fall back to [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fold input to the alphabet's case before lookup and restore the
    /// original case afterwards. Only applies to alphabets without
    /// lowercase symbols.
    pub fold_case: bool,

    /// Reject a chained slave alphabet whose size differs from the master.
    pub strict_chain_size: bool,

    /// Emit a `trace` event for every stream symbol passed through unchanged.
    pub trace_skipped: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fold_case: true,
            strict_chain_size: false,
            trace_skipped: false,
        }
    }
}

/// Settings plus the `tracing` span under which a cipher session logs.
#[derive(Debug, Clone)]
pub struct Context {
    config: Config,
    span: Span,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Context {
    /// Creates a context with the given settings and a fresh `tabula` span.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::config::{Config, Context};
    ///
    /// let ctx = Context::new(Config {
    ///     strict_chain_size: true,
    ///     ..Config::default()
    /// });
    /// assert!(ctx.config().strict_chain_size);
    /// ```
    pub fn new(config: Config) -> Self {
        let span = tracing::info_span!("tabula", fold_case = config.fold_case);
        Context { config, span }
    }

    /// Creates a context that logs under a caller-supplied span.
    pub fn with_span(config: Config, span: Span) -> Self {
        Context { config, span }
    }

    /// Returns the engine settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the span components log under.
    pub fn span(&self) -> &Span {
        &self.span
    }
}
