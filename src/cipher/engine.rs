//! Stream transcoder shared by every cipher family.
//!
//! The engine owns one disk per chained alphabet (a [`TabulaRecta`] for the
//! shift families, a [`RuneTranslator`] for Affine) and the key schedule.
//! Each run walks the stream once:
//!
//! ```text
//! symbol ─┬─ in master? ── key ──────────────── master disk ─┐
//!         ├─ in slave?  ── key mapped by index ─ slave disk ─┼─▶ output
//!         └─ neither    ── skip() ───────────────────────────┘
//! ```

use tracing::Span;

use super::variant::CipherVariant;
use crate::chain::{Chain, DiskParams, Link};
use crate::config::Context;
use crate::error::CipherError;
use crate::sequencer::KeySequencer;
use crate::symbol::{Folding, Symbol};
use crate::tabula::TabulaRecta;
use crate::translator::RuneTranslator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Encode,
    Decode,
}

/// Substitution disk of one alphabet.
#[derive(Debug)]
pub(crate) enum Disk<S: Symbol> {
    Tabula(TabulaRecta<S>),
    Translator(RuneTranslator<S>),
}

impl<S: Symbol> Disk<S> {
    fn build(link: &Link, fold_case: bool, ctx: &Context) -> Result<Self, CipherError> {
        let alphabet = link.alphabet();
        let fold_case = fold_case && !alphabet.has_lowercase();
        match link.params() {
            DiskParams::Tabula => Ok(Disk::Tabula(TabulaRecta::from_alphabet(
                alphabet, fold_case, ctx,
            )?)),
            DiskParams::Affine(params) => {
                let (symbols, folding) = alphabet.folded_symbols(fold_case)?;
                Ok(Disk::Translator(RuneTranslator::affine(
                    symbols, &params, folding,
                )?))
            }
        }
    }

    fn symbols(&self) -> &[S] {
        match self {
            Disk::Tabula(t) => t.symbols(),
            Disk::Translator(t) => t.source(),
        }
    }

    fn folding(&self) -> &Folding {
        match self {
            Disk::Tabula(t) => t.folding(),
            Disk::Translator(t) => t.folding(),
        }
    }

    fn contains(&self, symbol: S) -> bool {
        match self {
            Disk::Tabula(t) => t.contains(symbol),
            Disk::Translator(t) => t.contains(symbol),
        }
    }

    fn position_of(&self, symbol: S) -> Option<usize> {
        match self {
            Disk::Tabula(t) => t.position_of(symbol),
            Disk::Translator(t) => t.position_of(symbol),
        }
    }

    fn size(&self) -> usize {
        self.symbols().len()
    }

    fn apply(&self, symbol: S, key: S, direction: Direction) -> Result<S, CipherError> {
        match (self, direction) {
            (Disk::Tabula(t), Direction::Encode) => Ok(t.encode(symbol, key)),
            (Disk::Tabula(t), Direction::Decode) => Ok(t.decode(symbol, key)),
            (Disk::Translator(t), Direction::Encode) => t.lookup(symbol),
            (Disk::Translator(t), Direction::Decode) => t.reverse_lookup(symbol),
        }
    }

    /// Symbol of this disk at the position `symbol` holds in `from`,
    /// wrapped to this disk's size.
    fn map_from(&self, from: &Disk<S>, symbol: S) -> S {
        match from.position_of(symbol) {
            Some(index) => self.symbols()[index % self.size()],
            None => symbol,
        }
    }
}

/// Session state of one cipher over symbol type `S`.
#[derive(Debug)]
pub(crate) struct Engine<S: Symbol> {
    master: Disk<S>,
    slave: Option<Disk<S>>,
    sequencer: Box<dyn KeySequencer<S>>,
    trace_skipped: bool,
    span: Span,
}

impl<S: Symbol> Engine<S> {
    /// Builds disks and key schedule for `chain` and verifies every key
    /// symbol against the master alphabet.
    pub(crate) fn build(
        chain: &Chain,
        variant: &CipherVariant,
        ctx: &Context,
    ) -> Result<Self, CipherError> {
        let fold_case = ctx.config().fold_case;
        let master = Disk::build(chain.master(), fold_case, ctx)?;
        let slave = chain
            .slave()
            .map(|link| Disk::build(link, fold_case, ctx))
            .transpose()?;
        let domain = chain.master().alphabet().name();
        let sequencer = variant.sequencer(master.symbols(), master.folding(), domain)?;
        sequencer.verify(&|k| master.contains(k))?;
        tracing::debug!(
            parent: ctx.span(),
            schedule = sequencer.name(),
            master = domain,
            slave = chain.slave().map(|l| l.alphabet().name()),
            "cipher engine ready"
        );
        Ok(Engine {
            master,
            slave,
            sequencer,
            trace_skipped: ctx.config().trace_skipped,
            span: ctx.span().clone(),
        })
    }

    /// Transcodes `input` in one pass, resetting the schedule first.
    ///
    /// Symbols outside both alphabets pass through unchanged and do not
    /// advance the key schedule.
    pub(crate) fn run<I>(&mut self, input: I, direction: Direction) -> Result<Vec<S>, CipherError>
    where
        I: IntoIterator<Item = S>,
    {
        self.sequencer.reset();
        self.sequencer
            .set_decryption_mode(direction == Direction::Decode);
        let input = input.into_iter();
        let mut output = Vec::with_capacity(input.size_hint().0);

        for (position, symbol) in input.enumerate() {
            let disk = if self.master.contains(symbol) {
                None
            } else {
                match &self.slave {
                    Some(slave) if slave.contains(symbol) => Some(slave),
                    _ => {
                        let skipped = self.sequencer.skip();
                        if self.trace_skipped {
                            tracing::trace!(
                                parent: &self.span,
                                position,
                                skipped,
                                symbol = ?symbol,
                                "symbol outside alphabets"
                            );
                        }
                        output.push(symbol);
                        continue;
                    }
                }
            };

            let key = self.sequencer.get_key(position, symbol);
            let result = match disk {
                None => self.master.apply(symbol, key, direction)?,
                Some(slave) => slave.apply(symbol, slave.map_from(&self.master, key), direction)?,
            };

            if self.sequencer.uses_feedback() {
                let plain = match direction {
                    Direction::Encode => symbol,
                    Direction::Decode => result,
                };
                let plain = match disk {
                    None => plain,
                    Some(slave) => self.master.map_from(slave, plain),
                };
                self.sequencer.feedback(plain)?;
            }
            output.push(result);
        }

        tracing::trace!(
            parent: &self.span,
            ?direction,
            symbols = output.len(),
            skipped = self.sequencer.skipped(),
            "stream transcoded"
        );
        Ok(output)
    }
}
