/*!
Shared building blocks of the huffman workspace: symbol counting, the error taxonomy and
compression statistics.
*/
pub mod error;
pub mod stats;

use std::collections::HashMap;
use std::hash::Hash;

use log::log_enabled;
use log::Level::Trace;
use log::*;

pub use error::{HuffError, Result};

/// An element of the input alphabet, e.g. a `char` or a byte.
pub trait Symbol: Copy + Eq + Hash + core::fmt::Debug {}

impl<T: Copy + Eq + Hash + core::fmt::Debug> Symbol for T {}

/// Occurrence counts per distinct symbol.
///
/// Entries are kept in order of first occurrence in the input, so anything derived from the
/// table (tie-breaks while building a tree) is reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: Vec<(S, usize)>,
    /// symbol to position in `counts`
    positions: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.positions.get(symbol).map(|pos| self.counts[*pos].1)
    }

    /// iterates `(symbol, count)` in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// number of counted symbols, equals the input length
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// creates a table with the counts of each symbol
pub fn count<S: Symbol>(symbols: &[S]) -> Result<FrequencyTable<S>> {
    if symbols.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    let mut counts: Vec<(S, usize)> = Vec::new();
    let mut positions = HashMap::new();
    for symbol in symbols {
        let pos = *positions.entry(*symbol).or_insert_with(|| {
            counts.push((*symbol, 0));
            counts.len() - 1
        });
        counts[pos].1 += 1;
    }
    debug!(
        "counted {} symbols, {} distinct",
        symbols.len(),
        counts.len()
    );
    if log_enabled!(Trace) {
        for (symbol, count) in &counts {
            trace!("{:?}    {}", symbol, count);
        }
    }
    Ok(FrequencyTable { counts, positions })
}

/// counts the chars of a text
pub fn count_str(text: &str) -> Result<FrequencyTable<char>> {
    let chars: Vec<char> = text.chars().collect();
    count(&chars)
}
