use std::collections::HashMap;

use bitstream::BitString;
use common::Symbol;

/// One row of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry<S: Symbol> {
    pub symbol: S,
    pub code: BitString,
    /// weight of the leaf the code was assigned to
    pub weight: usize,
}

/// Bijection between symbols and their prefix codes.
///
/// Entries keep the order in which codes were assigned (breadth-first over the tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable<S: Symbol> {
    entries: Vec<TableEntry<S>>,
    by_symbol: HashMap<S, usize>,
    by_code: HashMap<BitString, usize>,
}

impl<S: Symbol> Default for MappingTable<S> {
    fn default() -> Self {
        MappingTable {
            entries: Vec::new(),
            by_symbol: HashMap::new(),
            by_code: HashMap::new(),
        }
    }
}

impl<S: Symbol> MappingTable<S> {
    pub(crate) fn with_capacity(num_symbols: usize) -> Self {
        MappingTable {
            entries: Vec::with_capacity(num_symbols),
            by_symbol: HashMap::with_capacity(num_symbols),
            by_code: HashMap::with_capacity(num_symbols),
        }
    }

    pub(crate) fn insert(&mut self, symbol: S, code: BitString, weight: usize) {
        debug_assert!(!self.by_symbol.contains_key(&symbol));
        debug_assert!(!self.by_code.contains_key(&code));
        let pos = self.entries.len();
        self.by_symbol.insert(symbol, pos);
        self.by_code.insert(code.clone(), pos);
        self.entries.push(TableEntry {
            symbol,
            code,
            weight,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// the code of `symbol`
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.by_symbol
            .get(symbol)
            .map(|pos| &self.entries[*pos].code)
    }

    /// the symbol whose code is exactly `code`
    pub fn symbol_for(&self, code: &BitString) -> Option<S> {
        self.by_code.get(code).map(|pos| self.entries[*pos].symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableEntry<S>> {
        self.entries.iter()
    }

    /// Number of bits needed to encode the message the table was built from.
    pub fn encoded_bit_length(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.weight * entry.code.len())
            .sum()
    }

    /// checks that no code is a prefix of another code
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&BitString> = self.entries.iter().map(|entry| &entry.code).collect();
        codes.sort();
        // in sorted order, a code which prefixes any other code also prefixes its successor
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl<S: Symbol> core::fmt::Display for MappingTable<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{:?}    {}", entry.symbol, entry.code)?;
        }
        Ok(())
    }
}
