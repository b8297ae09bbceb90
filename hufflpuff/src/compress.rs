use bitstream::BitString;
use common::HuffError;
use common::Result;
use common::Symbol;
use log::*;

use crate::table::MappingTable;

/// Encodes `message` by concatenating the code of every symbol in input order.
///
/// Fails with `UnknownSymbol` for the first symbol without code in `table`.
pub fn encode<S: Symbol>(message: &[S], table: &MappingTable<S>) -> Result<BitString> {
    let mut bit_c = BitString::with_capacity(message.len());
    for symbol in message {
        huf_encode_symbol(symbol, &mut bit_c, table)?;
    }
    debug!(
        "encoded {} symbols into {} bits",
        message.len(),
        bit_c.len()
    );
    Ok(bit_c)
}

#[inline]
fn huf_encode_symbol<S: Symbol>(
    symbol: &S,
    bit_c: &mut BitString,
    table: &MappingTable<S>,
) -> Result<()> {
    let code = table
        .get(symbol)
        .ok_or_else(|| HuffError::unknown_symbol(symbol))?;
    bit_c.add_bits(code);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_tree;
    use crate::tree::build_tree::tree_to_table;
    use common::count;

    fn table_for(input: &[char]) -> MappingTable<char> {
        tree_to_table(&build_tree(&count(input).unwrap()).unwrap())
    }

    #[test]
    fn test_encode_aaabbc() {
        let input: Vec<char> = "aaabbc".chars().collect();
        let table = table_for(&input);
        let bits = encode(&input, &table).unwrap();
        assert_eq!(bits.as_str(), "000111110");
        assert_eq!(bits.len(), 9);
    }

    #[test]
    fn test_encode_other_message_with_same_table() {
        let table = table_for(&"aaabbc".chars().collect::<Vec<_>>());
        let bits = encode(&['c', 'a', 'b'], &table).unwrap();
        assert_eq!(bits.as_str(), "10011");
        assert!(encode(&[], &table).unwrap().is_empty());
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let table = table_for(&['a', 'b']);
        assert_eq!(
            encode(&['a', 'x', 'y'], &table),
            Err(HuffError::UnknownSymbol {
                symbol: "'x'".to_string()
            })
        );
    }

    #[test]
    fn test_encode_single_symbol() {
        let table = table_for(&['z', 'z', 'z']);
        assert_eq!(encode(&['z', 'z', 'z'], &table).unwrap().as_str(), "000");
    }
}
