/// Size of one symbol of the original message, when no better measure is known.
pub const DEFAULT_BITS_PER_SYMBOL: usize = 8;

/// Encoded size in percent of the original size.
///
/// `encoded_bit_length` counts binary-digit characters, not packed bits.
/// Returns 0.0 for an empty original.
pub fn compression_ratio(
    encoded_bit_length: usize,
    original_symbol_count: usize,
    bits_per_symbol: usize,
) -> f64 {
    let original_bits = original_symbol_count as f64 * bits_per_symbol as f64;
    if original_bits == 0.0 {
        return 0.0;
    }
    encoded_bit_length as f64 / original_bits * 100.0
}

/// Same as [`compression_ratio`], but the original is measured as its UTF-8 size.
pub fn text_compression_ratio(encoded_bit_length: usize, text: &str) -> f64 {
    compression_ratio(encoded_bit_length, text.len(), DEFAULT_BITS_PER_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(compression_ratio(9, 6, DEFAULT_BITS_PER_SYMBOL), 18.75);
        assert_eq!(compression_ratio(48, 6, 8), 100.0);
        assert_eq!(compression_ratio(3, 1, 1), 300.0);
    }

    #[test]
    fn test_ratio_empty_original() {
        assert_eq!(compression_ratio(0, 0, 8), 0.0);
        assert_eq!(compression_ratio(10, 5, 0), 0.0);
    }

    #[test]
    fn test_ratio_huge_original_does_not_overflow() {
        let ratio = compression_ratio(10, usize::MAX / 4, 8);
        assert!(ratio > 0.0 && ratio < 1e-10, "ratio {}", ratio);
    }

    #[test]
    fn test_text_ratio_counts_utf8_bytes() {
        // 'é' is two bytes
        assert_eq!(text_compression_ratio(8, "é"), 50.0);
        assert_eq!(text_compression_ratio(16, "ab"), 100.0);
    }
}
