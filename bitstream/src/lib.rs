/*!

Bitstream holds sequences of binary digits as characters `'0'` and `'1'`.

Bits are not packed into bytes, one bit costs one character. The length of a [`BitString`] is
therefore the number of binary digits, which is what the compression statistics report.

*/

use common::HuffError;
use common::Result;
use core::str::FromStr;

pub const ZERO: char = '0';
pub const ONE: char = '1';

/// A sequence of binary digits, e.g. a prefix code or an encoded message.
///
/// Only `'0'` and `'1'` can be stored, so readers never need to validate again.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitString {
    digits: String,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_bits: usize) -> Self {
        BitString {
            digits: String::with_capacity(num_bits),
        }
    }

    /// number of binary digits
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    pub fn add_bit(&mut self, bit: bool) {
        self.digits.push(if bit { ONE } else { ZERO });
    }

    /// appends all bits of `other`
    #[inline]
    pub fn add_bits(&mut self, other: &BitString) {
        self.digits.push_str(&other.digits);
    }

    /// returns a copy with `bit` appended, used to derive a child code from its parent
    pub fn with_bit(&self, bit: bool) -> BitString {
        let mut child = BitString::with_capacity(self.len() + 1);
        child.add_bits(self);
        child.add_bit(bit);
        child
    }

    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.digits.starts_with(&prefix.digits)
    }

    /// iterates the bits, `true` for `'1'`
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.digits.bytes().map(|digit| digit == ONE as u8)
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl FromStr for BitString {
    type Err = HuffError;

    fn from_str(digits: &str) -> Result<Self> {
        if let Some(position) = digits.chars().position(|c| c != ZERO && c != ONE) {
            return Err(HuffError::InvalidCode {
                position,
                reason: "not a binary digit",
            });
        }
        Ok(BitString {
            digits: digits.to_string(),
        })
    }
}

impl core::fmt::Display for BitString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.digits)
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> String {
        bits.digits
    }
}
