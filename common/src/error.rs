use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    #[error("input is empty, no code can be built")]
    EmptyInput,
    #[error("symbol {symbol} has no code in the mapping table")]
    UnknownSymbol { symbol: String },
    #[error("invalid code at bit {position}: {reason}")]
    InvalidCode {
        position: usize,
        reason: &'static str,
    },
}

impl HuffError {
    pub fn unknown_symbol<S: core::fmt::Debug>(symbol: &S) -> Self {
        HuffError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        }
    }
}

pub type Result<T> = std::result::Result<T, HuffError>;
