//! Error types for the slip codec.

use crate::money::Money2;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while encoding records.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Encoding requires a strictly positive amount
    #[error("Amount {amount} is not positive; record cannot be encoded")]
    NonPositiveAmount { amount: Money2 },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: slip-codec <records.csv> [output.csv]")]
    MissingArgument,
}
