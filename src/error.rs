//! Error types for keakit

use std::fmt;

/// Result type for keakit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in keakit operations
#[derive(Debug)]
pub enum Error {
    /// Key not present in a translation table
    UnknownKey(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownKey(msg) => write!(f, "Unknown key: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
