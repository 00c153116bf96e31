//! Word-embedding model: vector store and artifact loading
//!
//! The [`VectorStore`] is built once at startup from a word2vec artifact and
//! is read-only for the rest of the process lifetime. Any failure here is
//! fatal: the game must not serve guesses without a fully loaded model.

pub mod loader;
mod store;

pub use loader::{ModelFormat, load_model};
pub use store::VectorStore;

use std::fmt;
use std::io;

/// Error type for model loading and construction
///
/// All variants are startup-fatal; there is no per-request recovery.
#[derive(Debug)]
pub enum ModelError {
    /// Underlying I/O failure while reading the artifact
    Io(io::Error),
    /// The `count dim` header line could not be parsed
    InvalidHeader(String),
    /// A vector row had the wrong number of components
    DimensionMismatch {
        token: String,
        expected: usize,
        found: usize,
    },
    /// A vector component could not be parsed (text format)
    InvalidComponent { token: String, value: String },
    /// The artifact ended before the declared entry count was read
    Truncated { expected: usize, found: usize },
    /// A token's vector has zero magnitude and cannot be normalized
    ZeroVector(String),
    /// No usable entries remained after loading
    EmptyVocabulary,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error reading model: {err}"),
            Self::InvalidHeader(line) => {
                write!(f, "Invalid model header, expected 'count dim': {line:?}")
            }
            Self::DimensionMismatch {
                token,
                expected,
                found,
            } => write!(
                f,
                "Vector for {token:?} has {found} components, expected {expected}"
            ),
            Self::InvalidComponent { token, value } => {
                write!(f, "Vector for {token:?} has unparseable component {value:?}")
            }
            Self::Truncated { expected, found } => write!(
                f,
                "Model ended after {found} of {expected} declared entries"
            ),
            Self::ZeroVector(token) => {
                write!(f, "Vector for {token:?} has zero magnitude")
            }
            Self::EmptyVocabulary => write!(f, "Model contains no usable entries"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ModelError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
