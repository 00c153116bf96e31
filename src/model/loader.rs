//! word2vec artifact loading
//!
//! Parses token→vector tables in the two word2vec interchange formats:
//!
//! - **text**: a `count dim` header line, then one `token c1 .. cD` line per
//!   entry;
//! - **binary**: the same ASCII header, then per entry a space-terminated
//!   token followed by `dim` little-endian f32 components (entries may be
//!   newline-separated).
//!
//! Both encode the vocabulary in descending frequency order, which the
//! [`VectorStore`] preserves. Acquiring the artifact (download, caching) is
//! not this module's concern; it reads a local file.

use crate::model::{ModelError, VectorStore};
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// On-disk encoding of a word2vec artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// Whitespace-separated decimal components
    Text,
    /// Little-endian f32 components (gensim `binary=True`)
    Binary,
}

impl ModelFormat {
    /// Guess the format from the file extension: `.bin` is binary,
    /// everything else is text.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => Self::Binary,
            _ => Self::Text,
        }
    }
}

/// Load a word2vec artifact into a [`VectorStore`].
///
/// Logs vocabulary size, dimension, and elapsed time on success.
///
/// # Errors
/// Returns `ModelError` on I/O failure or malformed content. Any error here
/// is fatal at startup: the game never serves guesses with a partial model.
pub fn load_model(path: &Path, format: ModelFormat) -> Result<VectorStore, ModelError> {
    let started = Instant::now();
    let reader = BufReader::new(File::open(path)?);

    let store = match format {
        ModelFormat::Text => parse_text(reader)?,
        ModelFormat::Binary => parse_binary(reader)?,
    };

    log::info!(
        "loaded {} vectors of dimension {} from {} in {:.2}s",
        store.len(),
        store.dim(),
        path.display(),
        started.elapsed().as_secs_f64()
    );

    Ok(store)
}

/// Parse the `count dim` header line.
fn parse_header(line: &str) -> Result<(usize, usize), ModelError> {
    let invalid = || ModelError::InvalidHeader(line.trim_end().to_string());

    let mut parts = line.split_whitespace();
    let count: usize = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let dim: usize = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;

    if parts.next().is_some() || count == 0 || dim == 0 {
        return Err(invalid());
    }

    Ok((count, dim))
}

/// Parse the text format from any buffered reader.
pub fn parse_text<R: BufRead>(mut reader: R) -> Result<VectorStore, ModelError> {
    let mut header = String::new();
    if reader.read_line(&mut header)? == 0 {
        return Err(ModelError::InvalidHeader(String::new()));
    }
    let (count, dim) = parse_header(&header)?;

    let progress = ProgressBar::new(count as u64);
    let mut entries: Vec<(String, Vec<f32>)> = Vec::with_capacity(count);
    let mut line = String::new();

    for read in 0..count {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(ModelError::Truncated {
                expected: count,
                found: read,
            });
        }

        let mut parts = line.split_whitespace();
        let Some(token) = parts.next() else {
            return Err(ModelError::Truncated {
                expected: count,
                found: read,
            });
        };

        let mut vector = Vec::with_capacity(dim);
        for part in parts {
            let component: f32 = part.parse().map_err(|_| ModelError::InvalidComponent {
                token: token.to_string(),
                value: part.to_string(),
            })?;
            vector.push(component);
        }

        if vector.len() != dim {
            return Err(ModelError::DimensionMismatch {
                token: token.to_string(),
                expected: dim,
                found: vector.len(),
            });
        }

        entries.push((token.to_string(), vector));
        progress.inc(1);
    }

    progress.finish_and_clear();
    VectorStore::from_entries(dim, entries)
}

/// Parse the binary format from any buffered reader.
pub fn parse_binary<R: BufRead>(mut reader: R) -> Result<VectorStore, ModelError> {
    let mut header_bytes = Vec::new();
    if reader.read_until(b'\n', &mut header_bytes)? == 0 {
        return Err(ModelError::InvalidHeader(String::new()));
    }
    let header = String::from_utf8_lossy(&header_bytes);
    let (count, dim) = parse_header(&header)?;

    let progress = ProgressBar::new(count as u64);
    let mut entries: Vec<(String, Vec<f32>)> = Vec::with_capacity(count);
    let mut token_bytes = Vec::new();
    let mut vector_bytes = vec![0u8; dim * size_of::<f32>()];

    for read in 0..count {
        token_bytes.clear();
        if reader.read_until(b' ', &mut token_bytes)? == 0 {
            return Err(ModelError::Truncated {
                expected: count,
                found: read,
            });
        }

        // Entries may be newline-separated; the token itself ends at the
        // space delimiter.
        let token = String::from_utf8_lossy(&token_bytes)
            .trim_matches(['\n', '\r', ' '])
            .to_string();

        reader.read_exact(&mut vector_bytes).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                ModelError::Truncated {
                    expected: count,
                    found: read,
                }
            } else {
                ModelError::Io(err)
            }
        })?;

        let vector: Vec<f32> = vector_bytes
            .chunks_exact(size_of::<f32>())
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        entries.push((token, vector));
        progress.inc(1);
    }

    progress.finish_and_clear();
    VectorStore::from_entries(dim, entries)
}
