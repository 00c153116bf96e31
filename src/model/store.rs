//! Immutable in-memory vector store
//!
//! Holds the full vocabulary as a flat row-major `Vec<f32>` of
//! unit-normalized vectors plus a hash index for O(1) token lookup.
//! Vocabularies run to hundreds of thousands of entries and every guess
//! scans all of them, so rows are pre-normalized at construction: cosine
//! similarity between stored rows is a plain dot product.

use crate::core::normalize;
use crate::model::ModelError;
use rustc_hash::FxHashMap;

/// Immutable table of token → unit-normalized embedding vector
///
/// Token order follows the source artifact, which encodes descending
/// frequency: index 0 is the most frequent token. That ordering is the sole
/// source of "top-N frequent words" semantics and never changes after
/// construction.
#[derive(Debug)]
pub struct VectorStore {
    dim: usize,
    /// Row-major, `len() * dim` components, each row unit length
    vectors: Vec<f32>,
    /// Frequency-descending vocabulary
    tokens: Vec<String>,
    /// Token → row index
    index: FxHashMap<String, usize>,
}

impl VectorStore {
    /// Build a store from `(token, vector)` entries in frequency order.
    ///
    /// Tokens are normalized (trimmed, lowercased); when normalization
    /// collapses two entries the earlier (more frequent) one wins. Vectors
    /// are L2-normalized in place.
    ///
    /// # Errors
    /// Returns `ModelError` if a vector's length differs from `dim`, a
    /// vector has zero magnitude, or no entries remain.
    ///
    /// # Examples
    /// ```
    /// use semantix::model::VectorStore;
    ///
    /// let store = VectorStore::from_entries(
    ///     2,
    ///     vec![
    ///         ("chat".to_string(), vec![1.0, 0.0]),
    ///         ("chien".to_string(), vec![0.8, 0.6]),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(store.len(), 2);
    /// assert!(store.contains("chat"));
    /// ```
    pub fn from_entries<I>(dim: usize, entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let entries = entries.into_iter();
        let (low, _) = entries.size_hint();

        let mut tokens: Vec<String> = Vec::with_capacity(low);
        let mut vectors: Vec<f32> = Vec::with_capacity(low.saturating_mul(dim));
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for (raw_token, vector) in entries {
            let token = normalize(&raw_token);
            if token.is_empty() || index.contains_key(&token) {
                // Duplicate after normalization: the earlier entry is the
                // more frequent one and keeps its row.
                continue;
            }

            if vector.len() != dim {
                return Err(ModelError::DimensionMismatch {
                    token,
                    expected: dim,
                    found: vector.len(),
                });
            }

            let norm = vector.iter().map(|c| c * c).sum::<f32>().sqrt();
            if norm == 0.0 || !norm.is_finite() {
                return Err(ModelError::ZeroVector(token));
            }

            index.insert(token.clone(), tokens.len());
            tokens.push(token);
            vectors.extend(vector.iter().map(|c| c / norm));
        }

        if tokens.is_empty() {
            return Err(ModelError::EmptyVocabulary);
        }

        Ok(Self {
            dim,
            vectors,
            tokens,
            index,
        })
    }

    /// Vector dimension
    #[inline]
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tokens in the vocabulary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the vocabulary is empty (never true post-construction)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check membership without fetching the vector
    #[inline]
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Row index of a token, if present
    #[inline]
    #[must_use]
    pub fn position(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Unit-normalized vector for a token, if present
    #[inline]
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&[f32]> {
        self.position(token).map(|row| self.row(row))
    }

    /// Unit-normalized vector at a row index
    ///
    /// # Panics
    /// Panics if `row >= self.len()`.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.dim;
        &self.vectors[start..start + self.dim]
    }

    /// Token at a row index
    ///
    /// # Panics
    /// Panics if `row >= self.len()`.
    #[inline]
    #[must_use]
    pub fn token_at(&self, row: usize) -> &str {
        &self.tokens[row]
    }

    /// Full vocabulary in frequency-descending order
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(token: &str, vector: &[f32]) -> (String, Vec<f32>) {
        (token.to_string(), vector.to_vec())
    }

    #[test]
    fn from_entries_builds_index() {
        let store = VectorStore::from_entries(
            3,
            vec![
                entry("chat", &[1.0, 0.0, 0.0]),
                entry("chien", &[0.0, 1.0, 0.0]),
                entry("voiture", &[0.0, 0.0, 1.0]),
            ],
        )
        .unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.dim(), 3);
        assert_eq!(store.position("chat"), Some(0));
        assert_eq!(store.position("voiture"), Some(2));
        assert!(store.lookup("absent").is_none());
    }

    #[test]
    fn vectors_are_unit_normalized() {
        let store = VectorStore::from_entries(2, vec![entry("chat", &[3.0, 4.0])]).unwrap();

        let v = store.lookup("chat").unwrap();
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);

        let norm: f32 = v.iter().map(|c| c * c).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tokens_normalized_on_load() {
        let store = VectorStore::from_entries(
            2,
            vec![entry(" Chat ", &[1.0, 0.0]), entry("BANK_NOUN", &[0.0, 1.0])],
        )
        .unwrap();

        assert!(store.contains("chat"));
        assert!(store.contains("bank_noun"));
        assert!(!store.contains(" Chat "));
    }

    #[test]
    fn duplicate_keeps_most_frequent() {
        let store = VectorStore::from_entries(
            2,
            vec![entry("chat", &[1.0, 0.0]), entry("CHAT", &[0.0, 1.0])],
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        // First (most frequent) entry keeps its row.
        let v = store.lookup("chat").unwrap();
        assert!((v[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn frequency_order_preserved() {
        let store = VectorStore::from_entries(
            1,
            vec![
                entry("le", &[1.0]),
                entry("de", &[2.0]),
                entry("un", &[3.0]),
            ],
        )
        .unwrap();

        let tokens: Vec<&str> = store.tokens().iter().map(String::as_str).collect();
        assert_eq!(tokens, vec!["le", "de", "un"]);
        assert_eq!(store.token_at(0), "le");
    }

    #[test]
    fn dimension_mismatch_rejected() {
        let result = VectorStore::from_entries(3, vec![entry("chat", &[1.0, 0.0])]);
        assert!(matches!(
            result,
            Err(ModelError::DimensionMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn zero_vector_rejected() {
        let result = VectorStore::from_entries(2, vec![entry("chat", &[0.0, 0.0])]);
        assert!(matches!(result, Err(ModelError::ZeroVector(t)) if t == "chat"));
    }

    #[test]
    fn empty_vocabulary_rejected() {
        let result = VectorStore::from_entries(2, Vec::new());
        assert!(matches!(result, Err(ModelError::EmptyVocabulary)));
    }
}
