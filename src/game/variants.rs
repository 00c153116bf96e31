//! Variant resolution
//!
//! The vocabulary stores tagged surface forms (`banque_noun`, `banque_verb`)
//! while players type bare words. A bare word canonicalizes to its most
//! frequent tagged variant; the vocabulary is frequency-descending, so the
//! first variant encountered in order is the winner. Words without variants
//! pass through unchanged.

use crate::core::normalize;
use crate::model::VectorStore;
use rustc_hash::FxHashMap;

/// Maps bare words to their most frequent tagged vocabulary variant
///
/// The base→variant table is precomputed once from vocabulary order, turning
/// the per-guess resolution into a single hash lookup.
#[derive(Debug)]
pub struct VariantResolver {
    variants: FxHashMap<String, String>,
}

impl VariantResolver {
    /// Build the resolver from a loaded store.
    ///
    /// One pass over the vocabulary in frequency-descending order; the first
    /// tagged variant seen for each base word wins.
    #[must_use]
    pub fn new(store: &VectorStore) -> Self {
        let mut variants: FxHashMap<String, String> = FxHashMap::default();

        for token in store.tokens() {
            if let Some((base, _tag)) = token.split_once('_')
                && !base.is_empty()
            {
                variants
                    .entry(base.to_string())
                    .or_insert_with(|| token.clone());
            }
        }

        Self { variants }
    }

    /// Canonicalize a word to the vocabulary's preferred surface form.
    ///
    /// Input is normalized first; the same rule applies to guesses and to
    /// the daily target. Idempotent: a token that is already a tagged
    /// variant has no variants of its own and passes through.
    ///
    /// # Examples
    /// ```
    /// use semantix::game::VariantResolver;
    /// use semantix::model::VectorStore;
    ///
    /// let store = VectorStore::from_entries(
    ///     1,
    ///     vec![
    ///         ("banque_noun".to_string(), vec![1.0]),
    ///         ("banque_verb".to_string(), vec![2.0]),
    ///         ("chat".to_string(), vec![3.0]),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// let resolver = VariantResolver::new(&store);
    /// assert_eq!(resolver.canonicalize("Banque "), "banque_noun");
    /// assert_eq!(resolver.canonicalize("chat"), "chat");
    /// ```
    #[must_use]
    pub fn canonicalize(&self, word: &str) -> String {
        let word = normalize(word);
        match self.variants.get(&word) {
            Some(variant) => variant.clone(),
            None => word,
        }
    }
}
