//! Semantix
//!
//! A Cemantix-style daily word game engine: a deterministic date-seeded
//! target word, cosine-distance scoring over a word2vec vocabulary, and a
//! full-vocabulary ranking for every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use semantix::game::GameService;
//! use semantix::model::VectorStore;
//!
//! // Normally loaded from a word2vec artifact via `model::load_model`.
//! let store = VectorStore::from_entries(
//!     2,
//!     vec![
//!         ("chat".to_string(), vec![1.0, 0.0]),
//!         ("chien".to_string(), vec![0.9, 0.1]),
//!         ("voiture".to_string(), vec![-1.0, 0.0]),
//!     ],
//! )
//! .unwrap();
//!
//! let service = GameService::new(store, 3000);
//! let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
//!
//! let result = service.submit_guess("chien", date).unwrap();
//! assert_eq!(result.total, 3);
//! ```

// Core domain rules (token normalization)
pub mod core;

// Embedding model: vector store and artifact loading
pub mod model;

// Distance computation and vocabulary ranking
pub mod engine;

// Game rules: daily target, variants, guess scoring
pub mod game;

// Terminal output formatting
pub mod output;
