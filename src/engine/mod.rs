//! Semantic distance and full-vocabulary ranking

mod distance;

pub use distance::{DistanceEngine, EngineError, Ranking, cosine_distance};
