//! Game rules: daily target, variant resolution, guess scoring

mod daily;
mod service;
mod variants;

pub use daily::{DEFAULT_TOP_N, DailyWordSelector, deterministic_index};
pub use service::{
    DailyWordResponse, ErrorResponse, GameError, GameService, GuessResponse, GuessResult,
};
pub use variants::VariantResolver;
