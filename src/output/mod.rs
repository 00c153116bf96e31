//! Terminal output formatting

mod display;
mod formatters;

pub use display::{print_daily_word, print_guess_result, print_model_info, print_neighbors};
pub use formatters::{closeness_bar, create_progress_bar};
