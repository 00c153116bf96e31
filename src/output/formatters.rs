//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a guess's warmth as a bar: full means no word is closer
#[must_use]
pub fn closeness_bar(percentile_closer: f64, width: usize) -> String {
    let warmth = (100.0 - percentile_closer).max(0.0);
    create_progress_bar(warmth, 100.0, width)
}
