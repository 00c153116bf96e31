//! Core domain rules shared across the crate
//!
//! Token normalization and tag handling. Both the model loader and the
//! game layer go through these functions.

mod token;

pub use token::{is_tagged, normalize, strip_tag};
