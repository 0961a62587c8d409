//! Text normalization module for hanspace
//!
//! This module provides the boundary-spacing transform that inserts a space
//! between Han ideographs and adjacent ASCII letters or digits, plus a
//! memoizing wrapper for hosts that recompute on every input change.

mod cache;
mod rules;

pub use cache::Normalizer;
pub use rules::{is_alnum_latin, is_han, normalize};
