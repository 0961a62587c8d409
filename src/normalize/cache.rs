//! Last-result memoization for the normalization transform
//!
//! Hosts that recompute on every input change (e.g. on each keystroke) can
//! hold a `Normalizer` instead of calling [`normalize`] directly: the result
//! for the last-seen input is cached and returned without recomputation when
//! the input has not changed.

use super::rules::normalize;
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Normalizer
// ─────────────────────────────────────────────────────────────────────────────

/// Memoizing wrapper around [`normalize`].
///
/// Caching is keyed on the full last-seen input. This is purely a
/// performance optimization; the output is always identical to calling
/// [`normalize`] directly.
#[derive(Debug, Default)]
pub struct Normalizer {
    /// Input that produced the cached output, if any
    last_input: Option<String>,
    /// Cached output for `last_input`
    last_output: String,
}

impl Normalizer {
    /// Create a new `Normalizer` with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `text`, reusing the cached result when the input matches
    /// the previous call.
    pub fn normalize(&mut self, text: &str) -> &str {
        if self.last_input.as_deref() != Some(text) {
            debug!("input changed ({} bytes), recomputing", text.len());
            self.last_output = normalize(text);
            self.last_input = Some(text.to_string());
        }
        &self.last_output
    }

    /// Check whether the cache currently holds a result for `text`.
    pub fn is_cached(&self, text: &str) -> bool {
        self.last_input.as_deref() == Some(text)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
