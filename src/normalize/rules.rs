//! Boundary-spacing rules for mixed CJK and Latin text
//!
//! This module implements the core transform: insert a single space wherever
//! a Han ideograph directly touches an ASCII letter or digit, collapse runs
//! of horizontal whitespace, and trim the result. Line breaks are preserved
//! exactly, including consecutive blank lines.

use regex::Regex;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Character Classification
// ─────────────────────────────────────────────────────────────────────────────

/// Check if a character is a Han ideograph.
///
/// The classification covers U+4E00 through U+9FA5 inclusive. This is the
/// bounded legacy CJK Unified Ideographs range; later Unicode additions to
/// the block (U+9FA6 and up) are intentionally not included.
#[inline]
pub fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Check if a character is an ASCII letter or digit.
#[inline]
pub fn is_alnum_latin(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

// ─────────────────────────────────────────────────────────────────────────────
// Compiled Patterns
// ─────────────────────────────────────────────────────────────────────────────

/// Matches a Han ideograph immediately followed by an ASCII letter or digit.
fn han_then_alnum() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([\u{4e00}-\u{9fa5}])([A-Za-z0-9])").expect("hard-coded pattern compiles")
    })
}

/// Matches an ASCII letter or digit immediately followed by a Han ideograph.
fn alnum_then_han() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z0-9])([\u{4e00}-\u{9fa5}])").expect("hard-coded pattern compiles")
    })
}

/// Matches a maximal run of spaces and horizontal tabs. Newlines are not
/// part of the class, so runs on either side of a line break collapse
/// independently and the break itself survives.
fn horizontal_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").expect("hard-coded pattern compiles"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalization
// ─────────────────────────────────────────────────────────────────────────────

/// Normalize spacing between Han ideographs and ASCII letters/digits.
///
/// Four passes, each operating on the output of the previous:
///
/// 1. Insert one space between a Han character and a following ASCII
///    letter/digit.
/// 2. Insert one space between an ASCII letter/digit and a following Han
///    character.
/// 3. Collapse every run of spaces and tabs into a single space.
/// 4. Trim leading and trailing whitespace from the whole result.
///
/// The insertion passes must stay sequential: in a triplet like `你a你`,
/// pass 1 separates `你a` and pass 2 then sees `a你` and separates it too.
/// A combined alternation would miss one side of the shared letter.
///
/// The function is total: any input produces a result, and empty input
/// produces an empty string.
///
/// # Example
/// ```
/// use hanspace::normalize;
///
/// assert_eq!(normalize("你好world123你好"), "你好 world123 你好");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let spaced = han_then_alnum().replace_all(text, "$1 $2");
    let spaced = alnum_then_han().replace_all(&spaced, "$1 $2");
    let collapsed = horizontal_run().replace_all(&spaced, " ");
    collapsed.trim().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
