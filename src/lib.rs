//! hanspace - spacing normalization for mixed CJK and Latin text
//!
//! Inserts a single space at every boundary between a Han ideograph and an
//! ASCII letter or digit, in either direction, collapses runs of spaces and
//! tabs, and preserves line breaks. Also provides a scroll mirror that keeps
//! a pair of panes (an input editor and its normalized output view) at the
//! same scroll position without feedback loops.
//!
//! # Example
//! ```
//! use hanspace::normalize;
//!
//! assert_eq!(normalize("使用Rust编写"), "使用 Rust 编写");
//! ```

pub mod error;
pub mod files;
pub mod mirror;
pub mod normalize;

pub use error::{Error, Result};
pub use mirror::{PanelSide, ScrollMirror, ScrollOffset, ScrollSurface};
pub use normalize::{is_alnum_latin, is_han, normalize, Normalizer};
