//! File operations for the command-line host
//!
//! This module reads the complete text snapshot the normalizer operates on
//! and writes the result back out. Both directions fall back to the
//! standard streams when no path is given, so the binary works as a plain
//! pipe filter.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

/// Read the whole input text from `path`, or from stdin when `path` is
/// `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("reading input from {}", path.display());
            fs::read_to_string(path).map_err(|source| Error::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            debug!("reading input from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

/// Write `text` followed by a single trailing newline to `path`, or to
/// stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!("writing output to {}", path.display());
            let mut contents = String::with_capacity(text.len() + 1);
            contents.push_str(text);
            contents.push('\n');
            fs::write(path, contents).map_err(|source| Error::FileWrite {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.write_all(b"\n")?;
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
