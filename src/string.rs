//! UTF-16 helpers for console text.
//!
//! The console API is wide-character throughout: titles are NUL-terminated
//! UTF-16 strings, and cell writes take runs of UTF-16 code units with an
//! explicit length.

use crate::error::{Error, Result};

/// Converts a Rust string to a NUL-terminated UTF-16 vector.
///
/// # Example
///
/// ```
/// use ergonomic_console::string::to_wide;
///
/// let wide = to_wide("Hi");
/// assert_eq!(wide, vec![72, 105, 0]);
/// ```
#[inline]
pub fn to_wide(s: &str) -> Vec<u16> {
    // UTF-16 never needs more code units than UTF-8 needs bytes. +1 for NUL.
    let mut result = Vec::with_capacity(s.len() + 1);
    result.extend(s.encode_utf16());
    result.push(0);
    result
}

/// Converts a Rust string to UTF-16 code units for a cell write.
///
/// No terminator is appended; a run of cells has an explicit length.
#[inline]
pub fn to_cells(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Converts a UTF-16 slice to a Rust `String`, stopping at the first NUL.
///
/// # Example
///
/// ```
/// use ergonomic_console::string::{to_wide, from_wide};
///
/// let s = from_wide(&to_wide("Title")).unwrap();
/// assert_eq!(s, "Title");
/// ```
#[inline]
pub fn from_wide(wide: &[u16]) -> Result<String> {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16(&wide[..len])
        .map_err(|_| Error::string_conversion("Invalid UTF-16 sequence"))
}

/// An owned NUL-terminated wide string for passing to `PCWSTR` parameters.
#[derive(Clone)]
pub struct WideString {
    buffer: Vec<u16>,
}

impl WideString {
    /// Creates a new `WideString` from a Rust string.
    #[inline]
    pub fn new(s: &str) -> Self {
        Self { buffer: to_wide(s) }
    }

    /// Returns the string as a PCWSTR for use with Windows APIs.
    #[cfg(windows)]
    #[inline]
    pub fn as_pcwstr(&self) -> windows::core::PCWSTR {
        windows::core::PCWSTR::from_raw(self.buffer.as_ptr())
    }

    /// Returns the length in UTF-16 code units, not including the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len().saturating_sub(1)
    }

    /// Returns true if the string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts back to a Rust String, truncating at the first NUL.
    #[inline]
    pub fn to_string_lossy(&self) -> String {
        from_wide(&self.buffer).unwrap_or_else(|_| String::from("\u{FFFD}"))
    }
}
