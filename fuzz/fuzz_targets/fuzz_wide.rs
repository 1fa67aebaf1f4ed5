//! Fuzz target for console text conversion.
//!
//! Titles are NUL-terminated and truncate at an embedded NUL; cell runs keep
//! every code unit.

#![no_main]

use ergonomic_console::string::{from_wide, to_cells, to_wide, WideString};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let wide = to_wide(data);
    assert_eq!(wide.last(), Some(&0));

    let cells = to_cells(data);
    assert_eq!(cells.len() + 1, wide.len());

    let expected = data.split('\0').next().unwrap_or("");
    assert_eq!(from_wide(&wide).ok().as_deref(), Some(expected));

    let title = WideString::new(data);
    assert_eq!(title.len(), cells.len());
    assert_eq!(title.to_string_lossy(), expected);
});
