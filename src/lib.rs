//! # Ergonomic Console
//!
//! Typed wrappers around the Windows console API for Rust.
//!
//! Each operation forwards to one kernel32 console function, or a short fixed
//! sequence of them, and turns a failed status into an error value:
//!
//! - **Modes**: read, replace and enable console mode flags
//! - **Cursor**: position, relative movement, size and visibility
//! - **Screen buffers**: descriptors, fills, cell writes, scrolling, clearing
//! - **Input**: raw input records decoded into a typed event enum, key reads,
//!   pause-until-keypress
//! - **Code pages and title**
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn main() -> ergonomic_console::error::Result<()> {
//! use ergonomic_console::prelude::*;
//!
//! let console = Console::system();
//! let out = console.std_handle(StdStream::Output)?;
//! let input = console.std_handle(StdStream::Input)?;
//!
//! console.enable_mode(out, ConsoleMode::VIRTUAL_TERMINAL_PROCESSING)?;
//! console.set_output_code_page(CodePage::UTF8)?;
//! console.clear_screen_buffer(out)?;
//! console.write_str(out, "Hello", Coord::new(2, 1))?;
//! console.pause(input, "Press any key to continue")?;
//! # Ok(())
//! # }
//! # #[cfg(not(windows))]
//! # fn main() {}
//! ```
//!
//! ## Native ABI
//!
//! The structures passed to the OS ([`types::Coord`], [`types::SmallRect`],
//! [`types::ScreenBufferInfo`], [`types::CursorInfo`], [`types::CharInfo`],
//! [`input::RawInputRecord`]) are `#[repr(C)]` with their sizes checked at
//! compile time. Native calls go through the [`api::ConsoleApi`] trait, so
//! the facade can run against any backend.
//!
//! ```
//! use ergonomic_console::input::{InputRecord, KeyEventRecord, RawInputRecord};
//!
//! let raw = RawInputRecord::from(InputRecord::Key(KeyEventRecord::pressed(0x41)));
//! assert_eq!(raw.decode().key_down().map(|k| k.unicode_char), Some(0x41));
//! ```

#![warn(missing_docs)]

// Core modules
pub mod error;
pub mod handle;
pub mod string;

// Native data model
pub mod attr;
pub mod codepage;
pub mod input;
pub mod mode;
pub mod types;

// Calls
pub mod api;
pub mod console;
#[cfg(windows)]
pub mod kernel32;

#[cfg(test)]
pub(crate) mod testing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::api::ConsoleApi;
    pub use crate::attr::{CharAttributes, Color};
    pub use crate::codepage::CodePage;
    pub use crate::console::Console;
    pub use crate::error::{Error, Result};
    pub use crate::handle::{Handle, StdStream};
    pub use crate::input::{InputRecord, KeyEventRecord, RawInputRecord};
    pub use crate::mode::ConsoleMode;
    pub use crate::types::{CharInfo, Coord, CursorInfo, ScreenBufferInfo, SmallRect};

    #[cfg(windows)]
    pub use crate::kernel32::Kernel32;
}
