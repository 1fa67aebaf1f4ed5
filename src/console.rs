//! The console facade.
//!
//! [`Console`] turns typed requests into native console calls. Every method
//! is a synchronous call-through, or a short fixed sequence of them; no state
//! is kept between calls. Methods that read, modify and write back a value
//! (`enable_mode`, `set_cursor_visible`, `move_cursor`, ...) are not atomic
//! with respect to other threads or processes using the same console.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::api::ConsoleApi;
use crate::attr::CharAttributes;
use crate::codepage::CodePage;
use crate::error::Result;
use crate::handle::{Handle, StdStream};
use crate::input::{InputRecord, RawInputRecord};
use crate::mode::ConsoleMode;
use crate::types::{CharInfo, Coord, CursorInfo, ScreenBufferInfo, SmallRect};

/// Typed operations over console stream handles.
///
/// # Example
///
/// ```no_run
/// # #[cfg(windows)]
/// # fn main() -> ergonomic_console::error::Result<()> {
/// use ergonomic_console::prelude::*;
///
/// let console = Console::system();
/// let out = console.std_handle(StdStream::Output)?;
/// console.enable_mode(out, ConsoleMode::VIRTUAL_TERMINAL_PROCESSING)?;
/// console.set_cursor_visible(out, false)?;
/// console.clear_screen_buffer(out)?;
/// # Ok(())
/// # }
/// # #[cfg(not(windows))]
/// # fn main() {}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Console<A> {
    api: A,
}

#[cfg(windows)]
impl Console<crate::kernel32::Kernel32> {
    /// The console of the current process, through kernel32.
    pub fn system() -> Self {
        Self::with_api(crate::kernel32::Kernel32)
    }
}

impl<A: ConsoleApi> Console<A> {
    /// Wraps a native call backend.
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Returns the backend.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Gets the handle of a standard stream.
    ///
    /// The handle belongs to the OS and is never closed by this crate.
    pub fn std_handle(&self, stream: StdStream) -> Result<Handle> {
        self.api.std_handle(stream)
    }

    /// Gets the mode of a console handle.
    pub fn mode(&self, handle: Handle) -> Result<ConsoleMode> {
        self.api.mode(handle)
    }

    /// Replaces the mode of a console handle.
    pub fn set_mode(&self, handle: Handle, mode: ConsoleMode) -> Result<()> {
        self.api.set_mode(handle, mode)
    }

    /// Returns true if every flag in `flags` is currently enabled.
    ///
    /// See [`ConsoleMode::is_enabled`] for the all-of semantics.
    pub fn is_mode_enabled(&self, handle: Handle, flags: ConsoleMode) -> Result<bool> {
        Ok(self.api.mode(handle)?.is_enabled(flags))
    }

    /// Turns on `flags`, leaving every other bit as it was.
    ///
    /// Reads the current mode, ORs in `flags` and writes the whole value
    /// back. If the read fails nothing is written. Enabling flags that are
    /// already on writes back an unchanged mode.
    pub fn enable_mode(&self, handle: Handle, flags: ConsoleMode) -> Result<()> {
        let mode = self.api.mode(handle)?;
        let updated = mode | flags;
        trace!(?handle, from = mode.bits(), to = updated.bits(), "enable_mode");
        self.api.set_mode(handle, updated)
    }

    /// Gets cursor size and visibility.
    pub fn cursor_info(&self, handle: Handle) -> Result<CursorInfo> {
        self.api.cursor_info(handle)
    }

    /// Sets cursor size and visibility.
    pub fn set_cursor_info(&self, handle: Handle, info: &CursorInfo) -> Result<()> {
        self.api.set_cursor_info(handle, info)
    }

    /// Shows or hides the cursor, keeping its size.
    pub fn set_cursor_visible(&self, handle: Handle, visible: bool) -> Result<()> {
        let mut info = self.api.cursor_info(handle)?;
        info.visible = visible.into();
        self.api.set_cursor_info(handle, &info)
    }

    /// Sets the cursor size (percentage of the cell), keeping its visibility.
    pub fn set_cursor_size(&self, handle: Handle, size: u32) -> Result<()> {
        let mut info = self.api.cursor_info(handle)?;
        info.size = size;
        self.api.set_cursor_info(handle, &info)
    }

    /// Reads a fresh screen buffer descriptor.
    pub fn screen_buffer_info(&self, handle: Handle) -> Result<ScreenBufferInfo> {
        self.api.screen_buffer_info(handle)
    }

    /// Gets the cursor position from the screen buffer descriptor.
    pub fn cursor_position(&self, handle: Handle) -> Result<Coord> {
        Ok(self.api.screen_buffer_info(handle)?.cursor_position)
    }

    /// Moves the cursor to an absolute position.
    pub fn set_cursor_position(&self, handle: Handle, position: Coord) -> Result<()> {
        self.api.set_cursor_position(handle, position)
    }

    /// Moves the cursor by `offset`.
    ///
    /// The new position is computed with wrapping 16-bit arithmetic and is
    /// not clamped; the OS rejects positions outside the buffer.
    pub fn move_cursor(&self, handle: Handle, offset: Coord) -> Result<()> {
        let position = self.cursor_position(handle)?;
        self.api.set_cursor_position(handle, position.offset(offset))
    }

    /// Moves the cursor up (negative) or down (positive).
    pub fn move_cursor_vertical(&self, handle: Handle, offset: i16) -> Result<()> {
        self.move_cursor(handle, Coord::new(0, offset))
    }

    /// Moves the cursor left (negative) or right (positive).
    pub fn move_cursor_horizontal(&self, handle: Handle, offset: i16) -> Result<()> {
        self.move_cursor(handle, Coord::new(offset, 0))
    }

    /// Reads raw input records into `buffer`, blocking until at least one is
    /// available. Returns how many were read.
    pub fn read_input(&self, handle: Handle, buffer: &mut [RawInputRecord]) -> Result<u32> {
        self.api.read_input(handle, buffer)
    }

    /// Reads exactly one input record, blocking until it arrives.
    pub fn read_input_record(&self, handle: Handle) -> Result<InputRecord> {
        let mut buffer = [RawInputRecord::ZEROED];
        self.api.read_input(handle, &mut buffer)?;
        Ok(buffer[0].decode())
    }

    /// Reads one input record and returns its character if it is a key press.
    ///
    /// Any other event, including a key release, yields `0`. Only one record
    /// is consumed.
    pub fn read_key_value(&self, handle: Handle) -> Result<u16> {
        let record = self.read_input_record(handle)?;
        Ok(record.key_down().map_or(0, |key| key.unicode_char))
    }

    /// Prints `message` (if non-empty) to standard output and blocks until a
    /// key is pressed. Every other input event is discarded.
    ///
    /// Standard output is locked only while the message is written, so other
    /// threads can print while this one waits for a key.
    pub fn pause(&self, handle: Handle, message: &str) -> Result<()> {
        self.pause_with(handle, message, &mut io::stdout())
    }

    /// Like [`pause`](Self::pause), writing the message to `out`.
    ///
    /// The message is written once, followed by a newline, and flushed before
    /// the first read.
    pub fn pause_with<W: Write>(&self, handle: Handle, message: &str, out: &mut W) -> Result<()> {
        if !message.is_empty() {
            writeln!(out, "{message}")?;
            out.flush()?;
        }

        loop {
            let record = self.read_input_record(handle)?;
            if record.key_down().is_some() {
                return Ok(());
            }
            trace!(event_type = record.event_type(), "pause: discarding event");
        }
    }

    /// Fills `length` cells from `origin` with `fill`'s character and
    /// attributes.
    ///
    /// Characters are written first. If that fails the attributes are not
    /// touched, and characters already written stay written.
    pub fn fill(&self, handle: Handle, fill: CharInfo, length: u32, origin: Coord) -> Result<()> {
        self.api.fill_character(handle, fill.unicode_char, length, origin)?;
        self.api.fill_attribute(
            handle,
            CharAttributes::from_bits_retain(fill.attributes),
            length,
            origin,
        )?;
        Ok(())
    }

    /// Writes `ch` to `length` cells from `origin`. Returns cells written.
    pub fn fill_character(&self, handle: Handle, ch: u16, length: u32, origin: Coord) -> Result<u32> {
        self.api.fill_character(handle, ch, length, origin)
    }

    /// Writes `attributes` to `length` cells from `origin`. Returns cells
    /// written.
    pub fn fill_attribute(
        &self,
        handle: Handle,
        attributes: CharAttributes,
        length: u32,
        origin: Coord,
    ) -> Result<u32> {
        self.api.fill_attribute(handle, attributes, length, origin)
    }

    /// Blanks the whole buffer with default colors and homes the cursor.
    pub fn clear_screen_buffer(&self, handle: Handle) -> Result<()> {
        let info = self.api.screen_buffer_info(handle)?;
        let cells = info.cell_count();
        debug!(?handle, width = info.size.x, height = info.size.y, cells, "clearing screen buffer");
        self.fill(handle, CharInfo::BLANK, cells, Coord::ORIGIN)?;
        self.api.set_cursor_position(handle, Coord::ORIGIN)
    }

    /// Writes a run of attribute words from `origin`, wrapping at line ends.
    /// Returns cells written.
    pub fn write_attributes(&self, handle: Handle, attributes: &[u16], origin: Coord) -> Result<u32> {
        self.api.write_attributes(handle, attributes, origin)
    }

    /// Writes a run of UTF-16 code units from `origin`, wrapping at line ends.
    /// Returns cells written.
    pub fn write_characters(&self, handle: Handle, chars: &[u16], origin: Coord) -> Result<u32> {
        self.api.write_characters(handle, chars, origin)
    }

    /// Writes `text` into cells from `origin` without moving the cursor.
    pub fn write_str(&self, handle: Handle, text: &str, origin: Coord) -> Result<u32> {
        self.api.write_characters(handle, &crate::string::to_cells(text), origin)
    }

    /// Moves the cells in `scroll` so its top-left lands on `destination`.
    ///
    /// Vacated cells inside `clip` (the whole buffer when `None`) are set to
    /// `fill`; cells outside `clip` are left alone.
    pub fn scroll_screen_buffer(
        &self,
        handle: Handle,
        scroll: &SmallRect,
        clip: Option<&SmallRect>,
        destination: Coord,
        fill: CharInfo,
    ) -> Result<()> {
        self.api.scroll_screen_buffer(handle, scroll, clip, destination, &fill)
    }

    /// Gets the input code page.
    pub fn input_code_page(&self) -> Result<CodePage> {
        self.api.input_code_page()
    }

    /// Sets the input code page.
    pub fn set_input_code_page(&self, code_page: CodePage) -> Result<()> {
        self.api.set_input_code_page(code_page)
    }

    /// Gets the output code page.
    pub fn output_code_page(&self) -> Result<CodePage> {
        self.api.output_code_page()
    }

    /// Sets the output code page.
    pub fn set_output_code_page(&self, code_page: CodePage) -> Result<()> {
        self.api.set_output_code_page(code_page)
    }

    /// Sets the console window title.
    pub fn set_title(&self, title: &str) -> Result<()> {
        self.api.set_title(title)
    }
}
