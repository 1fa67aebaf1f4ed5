//! The native call seam.
//!
//! [`ConsoleApi`] has one method per kernel32 console function. Each method
//! marshals typed arguments into the native call and maps a failed status to
//! [`Error::OsCall`](crate::error::Error::OsCall). [`Console`](crate::console::Console)
//! composes these calls; it never talks to the OS directly.

use crate::attr::CharAttributes;
use crate::codepage::CodePage;
use crate::error::Result;
use crate::handle::{Handle, StdStream};
use crate::input::RawInputRecord;
use crate::mode::ConsoleMode;
use crate::types::{CharInfo, Coord, CursorInfo, ScreenBufferInfo, SmallRect};

/// Typed access to the native console functions.
///
/// Implementations perform exactly one native call per method.
pub trait ConsoleApi {
    /// `GetStdHandle`. Fails if the OS has no valid handle for `stream`.
    fn std_handle(&self, stream: StdStream) -> Result<Handle>;

    /// `GetConsoleMode`.
    fn mode(&self, handle: Handle) -> Result<ConsoleMode>;

    /// `SetConsoleMode`.
    fn set_mode(&self, handle: Handle, mode: ConsoleMode) -> Result<()>;

    /// `GetConsoleCursorInfo`.
    fn cursor_info(&self, handle: Handle) -> Result<CursorInfo>;

    /// `SetConsoleCursorInfo`.
    fn set_cursor_info(&self, handle: Handle, info: &CursorInfo) -> Result<()>;

    /// `GetConsoleScreenBufferInfo`.
    fn screen_buffer_info(&self, handle: Handle) -> Result<ScreenBufferInfo>;

    /// `SetConsoleCursorPosition`.
    fn set_cursor_position(&self, handle: Handle, position: Coord) -> Result<()>;

    /// `ReadConsoleInputW`. Blocks until at least one record is available and
    /// returns the number of records written to `buffer`.
    fn read_input(&self, handle: Handle, buffer: &mut [RawInputRecord]) -> Result<u32>;

    /// `GetConsoleCP`.
    fn input_code_page(&self) -> Result<CodePage>;

    /// `SetConsoleCP`.
    fn set_input_code_page(&self, code_page: CodePage) -> Result<()>;

    /// `GetConsoleOutputCP`.
    fn output_code_page(&self) -> Result<CodePage>;

    /// `SetConsoleOutputCP`.
    fn set_output_code_page(&self, code_page: CodePage) -> Result<()>;

    /// `SetConsoleTitleW`.
    fn set_title(&self, title: &str) -> Result<()>;

    /// `FillConsoleOutputCharacterW`. Returns the number of cells written.
    fn fill_character(&self, handle: Handle, ch: u16, length: u32, origin: Coord) -> Result<u32>;

    /// `FillConsoleOutputAttribute`. Returns the number of cells written.
    fn fill_attribute(
        &self,
        handle: Handle,
        attributes: CharAttributes,
        length: u32,
        origin: Coord,
    ) -> Result<u32>;

    /// `WriteConsoleOutputAttribute`. Returns the number of cells written.
    fn write_attributes(&self, handle: Handle, attributes: &[u16], origin: Coord) -> Result<u32>;

    /// `WriteConsoleOutputCharacterW`. Returns the number of cells written.
    fn write_characters(&self, handle: Handle, chars: &[u16], origin: Coord) -> Result<u32>;

    /// `ScrollConsoleScreenBufferW`.
    fn scroll_screen_buffer(
        &self,
        handle: Handle,
        scroll: &SmallRect,
        clip: Option<&SmallRect>,
        destination: Coord,
        fill: &CharInfo,
    ) -> Result<()>;
}

impl<A: ConsoleApi + ?Sized> ConsoleApi for &A {
    fn std_handle(&self, stream: StdStream) -> Result<Handle> {
        (**self).std_handle(stream)
    }

    fn mode(&self, handle: Handle) -> Result<ConsoleMode> {
        (**self).mode(handle)
    }

    fn set_mode(&self, handle: Handle, mode: ConsoleMode) -> Result<()> {
        (**self).set_mode(handle, mode)
    }

    fn cursor_info(&self, handle: Handle) -> Result<CursorInfo> {
        (**self).cursor_info(handle)
    }

    fn set_cursor_info(&self, handle: Handle, info: &CursorInfo) -> Result<()> {
        (**self).set_cursor_info(handle, info)
    }

    fn screen_buffer_info(&self, handle: Handle) -> Result<ScreenBufferInfo> {
        (**self).screen_buffer_info(handle)
    }

    fn set_cursor_position(&self, handle: Handle, position: Coord) -> Result<()> {
        (**self).set_cursor_position(handle, position)
    }

    fn read_input(&self, handle: Handle, buffer: &mut [RawInputRecord]) -> Result<u32> {
        (**self).read_input(handle, buffer)
    }

    fn input_code_page(&self) -> Result<CodePage> {
        (**self).input_code_page()
    }

    fn set_input_code_page(&self, code_page: CodePage) -> Result<()> {
        (**self).set_input_code_page(code_page)
    }

    fn output_code_page(&self) -> Result<CodePage> {
        (**self).output_code_page()
    }

    fn set_output_code_page(&self, code_page: CodePage) -> Result<()> {
        (**self).set_output_code_page(code_page)
    }

    fn set_title(&self, title: &str) -> Result<()> {
        (**self).set_title(title)
    }

    fn fill_character(&self, handle: Handle, ch: u16, length: u32, origin: Coord) -> Result<u32> {
        (**self).fill_character(handle, ch, length, origin)
    }

    fn fill_attribute(
        &self,
        handle: Handle,
        attributes: CharAttributes,
        length: u32,
        origin: Coord,
    ) -> Result<u32> {
        (**self).fill_attribute(handle, attributes, length, origin)
    }

    fn write_attributes(&self, handle: Handle, attributes: &[u16], origin: Coord) -> Result<u32> {
        (**self).write_attributes(handle, attributes, origin)
    }

    fn write_characters(&self, handle: Handle, chars: &[u16], origin: Coord) -> Result<u32> {
        (**self).write_characters(handle, chars, origin)
    }

    fn scroll_screen_buffer(
        &self,
        handle: Handle,
        scroll: &SmallRect,
        clip: Option<&SmallRect>,
        destination: Coord,
        fill: &CharInfo,
    ) -> Result<()> {
        (**self).scroll_screen_buffer(handle, scroll, clip, destination, fill)
    }
}
