//! The kernel32 backend.
//!
//! [`Kernel32`] implements [`ConsoleApi`] over the `windows` crate. kernel32
//! is bound through its import library when the process loads and stays
//! mapped for the lifetime of the process, so there is nothing to initialize
//! or tear down here.

use std::mem::{align_of, size_of};

use tracing::trace;
use windows::Win32::Foundation::HANDLE;
use windows::Win32::System::Console::{
    FillConsoleOutputAttribute, FillConsoleOutputCharacterW, GetConsoleCP,
    GetConsoleCursorInfo, GetConsoleMode, GetConsoleOutputCP, GetConsoleScreenBufferInfo,
    GetStdHandle, ReadConsoleInputW, ScrollConsoleScreenBufferW, SetConsoleCP,
    SetConsoleCursorInfo, SetConsoleCursorPosition, SetConsoleMode, SetConsoleOutputCP,
    SetConsoleTitleW, WriteConsoleOutputAttribute, WriteConsoleOutputCharacterW, CHAR_INFO,
    CHAR_INFO_0, CONSOLE_CURSOR_INFO, CONSOLE_MODE, CONSOLE_SCREEN_BUFFER_INFO, COORD,
    INPUT_RECORD, SMALL_RECT, STD_HANDLE,
};

use crate::api::ConsoleApi;
use crate::attr::CharAttributes;
use crate::codepage::CodePage;
use crate::error::{last_error, Error, OsCallExt, Result, ERROR_INVALID_HANDLE};
use crate::handle::{Handle, StdStream};
use crate::input::RawInputRecord;
use crate::mode::ConsoleMode;
use crate::string::WideString;
use crate::types::{Bool, CharInfo, Coord, CursorInfo, ScreenBufferInfo, SmallRect};

// The crate's ABI types must be interchangeable with the native definitions.
const _: () = {
    assert!(size_of::<Coord>() == size_of::<COORD>());
    assert!(size_of::<SmallRect>() == size_of::<SMALL_RECT>());
    assert!(size_of::<ScreenBufferInfo>() == size_of::<CONSOLE_SCREEN_BUFFER_INFO>());
    assert!(size_of::<CursorInfo>() == size_of::<CONSOLE_CURSOR_INFO>());
    assert!(size_of::<CharInfo>() == size_of::<CHAR_INFO>());
    assert!(size_of::<RawInputRecord>() == size_of::<INPUT_RECORD>());
    assert!(align_of::<RawInputRecord>() == align_of::<INPUT_RECORD>());
};

/// The operating system's console functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kernel32;

fn coord(c: Coord) -> COORD {
    COORD { X: c.x, Y: c.y }
}

fn from_coord(c: COORD) -> Coord {
    Coord::new(c.X, c.Y)
}

fn small_rect(r: &SmallRect) -> SMALL_RECT {
    SMALL_RECT {
        Left: r.left,
        Top: r.top,
        Right: r.right,
        Bottom: r.bottom,
    }
}

fn out_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl ConsoleApi for Kernel32 {
    fn std_handle(&self, stream: StdStream) -> Result<Handle> {
        trace!(?stream, "GetStdHandle");
        // SAFETY: GetStdHandle has no preconditions.
        let raw = unsafe { GetStdHandle(STD_HANDLE(stream.to_id())) }.os_call("GetStdHandle")?;
        let handle = Handle::from(raw);
        if !handle.is_valid() {
            // The process has no console stream of this kind.
            return Err(Error::os_call("GetStdHandle", ERROR_INVALID_HANDLE));
        }
        Ok(handle)
    }

    fn mode(&self, handle: Handle) -> Result<ConsoleMode> {
        let mut mode = CONSOLE_MODE(0);
        // SAFETY: `mode` is a valid output location for the call's duration.
        unsafe { GetConsoleMode(HANDLE::from(handle), &mut mode) }.os_call("GetConsoleMode")?;
        trace!(?handle, mode = mode.0, "GetConsoleMode");
        Ok(ConsoleMode::from_bits_retain(mode.0))
    }

    fn set_mode(&self, handle: Handle, mode: ConsoleMode) -> Result<()> {
        trace!(?handle, mode = mode.bits(), "SetConsoleMode");
        // SAFETY: SetConsoleMode takes its arguments by value.
        unsafe { SetConsoleMode(HANDLE::from(handle), CONSOLE_MODE(mode.bits())) }
            .os_call("SetConsoleMode")
    }

    fn cursor_info(&self, handle: Handle) -> Result<CursorInfo> {
        let mut info = CONSOLE_CURSOR_INFO::default();
        // SAFETY: `info` is a valid output location for the call's duration.
        unsafe { GetConsoleCursorInfo(HANDLE::from(handle), &mut info) }
            .os_call("GetConsoleCursorInfo")?;
        Ok(CursorInfo {
            size: info.dwSize,
            visible: Bool(info.bVisible.0),
        })
    }

    fn set_cursor_info(&self, handle: Handle, info: &CursorInfo) -> Result<()> {
        trace!(?handle, ?info, "SetConsoleCursorInfo");
        let native = CONSOLE_CURSOR_INFO {
            dwSize: info.size,
            bVisible: windows::Win32::Foundation::BOOL(info.visible.0),
        };
        // SAFETY: `native` outlives the call.
        unsafe { SetConsoleCursorInfo(HANDLE::from(handle), &native) }
            .os_call("SetConsoleCursorInfo")
    }

    fn screen_buffer_info(&self, handle: Handle) -> Result<ScreenBufferInfo> {
        let mut info = CONSOLE_SCREEN_BUFFER_INFO::default();
        // SAFETY: `info` is a valid output location for the call's duration.
        unsafe { GetConsoleScreenBufferInfo(HANDLE::from(handle), &mut info) }
            .os_call("GetConsoleScreenBufferInfo")?;
        Ok(ScreenBufferInfo {
            size: from_coord(info.dwSize),
            cursor_position: from_coord(info.dwCursorPosition),
            attributes: info.wAttributes.0,
            window: SmallRect::new(
                info.srWindow.Left,
                info.srWindow.Top,
                info.srWindow.Right,
                info.srWindow.Bottom,
            ),
            maximum_window_size: from_coord(info.dwMaximumWindowSize),
        })
    }

    fn set_cursor_position(&self, handle: Handle, position: Coord) -> Result<()> {
        trace!(?handle, ?position, "SetConsoleCursorPosition");
        // SAFETY: COORD is passed by value.
        unsafe { SetConsoleCursorPosition(HANDLE::from(handle), coord(position)) }
            .os_call("SetConsoleCursorPosition")
    }

    fn read_input(&self, handle: Handle, buffer: &mut [RawInputRecord]) -> Result<u32> {
        let mut read = 0u32;
        // SAFETY: RawInputRecord has the size and alignment of INPUT_RECORD
        // (checked above) and every bit pattern is valid for both, so the
        // buffer can be viewed as native records for the call's duration.
        let native = unsafe {
            std::slice::from_raw_parts_mut(buffer.as_mut_ptr().cast::<INPUT_RECORD>(), buffer.len())
        };
        // SAFETY: `native` and `read` are valid for writes during the call.
        unsafe { ReadConsoleInputW(HANDLE::from(handle), native, &mut read) }
            .os_call("ReadConsoleInputW")?;
        trace!(?handle, read, "ReadConsoleInputW");
        Ok(read)
    }

    fn input_code_page(&self) -> Result<CodePage> {
        // SAFETY: GetConsoleCP has no preconditions.
        match unsafe { GetConsoleCP() } {
            0 => Err(last_error("GetConsoleCP")),
            cp => Ok(CodePage(cp)),
        }
    }

    fn set_input_code_page(&self, code_page: CodePage) -> Result<()> {
        trace!(%code_page, "SetConsoleCP");
        // SAFETY: SetConsoleCP takes its argument by value.
        unsafe { SetConsoleCP(code_page.0) }.os_call("SetConsoleCP")
    }

    fn output_code_page(&self) -> Result<CodePage> {
        // SAFETY: GetConsoleOutputCP has no preconditions.
        match unsafe { GetConsoleOutputCP() } {
            0 => Err(last_error("GetConsoleOutputCP")),
            cp => Ok(CodePage(cp)),
        }
    }

    fn set_output_code_page(&self, code_page: CodePage) -> Result<()> {
        trace!(%code_page, "SetConsoleOutputCP");
        // SAFETY: SetConsoleOutputCP takes its argument by value.
        unsafe { SetConsoleOutputCP(code_page.0) }.os_call("SetConsoleOutputCP")
    }

    fn set_title(&self, title: &str) -> Result<()> {
        trace!(title, "SetConsoleTitleW");
        let wide = WideString::new(title);
        // SAFETY: `wide` is NUL-terminated and outlives the call.
        unsafe { SetConsoleTitleW(wide.as_pcwstr()) }.os_call("SetConsoleTitleW")
    }

    fn fill_character(&self, handle: Handle, ch: u16, length: u32, origin: Coord) -> Result<u32> {
        let mut written = 0u32;
        // SAFETY: `written` is a valid output location for the call's duration.
        unsafe {
            FillConsoleOutputCharacterW(HANDLE::from(handle), ch, length, coord(origin), &mut written)
        }
        .os_call("FillConsoleOutputCharacterW")?;
        trace!(?handle, ch, length, written, "FillConsoleOutputCharacterW");
        Ok(written)
    }

    fn fill_attribute(
        &self,
        handle: Handle,
        attributes: CharAttributes,
        length: u32,
        origin: Coord,
    ) -> Result<u32> {
        let mut written = 0u32;
        // SAFETY: `written` is a valid output location for the call's duration.
        unsafe {
            FillConsoleOutputAttribute(
                HANDLE::from(handle),
                attributes.bits(),
                length,
                coord(origin),
                &mut written,
            )
        }
        .os_call("FillConsoleOutputAttribute")?;
        trace!(?handle, attributes = attributes.bits(), length, written, "FillConsoleOutputAttribute");
        Ok(written)
    }

    fn write_attributes(&self, handle: Handle, attributes: &[u16], origin: Coord) -> Result<u32> {
        let mut written = 0u32;
        // SAFETY: the slice carries its own length; `written` is valid for writes.
        unsafe {
            WriteConsoleOutputAttribute(HANDLE::from(handle), attributes, coord(origin), &mut written)
        }
        .os_call("WriteConsoleOutputAttribute")?;
        trace!(?handle, requested = out_len(attributes.len()), written, "WriteConsoleOutputAttribute");
        Ok(written)
    }

    fn write_characters(&self, handle: Handle, chars: &[u16], origin: Coord) -> Result<u32> {
        let mut written = 0u32;
        // SAFETY: the slice carries its own length; `written` is valid for writes.
        unsafe {
            WriteConsoleOutputCharacterW(HANDLE::from(handle), chars, coord(origin), &mut written)
        }
        .os_call("WriteConsoleOutputCharacterW")?;
        trace!(?handle, requested = out_len(chars.len()), written, "WriteConsoleOutputCharacterW");
        Ok(written)
    }

    fn scroll_screen_buffer(
        &self,
        handle: Handle,
        scroll: &SmallRect,
        clip: Option<&SmallRect>,
        destination: Coord,
        fill: &CharInfo,
    ) -> Result<()> {
        trace!(?handle, ?scroll, ?clip, ?destination, "ScrollConsoleScreenBufferW");
        let scroll = small_rect(scroll);
        let clip = clip.map(small_rect);
        let fill = CHAR_INFO {
            Char: CHAR_INFO_0 {
                UnicodeChar: fill.unicode_char,
            },
            Attributes: fill.attributes,
        };
        // SAFETY: every pointer refers to a local that outlives the call.
        unsafe {
            ScrollConsoleScreenBufferW(
                HANDLE::from(handle),
                &scroll,
                clip.as_ref().map(|c| c as *const SMALL_RECT),
                coord(destination),
                &fill,
            )
        }
        .os_call("ScrollConsoleScreenBufferW")
    }
}
