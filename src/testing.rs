//! An in-memory console for exercising the facade without a real console.
//!
//! `FakeConsole` keeps a cell grid, per-handle modes, a cursor descriptor,
//! an input queue, code pages and a title, and follows the native calls'
//! observable rules: fills are clamped at the end of the buffer, the cursor
//! cannot leave the buffer, unknown handles are rejected. Failures can be
//! injected per call name and every call is logged.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::api::ConsoleApi;
use crate::attr::CharAttributes;
use crate::codepage::CodePage;
use crate::error::{Error, Result, ERROR_INVALID_HANDLE, ERROR_INVALID_PARAMETER};
use crate::handle::{Handle, StdStream};
use crate::input::{InputRecord, RawInputRecord};
use crate::mode::ConsoleMode;
use crate::types::{Bool, CharInfo, Coord, CursorInfo, ScreenBufferInfo, SmallRect};

/// `ERROR_NO_DATA`, reported when the input queue is drained.
pub const ERROR_NO_DATA: u32 = 232;

pub const INPUT: Handle = Handle::from_raw(0x10);
pub const OUTPUT: Handle = Handle::from_raw(0x14);
pub const ERROR: Handle = Handle::from_raw(0x18);

struct State {
    modes: HashMap<Handle, ConsoleMode>,
    cursor: CursorInfo,
    size: Coord,
    cursor_position: Coord,
    attributes: u16,
    cells: Vec<CharInfo>,
    input: VecDeque<RawInputRecord>,
    input_cp: CodePage,
    output_cp: CodePage,
    title: String,
    calls: Vec<&'static str>,
    failures: HashMap<&'static str, u32>,
}

pub struct FakeConsole {
    state: RefCell<State>,
    on_read: RefCell<Option<Box<dyn Fn()>>>,
}

impl FakeConsole {
    pub fn new(width: i16, height: i16) -> Self {
        let cells = vec![CharInfo::new(u16::from(b'.'), CharAttributes::empty()); (width as usize) * (height as usize)];
        let modes = HashMap::from([
            (
                INPUT,
                ConsoleMode::PROCESSED_INPUT | ConsoleMode::LINE_INPUT | ConsoleMode::ECHO_INPUT,
            ),
            (OUTPUT, ConsoleMode::PROCESSED_OUTPUT | ConsoleMode::WRAP_AT_EOL_OUTPUT),
            (ERROR, ConsoleMode::PROCESSED_OUTPUT | ConsoleMode::WRAP_AT_EOL_OUTPUT),
        ]);
        Self {
            state: RefCell::new(State {
                modes,
                cursor: CursorInfo {
                    size: 25,
                    visible: Bool::TRUE,
                },
                size: Coord::new(width, height),
                cursor_position: Coord::ORIGIN,
                attributes: 0x1F,
                cells,
                input: VecDeque::new(),
                input_cp: CodePage(437),
                output_cp: CodePage(437),
                title: String::new(),
                calls: Vec::new(),
                failures: HashMap::new(),
            }),
            on_read: RefCell::new(None),
        }
    }

    pub fn push_input(&self, record: InputRecord) {
        self.state.borrow_mut().input.push_back(record.into());
    }

    /// Runs `hook` at the start of every `ReadConsoleInputW`, where a real
    /// console would block.
    pub fn on_read(&self, hook: impl Fn() + 'static) {
        *self.on_read.borrow_mut() = Some(Box::new(hook));
    }

    pub fn pending_input(&self) -> usize {
        self.state.borrow().input.len()
    }

    /// Makes every later call to `call` fail with `code`.
    pub fn fail(&self, call: &'static str, code: u32) {
        self.state.borrow_mut().failures.insert(call, code);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub fn count_calls(&self, call: &str) -> usize {
        self.state.borrow().calls.iter().filter(|c| **c == call).count()
    }

    pub fn set_raw_mode(&self, handle: Handle, mode: ConsoleMode) {
        self.state.borrow_mut().modes.insert(handle, mode);
    }

    pub fn place_cursor(&self, position: Coord) {
        self.state.borrow_mut().cursor_position = position;
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn cell(&self, x: i16, y: i16) -> CharInfo {
        let state = self.state.borrow();
        state.cells[(y as usize) * (state.size.x as usize) + (x as usize)]
    }

    pub fn row_text(&self, y: i16) -> String {
        let state = self.state.borrow();
        let width = state.size.x as usize;
        let row = &state.cells[(y as usize) * width..(y as usize + 1) * width];
        String::from_utf16_lossy(&row.iter().map(|c| c.unicode_char).collect::<Vec<_>>())
    }

    pub fn cells_matching(&self, cell: CharInfo) -> usize {
        self.state.borrow().cells.iter().filter(|c| **c == cell).count()
    }

    fn enter(&self, call: &'static str) -> Result<std::cell::RefMut<'_, State>> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if let Some(&code) = state.failures.get(call) {
            return Err(Error::os_call(call, code));
        }
        Ok(state)
    }

    fn enter_with(&self, call: &'static str, handle: Handle) -> Result<std::cell::RefMut<'_, State>> {
        let state = self.enter(call)?;
        if state.modes.contains_key(&handle) {
            Ok(state)
        } else {
            Err(Error::os_call(call, ERROR_INVALID_HANDLE))
        }
    }
}

impl State {
    fn index(&self, at: Coord) -> Option<usize> {
        (at.x >= 0 && at.y >= 0 && at.x < self.size.x && at.y < self.size.y)
            .then(|| (at.y as usize) * (self.size.x as usize) + (at.x as usize))
    }

    /// Cells from `origin` to the end of the buffer, clamped to `length`.
    fn run(&self, call: &'static str, origin: Coord, length: usize) -> Result<std::ops::Range<usize>> {
        let start = self
            .index(origin)
            .ok_or_else(|| Error::os_call(call, ERROR_INVALID_PARAMETER))?;
        Ok(start..self.cells.len().min(start + length))
    }
}

impl ConsoleApi for FakeConsole {
    fn std_handle(&self, stream: StdStream) -> Result<Handle> {
        self.enter("GetStdHandle")?;
        Ok(match stream {
            StdStream::Input => INPUT,
            StdStream::Output => OUTPUT,
            StdStream::Error => ERROR,
        })
    }

    fn mode(&self, handle: Handle) -> Result<ConsoleMode> {
        let state = self.enter_with("GetConsoleMode", handle)?;
        Ok(state.modes[&handle])
    }

    fn set_mode(&self, handle: Handle, mode: ConsoleMode) -> Result<()> {
        let mut state = self.enter_with("SetConsoleMode", handle)?;
        state.modes.insert(handle, mode);
        Ok(())
    }

    fn cursor_info(&self, handle: Handle) -> Result<CursorInfo> {
        let state = self.enter_with("GetConsoleCursorInfo", handle)?;
        Ok(state.cursor)
    }

    fn set_cursor_info(&self, handle: Handle, info: &CursorInfo) -> Result<()> {
        let mut state = self.enter_with("SetConsoleCursorInfo", handle)?;
        if !(1..=100).contains(&info.size) {
            return Err(Error::os_call("SetConsoleCursorInfo", ERROR_INVALID_PARAMETER));
        }
        state.cursor = *info;
        Ok(())
    }

    fn screen_buffer_info(&self, handle: Handle) -> Result<ScreenBufferInfo> {
        let state = self.enter_with("GetConsoleScreenBufferInfo", handle)?;
        Ok(ScreenBufferInfo {
            size: state.size,
            cursor_position: state.cursor_position,
            attributes: state.attributes,
            window: SmallRect::new(0, 0, state.size.x - 1, state.size.y - 1),
            maximum_window_size: state.size,
        })
    }

    fn set_cursor_position(&self, handle: Handle, position: Coord) -> Result<()> {
        let mut state = self.enter_with("SetConsoleCursorPosition", handle)?;
        if state.index(position).is_none() {
            return Err(Error::os_call("SetConsoleCursorPosition", ERROR_INVALID_PARAMETER));
        }
        state.cursor_position = position;
        Ok(())
    }

    fn read_input(&self, handle: Handle, buffer: &mut [RawInputRecord]) -> Result<u32> {
        if let Some(hook) = self.on_read.borrow().as_ref() {
            hook();
        }
        let mut state = self.enter_with("ReadConsoleInputW", handle)?;
        if state.input.is_empty() {
            // A real console would block here forever.
            return Err(Error::os_call("ReadConsoleInputW", ERROR_NO_DATA));
        }
        let mut read = 0;
        for slot in buffer.iter_mut() {
            match state.input.pop_front() {
                Some(record) => {
                    *slot = record;
                    read += 1;
                }
                None => break,
            }
        }
        Ok(read)
    }

    fn input_code_page(&self) -> Result<CodePage> {
        Ok(self.enter("GetConsoleCP")?.input_cp)
    }

    fn set_input_code_page(&self, code_page: CodePage) -> Result<()> {
        let mut state = self.enter("SetConsoleCP")?;
        if code_page.0 == 0 {
            return Err(Error::os_call("SetConsoleCP", ERROR_INVALID_PARAMETER));
        }
        state.input_cp = code_page;
        Ok(())
    }

    fn output_code_page(&self) -> Result<CodePage> {
        Ok(self.enter("GetConsoleOutputCP")?.output_cp)
    }

    fn set_output_code_page(&self, code_page: CodePage) -> Result<()> {
        let mut state = self.enter("SetConsoleOutputCP")?;
        if code_page.0 == 0 {
            return Err(Error::os_call("SetConsoleOutputCP", ERROR_INVALID_PARAMETER));
        }
        state.output_cp = code_page;
        Ok(())
    }

    fn set_title(&self, title: &str) -> Result<()> {
        let mut state = self.enter("SetConsoleTitleW")?;
        state.title = title.to_owned();
        Ok(())
    }

    fn fill_character(&self, handle: Handle, ch: u16, length: u32, origin: Coord) -> Result<u32> {
        let mut state = self.enter_with("FillConsoleOutputCharacterW", handle)?;
        let run = state.run("FillConsoleOutputCharacterW", origin, length as usize)?;
        let written = run.len() as u32;
        for cell in &mut state.cells[run] {
            cell.unicode_char = ch;
        }
        Ok(written)
    }

    fn fill_attribute(
        &self,
        handle: Handle,
        attributes: CharAttributes,
        length: u32,
        origin: Coord,
    ) -> Result<u32> {
        let mut state = self.enter_with("FillConsoleOutputAttribute", handle)?;
        let run = state.run("FillConsoleOutputAttribute", origin, length as usize)?;
        let written = run.len() as u32;
        for cell in &mut state.cells[run] {
            cell.attributes = attributes.bits();
        }
        Ok(written)
    }

    fn write_attributes(&self, handle: Handle, attributes: &[u16], origin: Coord) -> Result<u32> {
        let mut state = self.enter_with("WriteConsoleOutputAttribute", handle)?;
        let run = state.run("WriteConsoleOutputAttribute", origin, attributes.len())?;
        let written = run.len() as u32;
        for (cell, attr) in state.cells[run].iter_mut().zip(attributes) {
            cell.attributes = *attr;
        }
        Ok(written)
    }

    fn write_characters(&self, handle: Handle, chars: &[u16], origin: Coord) -> Result<u32> {
        let mut state = self.enter_with("WriteConsoleOutputCharacterW", handle)?;
        let run = state.run("WriteConsoleOutputCharacterW", origin, chars.len())?;
        let written = run.len() as u32;
        for (cell, ch) in state.cells[run].iter_mut().zip(chars) {
            cell.unicode_char = *ch;
        }
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
        let mut state = self.enter_with("ScrollConsoleScreenBufferW", handle)?;
        let bounds = SmallRect::new(0, 0, state.size.x - 1, state.size.y - 1);
        let clip = clip.copied().unwrap_or(bounds);
        let inside = |at: Coord, r: &SmallRect| {
            at.x >= r.left && at.x <= r.right && at.y >= r.top && at.y <= r.bottom
        };

        let mut moved = Vec::new();
        for y in scroll.top..=scroll.bottom {
            for x in scroll.left..=scroll.right {
                let from = Coord::new(x, y);
                if let Some(i) = state.index(from) {
                    moved.push((from, state.cells[i]));
                }
            }
        }
        for (from, _) in &moved {
            if inside(*from, &clip) {
                if let Some(i) = state.index(*from) {
                    state.cells[i] = *fill;
                }
            }
        }
        for (from, cell) in moved {
            let to = Coord::new(
                destination.x + (from.x - scroll.left),
                destination.y + (from.y - scroll.top),
            );
            if inside(to, &clip) {
                if let Some(i) = state.index(to) {
                    state.cells[i] = cell;
                }
            }
        }
        Ok(())
    }
}
