//! Console input records.
//!
//! `ReadConsoleInputW` fills an array of `INPUT_RECORD`s: a 16-bit event tag
//! followed by a union of five event payloads. [`RawInputRecord`] is that
//! exact layout; [`InputRecord`] is the decoded sum type callers match on.

use std::fmt;
use std::mem::{align_of, size_of};

use crate::types::{Bool, Coord};

/// Event-type tags of an input record.
pub mod event_type {
    /// `KEY_EVENT`.
    pub const KEY: u16 = 0x0001;
    /// `MOUSE_EVENT`.
    pub const MOUSE: u16 = 0x0002;
    /// `WINDOW_BUFFER_SIZE_EVENT`.
    pub const WINDOW_BUFFER_SIZE: u16 = 0x0004;
    /// `MENU_EVENT`.
    pub const MENU: u16 = 0x0008;
    /// `FOCUS_EVENT`.
    pub const FOCUS: u16 = 0x0010;
}

/// A keyboard event (`KEY_EVENT_RECORD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct KeyEventRecord {
    /// Non-zero when the key was pressed, zero when released.
    pub key_down: Bool,
    /// Number of times the keystroke is repeated.
    pub repeat_count: u16,
    /// Device-independent virtual-key code.
    pub virtual_key_code: u16,
    /// Device-dependent scan code.
    pub virtual_scan_code: u16,
    /// Translated UTF-16 code unit, or 0.
    pub unicode_char: u16,
    /// Shift/Ctrl/Alt and lock key state.
    pub control_key_state: u32,
}

impl KeyEventRecord {
    /// Creates a key-down record for a single code unit.
    pub fn pressed(unicode_char: u16) -> Self {
        Self {
            key_down: Bool::TRUE,
            repeat_count: 1,
            unicode_char,
            ..Default::default()
        }
    }

    /// Returns true for a key press.
    #[inline]
    pub fn is_key_down(&self) -> bool {
        self.key_down.as_bool()
    }
}

/// A mouse event (`MOUSE_EVENT_RECORD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct MouseEventRecord {
    /// Cursor position in buffer cells.
    pub mouse_position: Coord,
    /// Button state bits.
    pub button_state: u32,
    /// Shift/Ctrl/Alt and lock key state.
    pub control_key_state: u32,
    /// Kind of mouse event (move, double click, wheel).
    pub event_flags: u32,
}

/// A screen buffer resize (`WINDOW_BUFFER_SIZE_RECORD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct WindowBufferSizeRecord {
    /// New size in cells.
    pub size: Coord,
}

/// A menu event (`MENU_EVENT_RECORD`). Internal to the console host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct MenuEventRecord {
    /// Menu command identifier.
    pub command_id: u32,
}

/// A focus change (`FOCUS_EVENT_RECORD`). Internal to the console host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct FocusEventRecord {
    /// Whether focus was gained.
    pub set_focus: Bool,
}

/// The event payload union of an `INPUT_RECORD`.
#[derive(Clone, Copy)]
#[repr(C)]
pub union RawEvent {
    /// Valid when the tag is [`event_type::KEY`].
    pub key: KeyEventRecord,
    /// Valid when the tag is [`event_type::MOUSE`].
    pub mouse: MouseEventRecord,
    /// Valid when the tag is [`event_type::WINDOW_BUFFER_SIZE`].
    pub window_buffer_size: WindowBufferSizeRecord,
    /// Valid when the tag is [`event_type::MENU`].
    pub menu: MenuEventRecord,
    /// Valid when the tag is [`event_type::FOCUS`].
    pub focus: FocusEventRecord,
    bytes: [u32; 4],
}

/// An `INPUT_RECORD` exactly as the OS writes it.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct RawInputRecord {
    /// Event tag, one of [`event_type`].
    pub event_type: u16,
    _pad: u16,
    /// Payload selected by `event_type`.
    pub event: RawEvent,
}

const _: () = {
    assert!(size_of::<KeyEventRecord>() == 16);
    assert!(size_of::<MouseEventRecord>() == 16);
    assert!(size_of::<WindowBufferSizeRecord>() == 4);
    assert!(size_of::<MenuEventRecord>() == 4);
    assert!(size_of::<FocusEventRecord>() == 4);
    assert!(size_of::<RawEvent>() == 16);
    assert!(size_of::<RawInputRecord>() == 20 && align_of::<RawInputRecord>() == 4);
};

impl RawInputRecord {
    /// An all-zero record, suitable as a read buffer element.
    pub const ZEROED: Self = Self {
        event_type: 0,
        _pad: 0,
        event: RawEvent { bytes: [0; 4] },
    };

    /// Builds a record from a tag and the payload's 16 bytes.
    ///
    /// Any bit pattern is a valid payload for every variant.
    pub fn from_parts(event_type: u16, payload: [u8; 16]) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(payload.chunks_exact(4)) {
            *word = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self {
            event_type,
            _pad: 0,
            event: RawEvent { bytes: words },
        }
    }

    /// Decodes the record by its tag.
    pub fn decode(&self) -> InputRecord {
        // SAFETY: every payload variant is plain integer data with no invalid
        // bit patterns, and the union is always fully initialized, so reading
        // the variant named by the tag is sound.
        unsafe {
            match self.event_type {
                event_type::KEY => InputRecord::Key(self.event.key),
                event_type::MOUSE => InputRecord::Mouse(self.event.mouse),
                event_type::WINDOW_BUFFER_SIZE => {
                    InputRecord::WindowBufferSize(self.event.window_buffer_size)
                }
                event_type::MENU => InputRecord::Menu(self.event.menu),
                event_type::FOCUS => InputRecord::Focus(self.event.focus),
                other => InputRecord::Unknown(other),
            }
        }
    }
}

impl Default for RawInputRecord {
    fn default() -> Self {
        Self::ZEROED
    }
}

impl fmt::Debug for RawInputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawInputRecord").field(&self.decode()).finish()
    }
}

/// A decoded console input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRecord {
    /// Keyboard input.
    Key(KeyEventRecord),
    /// Mouse movement or button press.
    Mouse(MouseEventRecord),
    /// Screen buffer resize.
    WindowBufferSize(WindowBufferSizeRecord),
    /// Menu command.
    Menu(MenuEventRecord),
    /// Focus change.
    Focus(FocusEventRecord),
    /// A tag this crate does not know.
    Unknown(u16),
}

impl InputRecord {
    /// The native tag of this event.
    pub fn event_type(&self) -> u16 {
        match self {
            InputRecord::Key(_) => event_type::KEY,
            InputRecord::Mouse(_) => event_type::MOUSE,
            InputRecord::WindowBufferSize(_) => event_type::WINDOW_BUFFER_SIZE,
            InputRecord::Menu(_) => event_type::MENU,
            InputRecord::Focus(_) => event_type::FOCUS,
            InputRecord::Unknown(tag) => *tag,
        }
    }

    /// Returns the key event if this is a key press.
    pub fn key_down(&self) -> Option<&KeyEventRecord> {
        match self {
            InputRecord::Key(key) if key.is_key_down() => Some(key),
            _ => None,
        }
    }
}

impl From<InputRecord> for RawInputRecord {
    fn from(record: InputRecord) -> Self {
        let mut raw = RawInputRecord::ZEROED;
        raw.event_type = record.event_type();
        match record {
            InputRecord::Key(key) => raw.event.key = key,
            InputRecord::Mouse(mouse) => raw.event.mouse = mouse,
            InputRecord::WindowBufferSize(size) => raw.event.window_buffer_size = size,
            InputRecord::Menu(menu) => raw.event.menu = menu,
            InputRecord::Focus(focus) => raw.event.focus = focus,
            InputRecord::Unknown(_) => {}
        }
        raw
    }
}
