//! ABI-exact console structures.
//!
//! Every type here is `#[repr(C)]` and mirrors its native counterpart field
//! for field. Sizes and alignments are checked at compile time.

use std::mem::{align_of, size_of};

use crate::attr::CharAttributes;

/// The native `BOOL`: a 32-bit integer where any non-zero value is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bool(pub i32);

impl Bool {
    /// `TRUE`.
    pub const TRUE: Self = Self(1);
    /// `FALSE`.
    pub const FALSE: Self = Self(0);

    /// Returns true for any non-zero value.
    #[inline]
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool {
    #[inline]
    fn from(value: bool) -> Self {
        Self(value as i32)
    }
}

impl From<Bool> for bool {
    #[inline]
    fn from(value: Bool) -> Self {
        value.as_bool()
    }
}

/// A character cell position (`COORD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Coord {
    /// Column.
    pub x: i16,
    /// Row.
    pub y: i16,
}

impl Coord {
    /// The origin, (0, 0).
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a coordinate.
    #[inline]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Adds an offset with wrapping 16-bit arithmetic.
    ///
    /// No clamping against buffer extents is performed.
    #[inline]
    pub const fn offset(self, delta: Coord) -> Self {
        Self {
            x: self.x.wrapping_add(delta.x),
            y: self.y.wrapping_add(delta.y),
        }
    }
}

/// A rectangle of cells with inclusive bounds (`SMALL_RECT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct SmallRect {
    /// Left column.
    pub left: i16,
    /// Top row.
    pub top: i16,
    /// Right column (inclusive).
    pub right: i16,
    /// Bottom row (inclusive).
    pub bottom: i16,
}

impl SmallRect {
    /// Creates a rectangle.
    #[inline]
    pub const fn new(left: i16, top: i16, right: i16, bottom: i16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in cells. Computed in 32 bits so extreme bounds cannot overflow.
    pub fn width(&self) -> i32 {
        i32::from(self.right) - i32::from(self.left) + 1
    }

    /// Height in cells. Computed in 32 bits so extreme bounds cannot overflow.
    pub fn height(&self) -> i32 {
        i32::from(self.bottom) - i32::from(self.top) + 1
    }
}

/// A snapshot of a screen buffer (`CONSOLE_SCREEN_BUFFER_INFO`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct ScreenBufferInfo {
    /// Buffer size in cells.
    pub size: Coord,
    /// Cursor position.
    pub cursor_position: Coord,
    /// Attributes written by subsequent output.
    pub attributes: u16,
    /// Visible window, in buffer coordinates.
    pub window: SmallRect,
    /// Largest possible window given the font and display.
    pub maximum_window_size: Coord,
}

impl ScreenBufferInfo {
    /// Total number of cells in the buffer, `width × height`.
    ///
    /// Computed in 32 bits; negative sizes count as zero.
    pub fn cell_count(&self) -> u32 {
        let width = u32::try_from(self.size.x).unwrap_or(0);
        let height = u32::try_from(self.size.y).unwrap_or(0);
        width * height
    }
}

/// Cursor size and visibility (`CONSOLE_CURSOR_INFO`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct CursorInfo {
    /// Percentage of the cell filled by the cursor, 1 to 100.
    pub size: u32,
    /// Whether the cursor is visible.
    pub visible: Bool,
}

/// A character and its attributes (`CHAR_INFO`, Unicode variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct CharInfo {
    /// UTF-16 code unit.
    pub unicode_char: u16,
    /// Display attributes.
    pub attributes: u16,
}

impl CharInfo {
    /// A blank cell with default colors.
    pub const BLANK: Self = Self {
        unicode_char: b' ' as u16,
        attributes: CharAttributes::DEFAULT.bits(),
    };

    /// Creates a cell.
    #[inline]
    pub const fn new(unicode_char: u16, attributes: CharAttributes) -> Self {
        Self {
            unicode_char,
            attributes: attributes.bits(),
        }
    }
}

const _: () = {
    assert!(size_of::<Bool>() == 4);
    assert!(size_of::<Coord>() == 4 && align_of::<Coord>() == 2);
    assert!(size_of::<SmallRect>() == 8 && align_of::<SmallRect>() == 2);
    assert!(size_of::<ScreenBufferInfo>() == 22 && align_of::<ScreenBufferInfo>() == 2);
    assert!(size_of::<CursorInfo>() == 8 && align_of::<CursorInfo>() == 4);
    assert!(size_of::<CharInfo>() == 4 && align_of::<CharInfo>() == 2);
};
