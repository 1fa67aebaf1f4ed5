//! Character cell attributes and console colors.

use bitflags::bitflags;

bitflags! {
    /// Display attributes of a character cell (`CONSOLE_CHARACTER_ATTRIBUTES`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharAttributes: u16 {
        /// `FOREGROUND_BLUE`.
        const FOREGROUND_BLUE = 0x0001;
        /// `FOREGROUND_GREEN`.
        const FOREGROUND_GREEN = 0x0002;
        /// `FOREGROUND_RED`.
        const FOREGROUND_RED = 0x0004;
        /// `FOREGROUND_INTENSITY`.
        const FOREGROUND_INTENSITY = 0x0008;
        /// `BACKGROUND_BLUE`.
        const BACKGROUND_BLUE = 0x0010;
        /// `BACKGROUND_GREEN`.
        const BACKGROUND_GREEN = 0x0020;
        /// `BACKGROUND_RED`.
        const BACKGROUND_RED = 0x0040;
        /// `BACKGROUND_INTENSITY`.
        const BACKGROUND_INTENSITY = 0x0080;

        // Grid and reverse-video bits.
        const _ = !0;
    }
}

impl CharAttributes {
    /// Gray on black: red, green and blue foreground.
    pub const DEFAULT: Self = Self::from_bits_retain(0x0007);

    /// Builds attributes from a foreground and background color.
    pub const fn from_colors(foreground: Color, background: Color) -> Self {
        Self::from_bits_retain((foreground as u16) | ((background as u16) << 4))
    }

    /// The foreground color.
    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.bits())
    }

    /// The background color.
    pub const fn background(self) -> Color {
        Color::from_nibble(self.bits() >> 4)
    }
}

impl Default for CharAttributes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The 16 console colors, as attribute nibbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Color {
    /// Black.
    Black = 0,
    /// Dark blue.
    DarkBlue = 1,
    /// Dark green.
    DarkGreen = 2,
    /// Dark cyan.
    DarkCyan = 3,
    /// Dark red.
    DarkRed = 4,
    /// Dark magenta.
    DarkMagenta = 5,
    /// Dark yellow.
    DarkYellow = 6,
    /// Gray, the default foreground.
    Gray = 7,
    /// Dark gray.
    DarkGray = 8,
    /// Blue.
    Blue = 9,
    /// Green.
    Green = 10,
    /// Cyan.
    Cyan = 11,
    /// Red.
    Red = 12,
    /// Magenta.
    Magenta = 13,
    /// Yellow.
    Yellow = 14,
    /// White.
    White = 15,
}

impl Color {
    const fn from_nibble(value: u16) -> Self {
        match value & 0x0F {
            0 => Color::Black,
            1 => Color::DarkBlue,
            2 => Color::DarkGreen,
            3 => Color::DarkCyan,
            4 => Color::DarkRed,
            5 => Color::DarkMagenta,
            6 => Color::DarkYellow,
            7 => Color::Gray,
            8 => Color::DarkGray,
            9 => Color::Blue,
            10 => Color::Green,
            11 => Color::Cyan,
            12 => Color::Red,
            13 => Color::Magenta,
            14 => Color::Yellow,
            _ => Color::White,
        }
    }
}
