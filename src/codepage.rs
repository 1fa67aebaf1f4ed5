//! Console code pages.

use std::fmt;

/// A code page identifier used for console input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CodePage(pub u32);

impl CodePage {
    /// `CP_ACP`: the system ANSI code page.
    pub const ACP: Self = Self(0);
    /// `CP_OEMCP`: the system OEM code page.
    pub const OEMCP: Self = Self(1);
    /// `CP_MACCP`: the system Macintosh code page.
    pub const MACCP: Self = Self(2);
    /// `CP_THREAD_ACP`: the calling thread's ANSI code page.
    pub const THREAD_ACP: Self = Self(3);
    /// `CP_SYMBOL`.
    pub const SYMBOL: Self = Self(42);
    /// `CP_UTF7`.
    pub const UTF7: Self = Self(65000);
    /// `CP_UTF8`.
    pub const UTF8: Self = Self(65001);
}

impl From<u32> for CodePage {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UTF8 => f.write_str("65001 (UTF-8)"),
            Self::UTF7 => f.write_str("65000 (UTF-7)"),
            Self(cp) => write!(f, "{cp}"),
        }
    }
}
