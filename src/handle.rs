//! Console stream handles.
//!
//! A console handle is owned by the operating system. This crate never
//! allocates or closes one; [`Handle`] is a plain `Copy` identifier that is
//! passed through to the native calls.

/// Raw value of `INVALID_HANDLE_VALUE`.
const INVALID_HANDLE_VALUE: isize = -1;

/// An opaque, unowned handle to a console stream.
///
/// Dropping a `Handle` does nothing: the stream belongs to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Handle(isize);

impl Handle {
    /// The null handle.
    pub const NULL: Self = Self(0);

    /// The `INVALID_HANDLE_VALUE` sentinel.
    pub const INVALID: Self = Self(INVALID_HANDLE_VALUE);

    /// Creates a handle from its raw value.
    #[inline]
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn as_raw(self) -> isize {
        self.0
    }

    /// Returns true if this handle is neither null nor `INVALID_HANDLE_VALUE`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0 && self.0 != INVALID_HANDLE_VALUE
    }
}

#[cfg(windows)]
impl From<windows::Win32::Foundation::HANDLE> for Handle {
    #[inline]
    fn from(handle: windows::Win32::Foundation::HANDLE) -> Self {
        Self(handle.0 as isize)
    }
}

#[cfg(windows)]
impl From<Handle> for windows::Win32::Foundation::HANDLE {
    #[inline]
    fn from(handle: Handle) -> Self {
        windows::Win32::Foundation::HANDLE(handle.0 as *mut core::ffi::c_void)
    }
}

/// Standard console streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StdStream {
    /// Standard input (stdin).
    Input,
    /// Standard output (stdout).
    Output,
    /// Standard error (stderr).
    Error,
}

impl StdStream {
    /// `STD_INPUT_HANDLE`, `(DWORD)-10`.
    pub const INPUT_ID: u32 = (-10i32) as u32;
    /// `STD_OUTPUT_HANDLE`, `(DWORD)-11`.
    pub const OUTPUT_ID: u32 = (-11i32) as u32;
    /// `STD_ERROR_HANDLE`, `(DWORD)-12`.
    pub const ERROR_ID: u32 = (-12i32) as u32;

    /// Returns the native stream selector passed to `GetStdHandle`.
    pub const fn to_id(self) -> u32 {
        match self {
            StdStream::Input => Self::INPUT_ID,
            StdStream::Output => Self::OUTPUT_ID,
            StdStream::Error => Self::ERROR_ID,
        }
    }
}
