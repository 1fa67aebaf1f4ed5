//! Error handling for console API calls.
//!
//! Every native call that reports failure is surfaced as [`Error::OsCall`],
//! carrying the name of the call and the Win32 status code verbatim. No
//! retries or classification happen here; callers are expected to know the
//! console API's semantics.

use thiserror::Error;

/// `ERROR_INVALID_HANDLE`.
pub const ERROR_INVALID_HANDLE: u32 = 6;

/// `ERROR_INVALID_PARAMETER`.
pub const ERROR_INVALID_PARAMETER: u32 = 87;

/// The main error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A console API call returned a non-success status.
    #[error("{call} failed with status {code:#x}")]
    OsCall {
        /// Name of the native function that failed.
        call: &'static str,
        /// The Win32 error code, or raw HRESULT bits for non-Win32 failures.
        code: u32,
    },

    /// A string conversion error occurred.
    #[error("String conversion error: {0}")]
    StringConversion(String),

    /// Writing a prompt to standard output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for console operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new OS call error.
    pub fn os_call(call: &'static str, code: u32) -> Self {
        Error::OsCall { call, code }
    }

    /// Creates a new string conversion error.
    pub fn string_conversion(msg: impl Into<String>) -> Self {
        Error::StringConversion(msg.into())
    }

    /// Returns the status code if this is an OS call error.
    pub fn code(&self) -> Option<u32> {
        match self {
            Error::OsCall { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the failing native call if this is an OS call error.
    pub fn call(&self) -> Option<&'static str> {
        match self {
            Error::OsCall { call, .. } => Some(call),
            _ => None,
        }
    }
}

/// Extracts the Win32 error code carried by an HRESULT.
///
/// HRESULTs of facility `FACILITY_WIN32` (`0x8007xxxx`) carry the original
/// `GetLastError` value in their low word. Anything else is returned as-is.
pub fn win32_code_from_hresult(hresult: i32) -> u32 {
    let bits = hresult as u32;
    if bits & 0xFFFF_0000 == 0x8007_0000 {
        bits & 0xFFFF
    } else {
        bits
    }
}

/// Extension trait for converting `windows` crate results.
#[cfg(windows)]
pub trait OsCallExt<T> {
    /// Tags a failed native call with its function name.
    fn os_call(self, call: &'static str) -> Result<T>;
}

#[cfg(windows)]
impl<T> OsCallExt<T> for windows::core::Result<T> {
    fn os_call(self, call: &'static str) -> Result<T> {
        self.map_err(|e| {
            let code = win32_code_from_hresult(e.code().0);
            tracing::debug!(call, code, "console call failed");
            Error::os_call(call, code)
        })
    }
}

/// Gets the calling thread's last Windows error as an OS call error.
#[cfg(windows)]
pub fn last_error(call: &'static str) -> Error {
    // SAFETY: GetLastError only reads thread-local state.
    let code = unsafe { windows::Win32::Foundation::GetLastError() }.0;
    tracing::debug!(call, code, "console call failed");
    Error::os_call(call, code)
}
