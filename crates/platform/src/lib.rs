#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/platform/src/lib.rs
//!
//! # Overview
//!
//! Platform-specific code isolation for the oc-dnsproxy workspace. The
//! diagnostics core in `crates/logging` is platform-independent; everything
//! that differs between Unix and Windows lives here: the system
//! error-message facility and the socket error constants that the logger's
//! network-error damping compares against.
//!
//! # Design
//!
//! [`error_text`] returns the raw system text for a status code without any
//! cleanup. Trailing punctuation and whitespace handling is a formatting
//! concern and stays in the logging crate, so both the `strerror_r` and the
//! `FormatMessageW` backends can hand their output through unchanged.
//!
//! # Errors
//!
//! Lookup failure is reported as `None`; callers substitute a raw numeric
//! fallback so a diagnostic is never dropped because the platform could not
//! describe its own status code.

/// Status code reported when a network is unreachable.
///
/// `ENETUNREACH` on Unix, `WSAENETUNREACH` on Windows.
#[cfg(unix)]
pub const NET_UNREACHABLE: i32 = libc::ENETUNREACH;

/// Status code reported when a host is unreachable.
///
/// `EHOSTUNREACH` on Unix, `WSAEHOSTUNREACH` on Windows.
#[cfg(unix)]
pub const HOST_UNREACHABLE: i32 = libc::EHOSTUNREACH;

/// Status code reported when a network is unreachable (`WSAENETUNREACH`).
#[cfg(windows)]
pub const NET_UNREACHABLE: i32 = 10051;

/// Status code reported when a host is unreachable (`WSAEHOSTUNREACH`).
#[cfg(windows)]
pub const HOST_UNREACHABLE: i32 = 10065;

/// Looks up the system's human-readable text for a platform status code.
///
/// Returns `None` when the platform has no description for the code or the
/// text cannot be transcoded. The returned string is unmodified system
/// output and may carry trailing punctuation or whitespace.
#[cfg(unix)]
pub fn error_text(code: i32) -> Option<String> {
    let mut buf = [0u8; 256];
    // SAFETY: buf outlives the call and the passed length matches its size;
    // strerror_r NUL-terminates on success.
    let rc = unsafe { libc::strerror_r(code, buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc != 0 {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0)?;
    std::str::from_utf8(&buf[..end]).ok().map(str::to_owned)
}

/// Looks up the system's human-readable text for a platform status code.
///
/// Returns `None` when the platform has no description for the code. The
/// returned string is unmodified `FormatMessageW` output and carries the
/// trailing punctuation that facility produces.
#[cfg(windows)]
pub fn error_text(code: i32) -> Option<String> {
    use windows::Win32::System::Diagnostics::Debug::{
        FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
        FORMAT_MESSAGE_MAX_WIDTH_MASK,
    };
    use windows::core::PWSTR;

    let mut buf = [0u16; 512];
    // SAFETY: FormatMessageW writes at most `buf.len()` UTF-16 code units
    // into the provided buffer and returns the count written.
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS
                | FORMAT_MESSAGE_MAX_WIDTH_MASK,
            None,
            code as u32,
            0,
            PWSTR(buf.as_mut_ptr()),
            buf.len() as u32,
            None,
        )
    };
    if len == 0 {
        return None;
    }
    Some(String::from_utf16_lossy(&buf[..len as usize]))
}
