use std::fmt;
use std::str::FromStr;

use crate::{Rect, Result};

/// Opaque identifier for a top-level window.
///
/// On Windows this is the numeric value of an `HWND`. It is only
/// meaningful while the window exists; the OS may reuse the value once
/// the window is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub usize);

impl WindowHandle {
    /// Returns the raw pointer-sized value.
    pub fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Returned when a window handle string is neither decimal nor `0x` hex.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid window handle '{0}' (expected decimal or 0x-prefixed hex)")]
pub struct HandleParseError(pub String);

impl FromStr for WindowHandle {
    type Err = HandleParseError;

    /// Parses a window handle from a string (supports decimal and 0x hex).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            usize::from_str_radix(hex, 16)
        } else {
            trimmed.parse()
        };

        parsed
            .map(WindowHandle)
            .map_err(|_| HandleParseError(s.to_string()))
    }
}

/// Platform seam for everything that talks to the windowing system.
///
/// Each platform crate (e.g. `resizr-windows`) provides its own
/// implementation. The directory, geometry, and session logic only ever
/// see this trait.
pub trait Desktop {
    /// Returns every top-level window, in the order the OS reports them.
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>>;

    /// Returns whether the window is currently visible.
    fn is_visible(&self, handle: WindowHandle) -> bool;

    /// Returns the window title.
    fn title(&self, handle: WindowHandle) -> Result<String>;

    /// Returns the id of the process that owns the window.
    fn process_id(&self, handle: WindowHandle) -> Result<u32>;

    /// Returns the executable name of a process (e.g. `notepad.exe`).
    fn process_name(&self, pid: u32) -> Result<String>;

    /// Returns the window's visible bounding rectangle.
    fn rect(&self, handle: WindowHandle) -> Result<Rect>;

    /// Moves and resizes the window in one call.
    ///
    /// Implementations must not change the window's z-order or
    /// activate it.
    fn set_rect(&self, handle: WindowHandle, rect: &Rect) -> Result<()>;
}
