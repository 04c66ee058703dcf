use resizr_core::directory::executable_name;
use resizr_core::{Desktop, Error, Rect, Result, WindowHandle};
use tracing::debug;
use windows::Win32::Foundation::{ERROR_ACCESS_DENIED, ERROR_INVALID_WINDOW_HANDLE, HWND};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible,
    SWP_NOACTIVATE, SWP_NOZORDER, SetWindowPos,
};

use crate::frame::Frame;
use crate::{enumerate, process};

/// The Win32 desktop.
///
/// Stateless: every call queries the OS directly, so a handle that has
/// gone stale since enumeration surfaces as [`Error::StaleHandle`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Desktop;

impl Win32Desktop {
    pub fn new() -> Self {
        Self
    }
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut _)
}

/// Maps a Win32 failure on `handle` to the matching error kind.
fn window_error(
    handle: WindowHandle,
    operation: &'static str,
    err: windows::core::Error,
) -> Error {
    let code = err.code();
    if code == ERROR_INVALID_WINDOW_HANDLE.to_hresult() {
        Error::StaleHandle(handle)
    } else if code == ERROR_ACCESS_DENIED.to_hresult() {
        Error::AccessDenied(handle)
    } else {
        Error::Os {
            operation,
            message: err.to_string(),
        }
    }
}

impl Desktop for Win32Desktop {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>> {
        let handles =
            enumerate::top_level_windows().map_err(|e| Error::Enumerate(e.to_string()))?;
        Ok(handles
            .into_iter()
            .map(|h| WindowHandle(h.0 as usize))
            .collect())
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(hwnd(handle)).as_bool() }
    }

    fn title(&self, handle: WindowHandle) -> Result<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW read window text
        // without modifying state. An invalid HWND yields length 0.
        unsafe {
            let length = GetWindowTextLengthW(hwnd(handle));
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(hwnd(handle), &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn process_id(&self, handle: WindowHandle) -> Result<u32> {
        let mut pid: u32 = 0;
        // SAFETY: GetWindowThreadProcessId writes the owning pid into `pid`
        // and returns 0 when the window does not exist.
        let thread = unsafe { GetWindowThreadProcessId(hwnd(handle), Some(&mut pid)) };
        if thread == 0 || pid == 0 {
            return Err(Error::StaleHandle(handle));
        }
        Ok(pid)
    }

    fn process_name(&self, pid: u32) -> Result<String> {
        process::image_path(pid)
            .map(|path| executable_name(&path).to_string())
            .ok_or_else(|| Error::Process {
                pid,
                message: "process exited or access denied".into(),
            })
    }

    fn rect(&self, handle: WindowHandle) -> Result<Rect> {
        Frame::query(hwnd(handle))
            .map(|frame| frame.visible())
            .map_err(|e| window_error(handle, "GetWindowRect", e))
    }

    fn set_rect(&self, handle: WindowHandle, rect: &Rect) -> Result<()> {
        // Compensate for invisible borders so the visible portion
        // lands exactly at the requested position and size.
        let outer = Frame::query(hwnd(handle))
            .map_err(|e| window_error(handle, "GetWindowRect", e))?
            .outer_for(rect);

        debug!(%handle, target = %rect, outer = %outer, "SetWindowPos");

        // SWP_NOZORDER keeps the stacking order; SWP_NOACTIVATE keeps focus
        // where the user left it.
        //
        // SAFETY: SetWindowPos with an invalid HWND fails cleanly with
        // ERROR_INVALID_WINDOW_HANDLE.
        unsafe {
            SetWindowPos(
                hwnd(handle),
                None,
                outer.x,
                outer.y,
                outer.width,
                outer.height,
                SWP_NOZORDER | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| window_error(handle, "SetWindowPos", e))
    }
}
