use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

/// Returns every top-level window handle in `EnumWindows` order.
///
/// This calls the Win32 `EnumWindows` API, which iterates over every
/// top-level window and invokes a callback for each one. The callback
/// only collects; `resizr_core::directory` applies the visibility and
/// title rules.
pub fn top_level_windows() -> windows::core::Result<Vec<HWND>> {
    let mut handles: Vec<HWND> = Vec::new();

    // SAFETY: the Vec travels to the callback as LPARAM user data.
    // EnumWindows returns only after the last callback, so the pointer
    // never outlives `handles`.
    unsafe {
        EnumWindows(
            Some(collect_window),
            LPARAM(&mut handles as *mut _ as isize),
        )?;
    }

    Ok(handles)
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration.
unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<HWND>, cast from top_level_windows().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };
    handles.push(hwnd);

    BOOL(1)
}
