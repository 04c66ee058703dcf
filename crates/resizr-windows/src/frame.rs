use std::mem;

use resizr_core::Rect;
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::GetWindowRect;

/// A window's outer rectangle alongside its visible one.
///
/// On Windows 10/11, `GetWindowRect` includes invisible drop-shadow
/// borders (typically ~7px left/right/bottom, 0px top). DWM's extended
/// frame bounds give the part the user actually sees. Users think in
/// visible pixels, so reads report the visible rectangle and writes
/// convert back to outer coordinates.
pub struct Frame {
    outer: RECT,
    visible: RECT,
}

impl Frame {
    /// Queries both rectangles for `hwnd`.
    ///
    /// When DWM is unavailable the visible rectangle equals the outer one.
    pub fn query(hwnd: HWND) -> windows::core::Result<Self> {
        let mut outer = RECT::default();
        // SAFETY: GetWindowRect writes into `outer` and fails cleanly on
        // an invalid HWND.
        unsafe { GetWindowRect(hwnd, &mut outer)? };

        let mut visible = RECT::default();
        // SAFETY: the buffer is a RECT and its size is passed alongside.
        let dwm = unsafe {
            DwmGetWindowAttribute(
                hwnd,
                DWMWA_EXTENDED_FRAME_BOUNDS,
                &mut visible as *mut RECT as *mut _,
                mem::size_of::<RECT>() as u32,
            )
        };
        if dwm.is_err() {
            visible = outer;
        }

        Ok(Self { outer, visible })
    }

    /// The visible bounds.
    pub fn visible(&self) -> Rect {
        to_rect(&self.visible)
    }

    /// Outer rectangle that makes the visible bounds land on `target`.
    ///
    /// Saturates at the `i32` limits instead of wrapping.
    pub fn outer_for(&self, target: &Rect) -> Rect {
        let left = self.visible.left.saturating_sub(self.outer.left);
        let top = self.visible.top.saturating_sub(self.outer.top);
        let right = self.outer.right.saturating_sub(self.visible.right);
        let bottom = self.outer.bottom.saturating_sub(self.visible.bottom);

        Rect::new(
            target.x.saturating_sub(left),
            target.y.saturating_sub(top),
            target.width.saturating_add(left).saturating_add(right),
            target.height.saturating_add(top).saturating_add(bottom),
        )
    }
}

fn to_rect(r: &RECT) -> Rect {
    Rect::from_edges(r.left, r.top, r.right, r.bottom)
}
