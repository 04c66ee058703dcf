//! Windows implementation of the resizr [`Desktop`] seam.
//!
//! Everything that touches Win32 is compiled only on Windows. Other
//! targets still build, and [`open_desktop`] reports
//! [`Error::Unsupported`](resizr_core::Error::Unsupported).

use resizr_core::{Desktop, Result};

/// `Desktop` backed by Win32 calls.
#[cfg(windows)]
mod desktop;

/// Win32 window enumeration.
#[cfg(windows)]
mod enumerate;

/// Visible frame bounds and invisible border compensation.
#[cfg(windows)]
mod frame;

/// Process utilities (image name, elevation).
#[cfg(windows)]
mod process;

#[cfg(windows)]
pub use desktop::Win32Desktop;

/// Opens the native desktop backend for this platform.
pub fn open_desktop() -> Result<Box<dyn Desktop>> {
    #[cfg(windows)]
    {
        Ok(Box::new(Win32Desktop::new()))
    }
    #[cfg(not(windows))]
    {
        Err(resizr_core::Error::Unsupported)
    }
}

/// Returns whether the current process runs with administrator rights.
///
/// Always `false` off Windows.
pub fn is_elevated() -> bool {
    #[cfg(windows)]
    {
        process::is_elevated()
    }
    #[cfg(not(windows))]
    {
        false
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn non_windows_backend_is_unsupported() {
        assert!(matches!(
            open_desktop(),
            Err(resizr_core::Error::Unsupported)
        ));
        assert!(!is_elevated());
    }
}
