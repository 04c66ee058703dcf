use crate::desktop::WindowHandle;
use crate::geometry::GeometryError;
use crate::preferences::PreferencesError;

/// Errors surfaced by window discovery and geometry operations.
///
/// None of these are fatal to the process. The CLI prints them and
/// leaves the system in the state it found it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The OS enumeration call itself failed.
    #[error("failed to enumerate windows: {0}")]
    Enumerate(String),

    /// The handle no longer refers to a window.
    #[error("window {0} no longer exists")]
    StaleHandle(WindowHandle),

    /// The OS refused the operation, typically because the window
    /// belongs to a process running with higher privileges.
    #[error("access denied to window {0} (it may belong to an elevated process)")]
    AccessDenied(WindowHandle),

    /// Any other OS failure while querying or mutating a window.
    #[error("{operation} failed: {message}")]
    Os {
        operation: &'static str,
        message: String,
    },

    /// Process metadata could not be read for this pid.
    #[error("process {pid} could not be queried: {message}")]
    Process { pid: u32, message: String },

    /// User-supplied geometry was rejected before reaching the OS.
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    /// A list selection was out of range.
    #[error("invalid index {index} (expected 0..{len})")]
    NoSuchEntry { index: usize, len: usize },

    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// No native backend exists for the current platform.
    #[error("window management is not supported on this platform")]
    Unsupported,
}

/// Result alias used throughout resizr.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether the OS refused or failed a window query or
    /// mutation, as opposed to bad input or a missing backend.
    pub fn is_os_failure(&self) -> bool {
        matches!(
            self,
            Self::StaleHandle(_) | Self::AccessDenied(_) | Self::Os { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_failures_are_classified() {
        assert!(Error::StaleHandle(WindowHandle(1)).is_os_failure());
        assert!(Error::AccessDenied(WindowHandle(1)).is_os_failure());
        assert!(
            Error::Os {
                operation: "SetWindowPos",
                message: "boom".into()
            }
            .is_os_failure()
        );
        assert!(!Error::Unsupported.is_os_failure());
        assert!(
            !Error::InvalidGeometry(GeometryError::NotPositive {
                field: "width",
                value: 0
            })
            .is_os_failure()
        );
    }

    #[test]
    fn access_denied_message_names_the_window() {
        let err = Error::AccessDenied(WindowHandle(0xBEEF));

        assert_eq!(
            err.to_string(),
            "access denied to window 0xBEEF (it may belong to an elevated process)"
        );
    }
}
