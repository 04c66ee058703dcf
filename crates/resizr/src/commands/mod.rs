pub mod list;
pub mod prefs;
pub mod prompt;
pub mod resize;
pub mod size;
pub mod table;
pub mod theme;

use std::fmt::Display;

use resizr_core::{Desktop, Error, PreferenceStore, Session, config};

/// Prints an error and exits with status 1.
pub fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// Opens the native desktop backend, or exits if there is none.
pub fn open_desktop() -> Box<dyn Desktop> {
    resizr_windows::open_desktop().unwrap_or_else(|e| fail(e))
}

/// Loads preferences from the default location.
pub fn preference_store() -> PreferenceStore {
    PreferenceStore::open(config::preferences_path())
}

pub fn open_session() -> Session {
    Session::new(open_desktop(), preference_store())
}

/// Reminds non-elevated users that some windows may refuse changes.
pub fn warn_if_not_elevated() {
    if !resizr_windows::is_elevated() {
        println!("Note: Some windows may require administrator privileges to resize.");
        println!("Consider running resizr as administrator if it doesn't work.");
        println!();
    }
}

/// Formats a failed geometry change for the user.
///
/// Every OS-side failure (stale handle, access denied, other) shares one
/// "Failed to resize window" prefix; the detail follows it.
pub fn describe_failure(e: &Error) -> String {
    if e.is_os_failure() {
        format!("Failed to resize window: {e}")
    } else {
        format!("Error: {e}")
    }
}
