//! Discovery of visible, titled top-level windows and their owners.

use tracing::debug;

use crate::{Desktop, Error, Result, WindowHandle};

/// Placeholder process name used when the owner cannot be resolved.
pub const UNKNOWN_PROCESS: &str = "Unknown";

/// A snapshot of one top-level window.
///
/// Entries are collected fresh on every enumeration and never updated;
/// the handle is only valid while the window exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowEntry {
    pub handle: WindowHandle,
    pub title: String,
    pub pid: u32,
    pub process_name: String,
}

/// Enumerates all visible top-level windows that have a title.
///
/// Process metadata is best effort: if the owning process has exited or
/// cannot be opened, the window is still returned with
/// [`UNKNOWN_PROCESS`] as its process name. Only a failure of the
/// enumeration call itself is an error.
pub fn enumerate(desktop: &dyn Desktop) -> Result<Vec<WindowEntry>> {
    let handles = desktop.top_level_windows()?;
    let mut entries = Vec::new();

    for handle in handles {
        if !desktop.is_visible(handle) {
            continue;
        }

        let title = desktop.title(handle).unwrap_or_default();
        if title.is_empty() {
            continue;
        }

        let (pid, process_name) = resolve_process(desktop, handle);
        entries.push(WindowEntry {
            handle,
            title,
            pid,
            process_name,
        });
    }

    debug!(count = entries.len(), "enumerated windows");
    Ok(entries)
}

/// Returns the entry at `index`, or [`Error::NoSuchEntry`].
pub fn select(entries: &[WindowEntry], index: usize) -> Result<&WindowEntry> {
    entries.get(index).ok_or(Error::NoSuchEntry {
        index,
        len: entries.len(),
    })
}

/// Extracts the executable file name from a full image path.
///
/// Handles both `\` and `/` separators so Windows paths resolve the
/// same way on every host.
pub fn executable_name(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

fn resolve_process(desktop: &dyn Desktop, handle: WindowHandle) -> (u32, String) {
    let pid = match desktop.process_id(handle) {
        Ok(pid) => pid,
        Err(e) => {
            debug!(%handle, error = %e, "owning process id unavailable");
            return (0, UNKNOWN_PROCESS.to_string());
        }
    };

    let name = desktop.process_name(pid).unwrap_or_else(|e| {
        debug!(%handle, pid, error = %e, "process name unavailable");
        UNKNOWN_PROCESS.to_string()
    });

    (pid, name)
}
