//! Narrowing a window directory by process name.

use crate::WindowEntry;

/// Returns the entries whose process name contains `substring`,
/// ignoring case.
///
/// A blank substring means "no filter" and returns every entry. Input
/// order is preserved.
pub fn filter(entries: &[WindowEntry], substring: &str) -> Vec<WindowEntry> {
    let needle = substring.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|e| e.process_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Returns the entries whose process name equals `name`, ignoring case.
///
/// The `.exe` suffix is optional, so `notepad` matches `notepad.exe`.
/// A blank name returns every entry.
pub fn filter_exact(entries: &[WindowEntry], name: &str) -> Vec<WindowEntry> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return entries.to_vec();
    }
    let with_exe = format!("{name}.exe");

    entries
        .iter()
        .filter(|e| {
            let process = e.process_name.to_lowercase();
            process == name || process == with_exe
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WindowHandle;

    fn entry(handle: usize, process: &str) -> WindowEntry {
        WindowEntry {
            handle: WindowHandle(handle),
            title: format!("window {handle}"),
            pid: handle as u32,
            process_name: process.into(),
        }
    }

    fn directory() -> Vec<WindowEntry> {
        vec![
            entry(1, "notepad.exe"),
            entry(2, "Code.exe"),
            entry(3, "Notepad++.exe"),
            entry(4, "Unknown"),
            entry(5, "explorer.exe"),
        ]
    }

    fn handles(entries: &[WindowEntry]) -> Vec<usize> {
        entries.iter().map(|e| e.handle.raw()).collect()
    }

    #[test]
    fn substring_match_ignores_case_and_keeps_order() {
        // Act
        let matched = filter(&directory(), "NOTEPAD");

        // Assert
        assert_eq!(handles(&matched), vec![1, 3]);
    }

    #[test]
    fn every_match_contains_the_substring() {
        let dir = directory();
        for needle in ["e", "EXE", "code", "pad+", "xyz", "unknown"] {
            let matched = filter(&dir, needle);
            let lowered = needle.to_lowercase();

            assert!(
                matched
                    .iter()
                    .all(|e| e.process_name.to_lowercase().contains(&lowered))
            );
            let expected = dir
                .iter()
                .filter(|e| e.process_name.to_lowercase().contains(&lowered))
                .count();
            assert_eq!(matched.len(), expected, "needle {needle:?}");
        }
    }

    #[test]
    fn blank_substring_returns_everything() {
        let dir = directory();

        assert_eq!(filter(&dir, ""), dir);
        assert_eq!(filter(&dir, "   "), dir);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter(&directory(), "firefox").is_empty());
    }

    #[test]
    fn exact_match_accepts_optional_exe_suffix() {
        let dir = directory();

        assert_eq!(handles(&filter_exact(&dir, "notepad")), vec![1]);
        assert_eq!(handles(&filter_exact(&dir, "Notepad.EXE")), vec![1]);
        assert_eq!(handles(&filter_exact(&dir, "code")), vec![2]);
        assert!(filter_exact(&dir, "note").is_empty());
        assert_eq!(filter_exact(&dir, ""), dir);
    }
}
