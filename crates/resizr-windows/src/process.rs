use windows::Win32::Foundation::{CloseHandle, ERROR_INSUFFICIENT_BUFFER};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
    QueryFullProcessImageNameW,
};
use windows::Win32::UI::Shell::IsUserAnAdmin;
use windows::core::PWSTR;

/// First buffer size tried for an image path, in UTF-16 units.
const INITIAL_PATH_LEN: usize = 260;
/// Longest path the Win32 API can return.
const MAX_PATH_LEN: usize = 32_768;

/// Returns the full executable path for a process ID.
///
/// Limited-query access is enough here, so processes running elevated
/// still resolve when resizr itself is not. `None` when the process has
/// exited or is protected.
pub fn image_path(pid: u32) -> Option<String> {
    // SAFETY: OpenProcess either returns an owned handle or an error.
    let handle = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) }.ok()?;

    let path = read_growing(|buf| {
        let mut len = buf.len() as u32;
        // SAFETY: `len` holds the buffer's capacity on entry and the number
        // of characters written on success.
        unsafe {
            QueryFullProcessImageNameW(
                handle,
                PROCESS_NAME_WIN32,
                PWSTR(buf.as_mut_ptr()),
                &mut len,
            )
        }
        .map(|()| len as usize)
    });

    // SAFETY: the handle was opened above and is not used after this.
    unsafe {
        let _ = CloseHandle(handle);
    }
    path
}

/// Runs `query` with a UTF-16 buffer, doubling it while the OS reports
/// `ERROR_INSUFFICIENT_BUFFER`.
///
/// `query` returns the number of characters written.
fn read_growing(
    mut query: impl FnMut(&mut [u16]) -> windows::core::Result<usize>,
) -> Option<String> {
    let mut buf = vec![0u16; INITIAL_PATH_LEN];
    loop {
        match query(&mut buf) {
            Ok(len) => return Some(String::from_utf16_lossy(&buf[..len.min(buf.len())])),
            Err(e)
                if e.code() == ERROR_INSUFFICIENT_BUFFER.to_hresult()
                    && buf.len() < MAX_PATH_LEN =>
            {
                let grown = (buf.len() * 2).min(MAX_PATH_LEN);
                buf.resize(grown, 0);
            }
            Err(_) => return None,
        }
    }
}

/// Returns whether this process runs with administrator rights.
///
/// Windows owned by elevated processes refuse `SetWindowPos` from a
/// non-elevated caller.
pub fn is_elevated() -> bool {
    // SAFETY: IsUserAnAdmin takes no arguments and only reads the token.
    unsafe { IsUserAnAdmin().as_bool() }
}
