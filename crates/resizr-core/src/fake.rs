//! In-memory [`Desktop`] used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::{Desktop, Error, Rect, Result, WindowHandle};

#[derive(Debug, Clone)]
pub(crate) struct FakeWindow {
    handle: WindowHandle,
    title: String,
    visible: bool,
    owner: Option<u32>,
    rect: Rect,
}

impl FakeWindow {
    pub(crate) fn new(handle: usize, title: &str, pid: u32) -> Self {
        Self {
            handle: WindowHandle(handle),
            title: title.into(),
            visible: true,
            owner: Some(pid),
            rect: Rect::new(100, 100, 640, 480),
        }
    }

    pub(crate) fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub(crate) fn without_owner(mut self) -> Self {
        self.owner = None;
        self
    }

    pub(crate) fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeDesktop {
    windows: RefCell<Vec<FakeWindow>>,
    processes: HashMap<u32, String>,
    denied: HashSet<WindowHandle>,
    fail_enumeration: bool,
    set_calls: Cell<usize>,
}

impl FakeDesktop {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_window(self, window: FakeWindow) -> Self {
        self.windows.borrow_mut().push(window);
        self
    }

    pub(crate) fn with_process(mut self, pid: u32, name: &str) -> Self {
        self.processes.insert(pid, name.into());
        self
    }

    /// Makes `set_rect` on this handle fail as if the window were elevated.
    pub(crate) fn denying(mut self, handle: usize) -> Self {
        self.denied.insert(WindowHandle(handle));
        self
    }

    pub(crate) fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    /// Number of `set_rect` calls that reached the fake OS.
    pub(crate) fn set_calls(&self) -> usize {
        self.set_calls.get()
    }

    /// Removes a window, leaving any handle to it stale.
    pub(crate) fn destroy(&self, handle: usize) {
        self.windows
            .borrow_mut()
            .retain(|w| w.handle != WindowHandle(handle));
    }

    fn find(&self, handle: WindowHandle) -> Result<FakeWindow> {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.handle == handle)
            .cloned()
            .ok_or(Error::StaleHandle(handle))
    }
}

impl Desktop for FakeDesktop {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>> {
        if self.fail_enumeration {
            return Err(Error::Enumerate("EnumWindows failed".into()));
        }
        Ok(self.windows.borrow().iter().map(|w| w.handle).collect())
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        self.find(handle).map(|w| w.visible).unwrap_or(false)
    }

    fn title(&self, handle: WindowHandle) -> Result<String> {
        Ok(self.find(handle)?.title)
    }

    fn process_id(&self, handle: WindowHandle) -> Result<u32> {
        self.find(handle)?.owner.ok_or(Error::StaleHandle(handle))
    }

    fn process_name(&self, pid: u32) -> Result<String> {
        self.processes.get(&pid).cloned().ok_or(Error::Process {
            pid,
            message: "no such process".into(),
        })
    }

    fn rect(&self, handle: WindowHandle) -> Result<Rect> {
        Ok(self.find(handle)?.rect)
    }

    fn set_rect(&self, handle: WindowHandle, rect: &Rect) -> Result<()> {
        self.find(handle)?;
        if self.denied.contains(&handle) {
            return Err(Error::AccessDenied(handle));
        }
        self.set_calls.set(self.set_calls.get() + 1);
        let mut windows = self.windows.borrow_mut();
        if let Some(window) = windows.iter_mut().find(|w| w.handle == handle) {
            window.rect = *rect;
        }
        Ok(())
    }
}
