pub mod config;
pub mod desktop;
pub mod directory;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod log;
pub mod preferences;
pub mod rect;
pub mod session;
pub mod theme;

#[cfg(test)]
mod fake;

pub use desktop::{Desktop, WindowHandle};
pub use directory::{UNKNOWN_PROCESS, WindowEntry};
pub use error::{Error, Result};
pub use geometry::{GeometryError, GeometryRequest};
pub use preferences::{PreferenceStore, Preferences};
pub use rect::Rect;
pub use session::Session;
pub use theme::Theme;
