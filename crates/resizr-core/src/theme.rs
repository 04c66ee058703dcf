//! Light and dark color themes for terminal output.
//!
//! The light theme uses the Catppuccin Latte palette and the dark theme
//! Catppuccin Mocha, so colors stay readable on either background.

/// A resolved color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Catppuccin Latte.
    #[default]
    Light,
    /// Catppuccin Mocha.
    Dark,
}

/// RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parses a hex color string like "#1e66f5" or "1e66f5".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        Self::from_dark_mode(!self.is_dark())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Table header color (Blue).
    pub fn header(self) -> &'static str {
        match self {
            Self::Light => "#1e66f5",
            Self::Dark => "#89b4fa",
        }
    }

    /// Process name color (Green).
    pub fn accent(self) -> &'static str {
        match self {
            Self::Light => "#40a02b",
            Self::Dark => "#a6e3a1",
        }
    }

    /// Secondary text such as handles and pids (Overlay 1).
    pub fn muted(self) -> &'static str {
        match self {
            Self::Light => "#8c8fa1",
            Self::Dark => "#7f849c",
        }
    }

    /// Warnings and failures (Red).
    pub fn error(self) -> &'static str {
        match self {
            Self::Light => "#d20f39",
            Self::Dark => "#f38ba8",
        }
    }
}
