//! Theme state and global styles for Stillframe.
//!
//! The theme mode is plain process state: read the environment once at
//! startup via [`ThemeMode::detect`], mutate only through the app's toggle
//! entry point. The stylesheet defines both palettes with CSS custom
//! properties keyed off the root `data-theme` attribute.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

use clap::ValueEnum;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Determine the initial theme, once, at startup.
    ///
    /// Precedence: `--theme` flag, then the `STILLFRAME_THEME` environment
    /// variable, then dark.
    pub fn detect() -> Self {
        if let Some(mode) = crate::theme_override() {
            return mode;
        }
        match std::env::var("STILLFRAME_THEME") {
            Ok(value) if value.eq_ignore_ascii_case("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value for the root `data-theme` attribute
    pub fn attr(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_attr_values() {
        assert_eq!(ThemeMode::Light.attr(), "light");
        assert_eq!(ThemeMode::Dark.attr(), "dark");
    }
}
