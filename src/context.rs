//! Shared context for the Stillframe app.
//!
//! Provides the photo catalog and the theme mode to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let catalog = use_catalog();
//! let photos = catalog().photos().to_vec();
//! ```

use dioxus::prelude::*;
use stillframe_core::Catalog;

use crate::theme::ThemeMode;

/// Hook to access the photo catalog from context.
///
/// The catalog is fixed at startup; the signal exists so a future
/// catalog-reload feature slots in without touching call sites.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

/// Hook to access the current theme mode from context.
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

/// Flip between light and dark.
///
/// The single mutation entry point for theme state - components never write
/// the theme signal directly.
pub fn toggle_theme(mut theme: Signal<ThemeMode>) {
    let next = theme().toggled();
    tracing::debug!(?next, "theme toggled");
    theme.set(next);
}
