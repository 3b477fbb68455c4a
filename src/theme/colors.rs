//! Color constants for the Stillframe palette.
//!
//! Quiet monochrome gallery aesthetic with a single warm accent; the same
//! values back the CSS custom properties in `styles.rs`.

#![allow(dead_code)]

// === INK (Dark backgrounds) ===
pub const INK: &str = "#101113";
pub const INK_RAISED: &str = "#17181b";
pub const INK_BORDER: &str = "#26282c";

// === PAPER (Light backgrounds) ===
pub const PAPER: &str = "#faf9f7";
pub const PAPER_RAISED: &str = "#ffffff";
pub const PAPER_BORDER: &str = "#e4e1dc";

// === TEXT ===
pub const TEXT_DARK_PRIMARY: &str = "#ececec";
pub const TEXT_DARK_MUTED: &str = "rgba(236, 236, 236, 0.6)";
pub const TEXT_LIGHT_PRIMARY: &str = "#1d1d1f";
pub const TEXT_LIGHT_MUTED: &str = "rgba(29, 29, 31, 0.6)";

// === ACCENT (Brass) ===
pub const BRASS: &str = "#b08d57";
pub const BRASS_SOFT: &str = "rgba(176, 141, 87, 0.18)";

// === SEMANTIC ===
pub const DANGER: &str = "#d4534f";
pub const SUCCESS: &str = "#5c8a5e";
