#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use stillframe_core::{demo_catalog, Catalog, DEFAULT_SEED};

use theme::ThemeMode;

/// Global catalog, loaded once before launch
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Theme forced from the command line, if any
static THEME_OVERRIDE: OnceLock<Option<ThemeMode>> = OnceLock::new();

/// Get the catalog loaded at startup
pub fn catalog() -> Catalog {
    CATALOG.get().cloned().unwrap_or_default()
}

/// Get the theme forced via --theme (if set)
pub fn theme_override() -> Option<ThemeMode> {
    THEME_OVERRIDE.get().copied().flatten()
}

/// Stillframe - client-rendered photography portfolio
#[derive(Parser, Debug)]
#[command(name = "stillframe-desktop")]
#[command(about = "Stillframe - photography portfolio with galleries, collections, and a client area")]
struct Args {
    /// Load the catalog from a JSON file (an array of photo records)
    /// instead of generating the demo catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for the demo catalog generator (same seed, same gallery)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Initial theme (overrides STILLFRAME_THEME and the default)
    #[arg(short, long, value_enum)]
    theme: Option<ThemeMode>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => demo_catalog(args.seed.unwrap_or(DEFAULT_SEED)),
    };

    tracing::info!(
        photos = catalog.len(),
        source = %args
            .catalog
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "demo".to_string()),
        "catalog loaded"
    );

    // Store catalog and theme override globally
    let _ = CATALOG.set(catalog);
    let _ = THEME_OVERRIDE.set(args.theme);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Stillframe Photography")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
