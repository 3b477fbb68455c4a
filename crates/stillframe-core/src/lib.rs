//! Stillframe Core Library
//!
//! Catalog, filtering, and gallery state machines for the Stillframe
//! photography portfolio.
//!
//! ## Overview
//!
//! The portfolio is fully client-rendered: a fixed photo catalog is loaded
//! once at startup and every view - the filterable gallery, the thematic
//! collections, the client deliverables - is computed from it on demand.
//! This crate holds that computation plus the small UI state machines
//! (tab selection, lightbox, access gate) and has no UI dependency, so the
//! whole core is testable headless.
//!
//! ## Core Principles
//!
//! - **Pure views**: filtering and collection membership are pure functions
//!   of (catalog, inputs); catalog order is always preserved
//! - **Deterministic demo data**: the placeholder catalog is generated from
//!   an explicit seed, never ambient randomness
//! - **Trait seams for collaborators**: access authorization and contact
//!   delivery are traits, with demo implementations standing in for the real
//!   external services
//!
//! ## Quick Start
//!
//! ```
//! use stillframe_core::{demo_catalog, GalleryFilter, Tag, DEFAULT_SEED};
//!
//! let catalog = demo_catalog(DEFAULT_SEED);
//!
//! let mut filter = GalleryFilter::new();
//! filter.select_tag(Tag::Portraits).unwrap();
//! filter.set_query("tokyo");
//!
//! for photo in filter.photos(&catalog) {
//!     println!("{}: {}", photo.id, photo.title_str());
//! }
//! ```

pub mod catalog;
pub mod collection;
pub mod contact;
pub mod demo;
pub mod error;
pub mod filter;
pub mod gate;
pub mod state;
pub mod tabs;

// Re-exports
pub use catalog::{Catalog, Photo, Tag};
pub use collection::{Collection, COLLECTIONS};
pub use contact::{ContactRequest, ContactSink, LogSink, Sent};
pub use demo::{demo_catalog, DEFAULT_SEED};
pub use error::{PortfolioError, PortfolioResult};
pub use filter::{visible, GalleryFilter};
pub use gate::{AccessGate, AccessProvider, DemoAccess, GateState};
pub use state::{Disclosure, Lightbox};
pub use tabs::TabStrip;
