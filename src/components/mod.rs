//! UI Components for Stillframe.

mod about;
mod badge;
mod button;
mod client_portal;
mod collections;
mod contact;
mod footer;
mod hero;
pub mod icons;
mod lightbox;
mod masonry;
mod mobile_menu;
pub mod nav_header;
mod tag_tabs;

pub use about::AboutSection;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use client_portal::ClientPortal;
pub use collections::CollectionsSection;
pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use lightbox::PhotoLightbox;
pub use masonry::MasonryGrid;
pub use mobile_menu::MobileMenu;
pub use nav_header::NavHeader;
pub use tag_tabs::TagTabs;
