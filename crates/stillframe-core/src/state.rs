//! Page-level UI state machines
//!
//! The lightbox and the disclosure flags (mobile menu) are independent
//! machines composed at the page level - opening the menu does not touch the
//! lightbox and vice versa. All transitions are synchronous and run to
//! completion inside the UI event loop.

use crate::catalog::Photo;

/// Lightbox state: either closed, or showing one enlarged photo.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lightbox {
    /// No photo enlarged
    #[default]
    Closed,
    /// A specific photo enlarged over the page
    Open(Photo),
}

impl Lightbox {
    /// Open the lightbox on `photo`, from any state
    pub fn select(&mut self, photo: Photo) {
        *self = Lightbox::Open(photo);
    }

    /// Close the lightbox. Dismissing an already-closed lightbox is a no-op.
    pub fn dismiss(&mut self) {
        *self = Lightbox::Closed;
    }

    /// The photo currently shown, if any
    pub fn photo(&self) -> Option<&Photo> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open(photo) => Some(photo),
        }
    }

    /// Whether a photo is currently shown
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}

/// A single open/closed flag (mobile menu, expandable panels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tag;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            src: format!("https://photos.example/{id}.jpg"),
            width: 1600,
            height: 1067,
            title: None,
            tags: vec![Tag::Street],
            year: 2024,
            location: None,
        }
    }

    #[test]
    fn test_select_then_dismiss_returns_to_closed() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.is_open());

        lightbox.select(photo("a"));
        assert_eq!(lightbox.photo().unwrap().id, "a");

        lightbox.dismiss();
        assert_eq!(lightbox, Lightbox::Closed);
        assert!(lightbox.photo().is_none());
    }

    #[test]
    fn test_select_from_open_replaces_photo() {
        let mut lightbox = Lightbox::default();
        lightbox.select(photo("a"));
        lightbox.select(photo("b"));
        assert_eq!(lightbox.photo().unwrap().id, "b");
    }

    #[test]
    fn test_dismiss_from_closed_is_a_noop() {
        let mut lightbox = Lightbox::default();
        lightbox.dismiss();
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn test_disclosure_toggle() {
        let mut menu = Disclosure::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.open();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_machines_are_independent() {
        let mut lightbox = Lightbox::default();
        let mut menu = Disclosure::default();

        menu.open();
        lightbox.select(photo("a"));
        menu.close();

        // Closing the menu leaves the lightbox open
        assert!(lightbox.is_open());
    }
}
