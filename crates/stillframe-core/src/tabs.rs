//! Generic single-select tab state
//!
//! A `TabStrip` holds exactly one selected value from a fixed domain. The
//! gallery's tag selector is a `TabStrip<Tag>`, but nothing here is
//! tag-specific. There is no multi-select and no empty selection: the domain
//! always has a valid default (its first element).

use crate::error::{PortfolioError, PortfolioResult};

/// Single-select state over a fixed domain of option values.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStrip<T> {
    domain: Vec<T>,
    selected: usize,
}

impl<T: Clone + PartialEq + std::fmt::Debug> TabStrip<T> {
    /// Create a tab strip over `domain`, selecting its first element.
    ///
    /// # Panics
    ///
    /// Panics if `domain` is empty - a selector with nothing to select is a
    /// construction error, not a runtime condition.
    pub fn new(domain: Vec<T>) -> Self {
        assert!(!domain.is_empty(), "tab domain must not be empty");
        Self { domain, selected: 0 }
    }

    /// The full option domain, in display order
    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// The currently selected value
    pub fn selected(&self) -> &T {
        &self.domain[self.selected]
    }

    /// Whether `value` is the current selection
    pub fn is_selected(&self, value: &T) -> bool {
        self.selected() == value
    }

    /// Select `value`, replacing the current selection.
    ///
    /// A value outside the domain is a caller error: the selection is left
    /// unchanged, an `OutOfDomainSelection` error is returned, and debug
    /// builds assert so the mistake surfaces during development.
    pub fn select(&mut self, value: &T) -> PortfolioResult<()> {
        match self.domain.iter().position(|v| v == value) {
            Some(index) => {
                self.selected = index;
                Ok(())
            }
            None => {
                debug_assert!(false, "tab selection outside domain: {value:?}");
                Err(PortfolioError::OutOfDomainSelection(format!("{value:?}")))
            }
        }
    }
}
