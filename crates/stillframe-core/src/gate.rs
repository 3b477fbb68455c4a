//! Client gallery access gate
//!
//! Client deliverables sit behind an access code. The gate itself is a small
//! locked/unlocked machine; deciding whether a code is valid (and which
//! assets it unlocks) is delegated to an [`AccessProvider`], so the
//! fixed-token demo check can be swapped for a real authorization service
//! without touching the gate or the UI.

use crate::catalog::{Catalog, Photo};
use crate::error::{PortfolioError, PortfolioResult};

/// Authorization backend for the client gallery.
///
/// `authorize` receives the normalized (trimmed, lowercased) code and
/// returns the deliverable assets on success.
pub trait AccessProvider {
    fn authorize(&self, code: &str) -> PortfolioResult<Vec<Photo>>;
}

/// Demo provider: a fixed access token unlocking a sample of the catalog.
#[derive(Debug, Clone)]
pub struct DemoAccess {
    deliverables: Vec<Photo>,
}

impl DemoAccess {
    /// The demo access code
    pub const TOKEN: &'static str = "demo";

    /// Number of catalog photos offered as sample deliverables
    const SAMPLE_SIZE: usize = 6;

    pub fn new(catalog: &Catalog) -> Self {
        Self {
            deliverables: catalog
                .photos()
                .iter()
                .take(Self::SAMPLE_SIZE)
                .cloned()
                .collect(),
        }
    }
}

impl AccessProvider for DemoAccess {
    fn authorize(&self, code: &str) -> PortfolioResult<Vec<Photo>> {
        if code == Self::TOKEN {
            Ok(self.deliverables.clone())
        } else {
            Err(PortfolioError::InvalidCode)
        }
    }
}

/// Lock state of the client gallery.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GateState {
    #[default]
    Locked,
    Unlocked(Vec<Photo>),
}

/// The access gate: lock state plus the last submission's error message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessGate {
    state: GateState,
    error: Option<String>,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit an access code.
    ///
    /// The code is normalized (trimmed, case-folded) before it reaches the
    /// provider. On success the gate unlocks and any previous error message
    /// is cleared; on failure the gate stays locked and the message is
    /// replaced with the new failure.
    pub fn submit(&mut self, provider: &impl AccessProvider, code: &str) {
        let normalized = code.trim().to_lowercase();
        match provider.authorize(&normalized) {
            Ok(assets) => {
                tracing::info!(assets = assets.len(), "client gallery unlocked");
                self.state = GateState::Unlocked(assets);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("client gallery unlock rejected");
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.state, GateState::Unlocked(_))
    }

    /// Deliverable assets, once unlocked
    pub fn deliverables(&self) -> Option<&[Photo]> {
        match &self.state {
            GateState::Locked => None,
            GateState::Unlocked(assets) => Some(assets),
        }
    }

    /// The last submission's error message, if it failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_catalog;

    fn gate_and_provider() -> (AccessGate, DemoAccess) {
        (AccessGate::new(), DemoAccess::new(&demo_catalog(1)))
    }

    #[test]
    fn test_exact_token_unlocks() {
        let (mut gate, provider) = gate_and_provider();
        gate.submit(&provider, "demo");
        assert!(gate.is_unlocked());
        assert_eq!(gate.deliverables().unwrap().len(), 6);
        assert!(gate.error().is_none());
    }

    #[test]
    fn test_token_is_case_insensitive() {
        let (mut gate, provider) = gate_and_provider();
        gate.submit(&provider, "DEMO");
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_token_is_trimmed() {
        let (mut gate, provider) = gate_and_provider();
        gate.submit(&provider, " demo ");
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_wrong_code_stays_locked_with_message() {
        let (mut gate, provider) = gate_and_provider();
        gate.submit(&provider, "wrong");
        assert!(!gate.is_unlocked());
        assert!(gate.deliverables().is_none());
        assert!(gate.error().is_some());
    }

    #[test]
    fn test_success_clears_previous_error() {
        let (mut gate, provider) = gate_and_provider();
        gate.submit(&provider, "wrong");
        assert!(gate.error().is_some());
        gate.submit(&provider, "demo");
        assert!(gate.is_unlocked());
        assert!(gate.error().is_none());
    }

    #[test]
    fn test_deliverables_are_a_catalog_prefix() {
        let catalog = demo_catalog(1);
        let provider = DemoAccess::new(&catalog);
        let mut gate = AccessGate::new();
        gate.submit(&provider, "demo");
        let ids: Vec<&str> = gate
            .deliverables()
            .unwrap()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let expected: Vec<&str> = catalog.photos()[..6].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_small_catalog_yields_fewer_deliverables() {
        let catalog = Catalog::from_photos(demo_catalog(1).photos()[..2].to_vec());
        let provider = DemoAccess::new(&catalog);
        let mut gate = AccessGate::new();
        gate.submit(&provider, "demo");
        assert_eq!(gate.deliverables().unwrap().len(), 2);
    }
}
