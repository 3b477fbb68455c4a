//! Contact inquiry collaborator seam
//!
//! The core neither validates nor transmits inquiry fields; delivery belongs
//! to an external mail/forms endpoint behind the [`ContactSink`] trait. The
//! demo sink records the inquiry in the log and reports success so the UI
//! flow can be exercised without a backend.

use crate::error::{PortfolioError, PortfolioResult};

/// A contact-form inquiry, exactly as entered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement that an inquiry was handed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sent;

/// Delivery backend for contact inquiries.
pub trait ContactSink {
    fn send(&self, request: &ContactRequest) -> PortfolioResult<Sent>;
}

/// Demo sink: logs the inquiry instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn send(&self, request: &ContactRequest) -> PortfolioResult<Sent> {
        if request.message.trim().is_empty() {
            return Err(PortfolioError::Submission(
                "message is empty".to_string(),
            ));
        }
        tracing::info!(
            name = %request.name,
            email = %request.email,
            "contact inquiry received"
        );
        Ok(Sent)
    }
}
