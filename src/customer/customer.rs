// ABOUTME: A customer - identity plus requested service - that submits one
// ABOUTME: booking through a shared write gate and reports the outcome.

use crate::booking::{BookingRequest, SubmitReceipt};
use crate::gate::WriteGate;

/// One customer's single booking attempt.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    service: String,
}

impl Customer {
    /// Create a customer requesting a service.
    pub fn new(name: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service: service.into(),
        }
    }

    /// The customer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The requested service.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Submit this customer's booking through the gate.
    ///
    /// Calls `submit` exactly once and emits a status event for the start
    /// of the submission and for the terminal outcome.
    pub async fn book(&self, gate: &WriteGate) -> SubmitReceipt {
        tracing::info!(customer = %self.name, service = %self.service, "submitting booking");

        let receipt = gate
            .submit(BookingRequest::new(&self.name, &self.service))
            .await;

        if receipt.wrote() {
            tracing::info!(customer = %self.name, receipt = %receipt, "booking saved");
        } else {
            tracing::error!(customer = %self.name, receipt = %receipt, "booking not saved");
        }

        receipt
    }
}
