// ABOUTME: Booking request and row types - what a customer submits and
// ABOUTME: what the store persists after the gate stamps a write time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booking as submitted by a customer: who, and which service.
///
/// Carries no timestamp. The write gate stamps one when the row is
/// actually written, so the recorded time is the write time rather than
/// the submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The customer placing the booking.
    pub customer_name: String,

    /// The requested service.
    pub service_type: String,
}

impl BookingRequest {
    /// Create a new booking request.
    pub fn new(customer_name: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            service_type: service_type.into(),
        }
    }

    /// Stamp the request with a write time, producing the row to persist.
    pub fn stamp(self, booked_at: DateTime<Utc>) -> BookingRow {
        BookingRow {
            customer_name: self.customer_name,
            service_type: self.service_type,
            booked_at,
        }
    }
}

/// The persisted form of a booking: one row in the store's booking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRow {
    /// The customer the row was booked for.
    pub customer_name: String,

    /// The booked service.
    pub service_type: String,

    /// When the row was written.
    pub booked_at: DateTime<Utc>,
}
