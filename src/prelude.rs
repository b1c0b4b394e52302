// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use bookgate::prelude::*;` to get started quickly.

pub use crate::booking::{BookingRequest, BookingRow, SubmitReceipt, WriteOutcome};
pub use crate::customer::Customer;
pub use crate::error::StoreError;
pub use crate::fleet::Fleet;
pub use crate::gate::WriteGate;
pub use crate::store::{HttpStore, MemoryStore, StoreConfig, StoreConnection, StoreConnector};
