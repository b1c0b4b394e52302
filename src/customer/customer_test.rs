// ABOUTME: Tests for the customer actor.
// ABOUTME: Covers single submission and outcome reporting on both paths.

use std::sync::Arc;

use super::customer::Customer;
use crate::booking::WriteOutcome;
use crate::gate::WriteGate;
use crate::store::MemoryStore;

#[tokio::test]
async fn test_book_submits_exactly_once() {
    let store = MemoryStore::new();
    let gate = WriteGate::new(Arc::new(store.clone()));
    let customer = Customer::new("Andi", "Ganti Oli");

    let receipt = customer.book(&gate).await;

    assert!(receipt.is_clean());
    assert_eq!(store.connects(), 1);
    assert_eq!(store.inserts(), 1);

    let rows = store.rows().await;
    assert_eq!(rows[0].customer_name, "Andi");
    assert_eq!(rows[0].service_type, "Ganti Oli");
}

#[tokio::test]
async fn test_book_reports_failure() {
    let store = MemoryStore::new().with_connect_failure("refused");
    let gate = WriteGate::new(Arc::new(store));
    let customer = Customer::new("Budi", "Tune Up");

    let receipt = customer.book(&gate).await;

    assert!(matches!(
        receipt.outcome,
        WriteOutcome::ConnectionFailure { .. }
    ));
}

#[test]
fn test_accessors() {
    let customer = Customer::new("Citra", "Servis Rem");
    assert_eq!(customer.name(), "Citra");
    assert_eq!(customer.service(), "Servis Rem");
}
