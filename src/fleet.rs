// ABOUTME: Fleet dispatcher - spawns one task per customer and hands back
// ABOUTME: the join handles without waiting for any of them.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::booking::SubmitReceipt;
use crate::customer::Customer;
use crate::gate::WriteGate;

/// Dispatches a set of customers against one shared write gate.
pub struct Fleet {
    gate: Arc<WriteGate>,
}

impl Fleet {
    /// Create a fleet dispatching through the given gate.
    pub fn new(gate: Arc<WriteGate>) -> Self {
        Self { gate }
    }

    /// Spawn one task per customer and return immediately.
    ///
    /// There is no completion barrier: the customers keep racing after
    /// this returns, and dropping a handle detaches its task. A caller
    /// that wants the receipts awaits the handles itself.
    pub fn dispatch(&self, customers: Vec<Customer>) -> Vec<JoinHandle<SubmitReceipt>> {
        customers
            .into_iter()
            .map(|customer| {
                let gate = self.gate.clone();
                tokio::spawn(async move { customer.book(&gate).await })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::future::join_all;

    use super::*;
    use crate::store::MemoryStore;

    fn fleet_over(store: &MemoryStore) -> Fleet {
        Fleet::new(Arc::new(WriteGate::new(Arc::new(store.clone()))))
    }

    fn three_customers() -> Vec<Customer> {
        vec![
            Customer::new("Andi", "Ganti Oli"),
            Customer::new("Budi", "Tune Up"),
            Customer::new("Citra", "Servis Rem"),
        ]
    }

    #[tokio::test]
    async fn test_dispatch_returns_before_completion() {
        // Every write takes 200ms; dispatching three customers must not.
        let store = MemoryStore::new().with_insert_delay(Duration::from_millis(200));
        let fleet = fleet_over(&store);

        let started = std::time::Instant::now();
        let handles = fleet.dispatch(three_customers());
        assert!(
            started.elapsed() < Duration::from_millis(100),
            "dispatch waited for the customers to finish"
        );

        let receipts = join_all(handles).await;
        assert_eq!(receipts.len(), 3);
        for receipt in receipts {
            assert!(receipt.unwrap().is_clean());
        }
    }

    #[tokio::test]
    async fn test_dropped_handles_detach_but_tasks_finish() {
        let store = MemoryStore::new();
        let fleet = fleet_over(&store);

        drop(fleet.dispatch(three_customers()));

        // The tasks were detached, not cancelled.
        let deadline = std::time::Instant::now() + Duration::from_secs(1);
        while store.rows().await.len() < 3 {
            assert!(
                std::time::Instant::now() < deadline,
                "detached customers never finished"
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_all_customers_land_exactly_once() {
        let store = MemoryStore::new();
        let fleet = fleet_over(&store);

        join_all(fleet.dispatch(three_customers())).await;

        let mut names: Vec<String> = store
            .rows()
            .await
            .into_iter()
            .map(|row| row.customer_name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Andi", "Budi", "Citra"]);
    }
}
