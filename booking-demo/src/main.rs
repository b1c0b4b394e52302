// ABOUTME: Workshop booking demo - three customers race one write gate.
// ABOUTME: Demonstrates wiring a store, gate, and fleet with bookgate.

use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;
use tracing_subscriber::EnvFilter;

use bookgate::prelude::*;

// ============================================================================
// Store selection
// ============================================================================

/// Use the HTTP store when an address is configured, otherwise fall back
/// to an in-process store so the demo runs standalone.
fn build_store() -> Result<Arc<dyn StoreConnector>> {
    match std::env::var(bookgate::store::ENV_ADDRESS) {
        Ok(_) => {
            let store = HttpStore::from_env()?;
            tracing::info!("using HTTP store");
            Ok(Arc::new(store))
        }
        Err(_) => {
            tracing::info!("no store address configured, using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

// ============================================================================
// Demo
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let gate = Arc::new(WriteGate::new(build_store()?));
    let fleet = Fleet::new(gate);

    let customers = vec![
        Customer::new("Andi", "Ganti Oli"),
        Customer::new("Budi", "Tune Up"),
        Customer::new("Citra", "Servis Rem"),
    ];
    let names: Vec<String> = customers.iter().map(|c| c.name().to_string()).collect();

    // dispatch returns as soon as the tasks are spawned; the customers are
    // still racing at this point. The join below is this caller's choice.
    let handles = fleet.dispatch(customers);
    let receipts = join_all(handles).await;

    for (name, receipt) in names.iter().zip(receipts) {
        match receipt {
            Ok(receipt) => println!("{}: {}", name, receipt),
            Err(e) => println!("{}: task failed: {}", name, e),
        }
    }

    Ok(())
}
