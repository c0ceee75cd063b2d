//! Application state - the in-memory snapshot of both remote tables.
//!
//! The snapshot is a cache, nothing more: it is refetched in full after
//! every mutating call instead of being patched optimistically, so views
//! always reflect what the store acknowledged. Ownership is explicit - a
//! top-level controller holds the `Arc` and hands references down; there
//! are no ambient globals.

use crate::core::{catalog, ledger};
use crate::entities::{product, sale};
use crate::errors::Result;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// In-memory copies of the catalog and the ledger, as last fetched.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Catalog rows, ordered by name
    pub products: Vec<product::Model>,
    /// Ledger rows, newest first
    pub sales: Vec<sale::Model>,
}

/// Fetches a fresh snapshot of both tables.
///
/// # Errors
/// Returns an error if either read fails; a partial snapshot is never
/// returned.
pub async fn fetch_snapshot(db: &DatabaseConnection) -> Result<Snapshot> {
    let products = catalog::get_all_products(db).await?;
    let sales = ledger::get_all_sales(db).await?;
    Ok(Snapshot { products, sales })
}

/// Replaces the shared snapshot with a fresh fetch. Call after every
/// mutating operation.
///
/// # Errors
/// Returns an error if the fetch fails; the previous snapshot is kept in
/// that case.
pub async fn refresh_snapshot(
    db: &DatabaseConnection,
    cache: &Arc<RwLock<Snapshot>>,
) -> Result<()> {
    let snapshot = fetch_snapshot(db).await?;

    let mut writer = cache.write().await;
    *writer = snapshot;
    info!(
        "snapshot refreshed: {} products, {} sales",
        writer.products.len(),
        writer.sales.len()
    );
    Ok(())
}
