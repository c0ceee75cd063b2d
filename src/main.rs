use dotenvy::dotenv;
use snack_tab::config::{customers, store};
use snack_tab::core::report;
use snack_tab::errors::Result;
use snack_tab::state;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the customer roster
    let roster = customers::load_default_roster()
        .inspect_err(|e| error!("Failed to load customer roster: {e}"))?;
    info!("Roster loaded with {} customers.", roster.names().len());

    // 4. Connect to the table store
    let url = store::connection_url();
    let db = store::connect()
        .await
        .inspect(|_| info!("Connected to the table store."))
        .inspect_err(|e| error!("Failed to connect to the table store: {e}"))?;

    // Local fallback stores need their schema bootstrapped; the hosted
    // store manages its own.
    if store::is_local_store(&url) {
        store::create_tables(&db)
            .await
            .inspect_err(|e| error!("Failed to bootstrap local schema: {e}"))?;
    }

    // 5. Fetch the snapshot of both tables
    let snapshot = state::fetch_snapshot(&db)
        .await
        .inspect_err(|e| error!("Failed to fetch the store snapshot: {e}"))?;
    info!(
        "Snapshot fetched: {} products, {} ledger rows.",
        snapshot.products.len(),
        snapshot.sales.len()
    );

    // 6. Print the tab report
    let tab = report::tab_report(&snapshot, &roster);
    for debt in &tab.per_customer {
        info!("{}: {} pending", debt.name, debt.outstanding);
    }
    info!("Total outstanding: {}", tab.total_outstanding);

    for record in &tab.orphaned_sales {
        warn!(
            "Ledger row {} ('{}') no longer matches any catalog product.",
            record.id, record.description
        );
    }
    for product in &tab.negative_stock {
        warn!(
            "Product '{}' has negative stock ({}) - a stock write was lost.",
            product.name, product.stock
        );
    }

    Ok(())
}
