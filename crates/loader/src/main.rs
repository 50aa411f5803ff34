//! One-shot CSV loader.
//!
//! Takes no arguments: reads `CATALOG_CSV_PATH` (default
//! `./UITeam-SyntheticData.csv`) into `CATALOG_DB_PATH` (default
//! `./syntheticData.db`), creating the table if needed. Any error ends the
//! run with a non-zero exit status.

use anyhow::Context;

use catalog_infra::{load_csv, CatalogConfig, SqliteProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = CatalogConfig::from_env().context("invalid configuration")?;

    let store = SqliteProductStore::connect(&config.db_path)
        .await
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;
    store
        .ensure_schema()
        .await
        .context("failed to create products table")?;

    let report = load_csv(&config.csv_path, &store)
        .await
        .with_context(|| format!("failed to load {}", config.csv_path.display()))?;

    store.close().await;

    tracing::info!(
        rows = report.rows,
        db = %config.db_path.display(),
        "CSV file successfully processed and database populated."
    );
    Ok(())
}
