use anyhow::Context;

use catalog_infra::{CatalogConfig, SqliteProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = CatalogConfig::from_env().context("invalid configuration")?;

    let store = SqliteProductStore::connect(&config.db_path)
        .await
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;

    catalog_api::server::serve(&config, store).await
}
