//! One-shot CSV ingestion into a `ProductStore`.
//!
//! Rows are matched to fields by header name and written one at a time in
//! file order, verbatim. The first read or write error stops the run; rows
//! already written stay written.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use catalog_core::ProductId;
use catalog_products::NewProduct;

use crate::product_store::{ProductStore, StoreError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write product: {0}")]
    Store(#[from] StoreError),
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub rows: usize,
    pub first_id: Option<ProductId>,
    pub last_id: Option<ProductId>,
}

impl LoadReport {
    fn record(&mut self, id: ProductId) {
        self.rows += 1;
        self.first_id.get_or_insert(id);
        self.last_id = Some(id);
    }
}

/// Load every row of the CSV file at `path` into `store`.
pub async fn load_csv<S>(path: impl AsRef<Path>, store: &S) -> Result<LoadReport, LoadError>
where
    S: ProductStore + ?Sized,
{
    let path = path.as_ref();
    let reader = csv_reader().from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "loading products from CSV");
    load_records(reader, store).await
}

/// Same as [`load_csv`] over any byte source.
pub async fn load_from_reader<R, S>(source: R, store: &S) -> Result<LoadReport, LoadError>
where
    R: Read,
    S: ProductStore + ?Sized,
{
    load_records(csv_reader().from_reader(source), store).await
}

// Headers required; short rows tolerated (missing fields become "").
fn csv_reader() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

async fn load_records<R, S>(mut reader: csv::Reader<R>, store: &S) -> Result<LoadReport, LoadError>
where
    R: Read,
    S: ProductStore + ?Sized,
{
    let headers = reader.headers()?.clone();
    let mut report = LoadReport::default();
    let mut record = csv::StringRecord::new();

    while reader.read_record(&mut record)? {
        // Short rows: pad so the missing trailing fields read as "".
        for _ in record.len()..headers.len() {
            record.push_field("");
        }
        let row: NewProduct = record.deserialize(Some(&headers))?;
        let id = store.insert(&row).await?;
        tracing::trace!(%id, name = %row.name, "inserted product");
        report.record(id);
    }

    tracing::info!(
        rows = report.rows,
        first_id = report.first_id.map(|id| id.get()),
        last_id = report.last_id.map(|id| id.get()),
        "CSV load finished"
    );
    Ok(report)
}
