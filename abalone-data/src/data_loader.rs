//! Dataset loading: scans the headerless abalone CSV, applies the fixed
//! column names, and appends the derived `Age` column.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};
use polars::prelude::*;

use crate::datasource::DataSource;
use crate::schema;

/// Scan a headerless abalone CSV as a LazyFrame with the fixed nine-column
/// schema applied. Parsing is strict: a row with a non-numeric value in a
/// numeric column fails the whole load.
pub fn scan_csv(path: &str) -> Result<LazyFrame, PolarsError> {
    debug!("scanning abalone csv at {path}");
    LazyCsvReader::new(PlPath::from_str(path))
        .with_has_header(false)
        .with_schema(Some(Arc::new(schema::input_schema())))
        .finish()
}

/// Load the abalone dataset from its fixed relative location
/// (`../abalone/abalone.data`) and collect it into a DataFrame.
///
/// The result has the nine file columns plus `Age = Rings + 1.5`, with row
/// order matching the file. Each call re-reads the file; there is no cache.
pub fn load_dataset() -> Result<DataFrame> {
    load_dataset_from(&DataSource::default_location())
}

/// Load the dataset from an explicit source.
pub fn load_dataset_from(source: &DataSource) -> Result<DataFrame> {
    let df = build_lazy(source)?
        .collect()
        .map_err(|e| anyhow::anyhow!("loading {}: {}", source.path.display(), e))?;
    info!("loaded {} abalone rows", df.height());
    Ok(df)
}

/// Collect only the first n rows of the dataset (with `Age` derived).
/// Fast because .limit(n) is pushed down into the logical plan.
pub fn preview(source: &DataSource, n: u32) -> Result<DataFrame> {
    build_lazy(source)?
        .limit(n)
        .collect()
        .map_err(|e| anyhow::anyhow!("previewing {}: {}", source.path.display(), e))
}

/// Build the full lazy pipeline: scan the file, then derive `Age`.
fn build_lazy(source: &DataSource) -> Result<LazyFrame> {
    let lf = source
        .scan()
        .map_err(|e| anyhow::anyhow!("scanning {}: {}", source.path.display(), e))?;
    Ok(lf.with_columns([(col(schema::RINGS) + lit(schema::AGE_OFFSET)).alias(schema::AGE)]))
}
