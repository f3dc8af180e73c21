use std::path::PathBuf;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data_loader;

/// Location of the abalone flat file.
/// Immutable reference to the source — every load re-reads it from disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataSource {
    pub path: PathBuf,
}

impl DataSource {
    /// The dataset's fixed location: an `abalone` directory one level up
    /// from the caller's working directory.
    pub fn default_location() -> Self {
        Self {
            path: PathBuf::from("../abalone/abalone.data"),
        }
    }

    /// Create a DataSource for an explicit file path.
    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Scan the source as a LazyFrame (lazy evaluation — no data is loaded yet).
    pub fn scan(&self) -> Result<LazyFrame, PolarsError> {
        data_loader::scan_csv(self.path.to_str().unwrap_or_default())
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::default_location()
    }
}
