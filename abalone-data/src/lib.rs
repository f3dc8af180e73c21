//! Loading helpers for the UCI abalone dataset.
//!
//! The dataset ships as a headerless comma-separated file with nine fields
//! per row. [`data_loader::load_dataset`] reads it from its fixed relative
//! location, names the columns, and appends the derived `Age` column
//! (`Rings + 1.5`).

pub mod data_loader;
pub mod datasource;
pub mod schema;
