//! Loading of the training dataset.
//!
//! The dataset is a CSV read once at startup. Columns are selected by header
//! name, so extra columns and physical column order do not matter; the loader
//! only insists that every column named by the feature schema is present.

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::schema::{FeatureRow, FEATURE_COLUMNS, LABEL_COLUMN};

/// One labelled sample of the training dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct CropRecord {
    pub ph: f32,
    pub rainfall: f32,
    pub temperature: f32,
    pub humidity: f32,
    pub label: String,
}

impl CropRecord {
    /// Feature row in schema order: ph, rainfall, temperature, humidity.
    pub fn feature_row(&self) -> FeatureRow {
        [self.ph, self.rainfall, self.temperature, self.humidity]
    }
}

/// Reads the dataset from `path`, validating the header against the feature
/// schema before deserializing any rows.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<CropRecord>, Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in FEATURE_COLUMNS.into_iter().chain([LABEL_COLUMN]) {
        if !headers.iter().any(|header| header == column) {
            return Err(Error::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(records)
}
