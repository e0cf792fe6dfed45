//! Feature-schema contract shared by training and inference.
//!
//! The classifier's feature-to-weight mapping only makes sense if the feature
//! vector has the same columns in the same order at training and prediction
//! time. Both sides build their rows from this one ordered list, and the
//! dataset loader checks the CSV headers against it at startup.

/// Ordered feature columns of the model input.
pub const FEATURE_COLUMNS: [&str; 4] = ["ph", "rainfall", "temperature", "humidity"];

/// One model input row, in [`FEATURE_COLUMNS`] order.
pub type FeatureRow = [f32; FEATURE_COLUMNS.len()];

/// Target column of the training dataset.
pub const LABEL_COLUMN: &str = "label";

/// pH is never taken from the request; this constant is used for every row.
pub const DEFAULT_PH: f32 = 6.5;
/// Rainfall in mm, substituted when the request omits the field.
pub const DEFAULT_RAINFALL: f32 = 100.0;
/// Temperature in °C, substituted when the request omits the field.
pub const DEFAULT_TEMPERATURE: f32 = 25.0;
/// Relative humidity in %, substituted when the request omits the field.
pub const DEFAULT_HUMIDITY: f32 = 50.0;
