//! crop-recommender: an HTTP service that predicts a crop from soil and
//! weather features.
//!
//! At startup the service loads a CSV of labelled samples, fits a classifier
//! over four numeric columns (`ph`, `rainfall`, `temperature`, `humidity`)
//! and then serves a single prediction endpoint. The fitted model is held in
//! application state, read-only, for the lifetime of the process.

pub mod api;
pub mod dataset;
pub mod error;
pub mod model;
pub mod schema;
