//! HTTP surface of the service.
//!
//! One prediction route plus a health probe:
//!
//! - `POST /predict_crop` - predict a crop from partial feature values
//! - `GET /health` - readiness probe
//!
//! CORS is enabled unconditionally for all routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::model::CropClassifier;
use crate::schema::{
    FeatureRow, DEFAULT_HUMIDITY, DEFAULT_PH, DEFAULT_RAINFALL, DEFAULT_TEMPERATURE,
};

/// Application state shared across handlers. The classifier is fitted once
/// at startup and read-only afterwards, so it is shared without locking.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<CropClassifier>,
}

impl AppState {
    pub fn new(classifier: CropClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

/// Prediction request body. Every field is optional; absent or null fields
/// fall back to the documented defaults. `ph` is intentionally not a field:
/// the endpoint never reads it from the request, and unknown keys are
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    pub temperature: Option<f32>,
    pub rainfall: Option<f32>,
    pub humidity: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_crop: String,
}

/// Builds the single feature row in schema order
/// (ph, rainfall, temperature, humidity), matching training-time order.
pub fn feature_row(request: &PredictRequest) -> FeatureRow {
    [
        DEFAULT_PH,
        request.rainfall.unwrap_or(DEFAULT_RAINFALL),
        request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        request.humidity.unwrap_or(DEFAULT_HUMIDITY),
    ]
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict_crop", post(predict_crop))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn predict_crop(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let features = feature_row(&request);
    let predicted_crop = state.classifier.predict(features).to_string();
    Json(PredictResponse { predicted_crop })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
