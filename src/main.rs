use std::net::SocketAddr;

use anyhow::Context;
use crop_recommender::api::{create_router, AppState};
use crop_recommender::{dataset, model};

/// Dataset path relative to the process working directory.
const DATASET_PATH: &str = "Crop_recommendation.csv";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Startup is a hard dependency on the dataset: any failure here is fatal
    // and the listener is never bound.
    let records = dataset::load_dataset(DATASET_PATH)
        .with_context(|| format!("cannot start without training dataset '{}'", DATASET_PATH))?;
    log::info!("loaded {} training records from {}", records.len(), DATASET_PATH);

    let classifier = model::train(&records).context("failed to fit crop classifier")?;
    log::info!("fitted classifier over {} crop labels", classifier.num_labels());

    let app = create_router(AppState::new(classifier));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    log::info!("serving on http://{}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
