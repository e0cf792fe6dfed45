//! Model trainer and fitted classifier.
//!
//! The classifier is an ensemble of gradient-boosted decision trees, one
//! binary model per crop label (one-vs-rest). Labels are fitted in sorted
//! order and every model trains on the full dataset with sampling ratios of
//! 1.0, so fitting the same records twice yields the same classifier.

use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use crate::dataset::CropRecord;
use crate::error::Error;
use crate::schema::{FeatureRow, FEATURE_COLUMNS};

/// A fitted crop classifier, immutable after construction.
pub struct CropClassifier {
    per_label: Vec<(String, GBDT)>,
}

fn binary_config() -> Config {
    let mut config = Config::new();
    config.set_feature_size(FEATURE_COLUMNS.len());
    config.set_max_depth(4);
    config.set_iterations(60);
    config.set_shrinkage(0.1);
    // Full sampling: no randomness during fitting.
    config.set_data_sample_ratio(1.0);
    config.set_feature_sample_ratio(1.0);
    config.set_loss("LogLikelyhood");
    config
}

/// Fits one classifier over the full dataset. No train/test split, no
/// hyperparameter search.
pub fn train(records: &[CropRecord]) -> Result<CropClassifier, Error> {
    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut labels: Vec<String> = records.iter().map(|r| r.label.clone()).collect();
    labels.sort();
    labels.dedup();

    let mut per_label = Vec::with_capacity(labels.len());
    for label in labels {
        // LogLikelyhood expects targets in {-1, 1}.
        let mut train_data: DataVec = records
            .iter()
            .map(|record| {
                let target = if record.label == label { 1.0 } else { -1.0 };
                Data::new_training_data(record.feature_row().to_vec(), 1.0, target, None)
            })
            .collect();

        let mut gbdt = GBDT::new(&binary_config());
        gbdt.fit(&mut train_data);
        per_label.push((label, gbdt));
    }

    Ok(CropClassifier { per_label })
}

impl CropClassifier {
    /// Predicts the crop label for one feature row in schema order.
    pub fn predict(&self, features: FeatureRow) -> &str {
        let sample = vec![Data::new_test_data(features.to_vec(), None)];

        let mut best_label = "";
        let mut best_score = f32::NEG_INFINITY;
        for (label, model) in &self.per_label {
            let score = model.predict(&sample)[0];
            if score > best_score {
                best_score = score;
                best_label = label;
            }
        }
        best_label
    }

    /// Distinct labels seen at training time, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.per_label.iter().map(|(label, _)| label.as_str())
    }

    pub fn num_labels(&self) -> usize {
        self.per_label.len()
    }
}
