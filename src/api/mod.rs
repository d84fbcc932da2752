//! Client for the remote recommendation, training and inference service.

mod client;
mod error;
mod flag;
mod types;

pub use client::RecommenderClient;
pub use error::ApiError;
pub use types::{
    Brand, ConfusionMatrix, Criterion, IN_STOCK_LABEL, InferenceRequest, InferenceResult,
    Metrics, Processor, Recommendation, RecommendationResponse, Requirements, TrainingResult,
    WeightConfig,
};

/// Endpoint paths relative to the configured base URL.
pub mod endpoints {
    pub const UPDATE_WEIGHTS: &str = "/update-weights";
    pub const GET_RECOMMENDATIONS: &str = "/get-recommendations";
    pub const TRAIN_MODEL: &str = "/train-model";
    pub const INFERENCE: &str = "/inference";
}
