use crate::api::{Metrics, Recommendation, TrainingResult};

/// Recommendation results and the modal that shows them.
#[derive(Clone, Debug, Default)]
pub struct RecommendationsState {
    pub busy: bool,
    /// Rows in the order the service returned them.
    pub items: Vec<Recommendation>,
    pub metrics: Option<Metrics>,
    pub modal_open: bool,
}

/// Outcome of the last successful training run.
#[derive(Clone, Debug, Default)]
pub struct TrainingState {
    pub busy: bool,
    pub result: Option<TrainingResult>,
}
