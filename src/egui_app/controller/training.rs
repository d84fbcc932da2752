use std::time::Instant;

use super::jobs::JobMessage;
use super::{EguiController, Submission};
use crate::api::{ApiError, TrainingResult};
use crate::egui_app::state::Flow;
use crate::format;

impl EguiController {
    /// Retrain the remote model.
    pub fn submit_training(&mut self) -> Submission {
        if !self.begin_flow(Flow::Training) {
            return Submission::Busy;
        }
        tracing::info!("Requesting model training");
        self.jobs
            .spawn_request(Flow::Training, self.client.clone(), |client| {
                JobMessage::ModelTrained(client.train_model())
            });
        Submission::Started
    }

    pub(super) fn finish_training(&mut self, result: Result<TrainingResult, ApiError>, now: Instant) {
        self.ui.set_busy(Flow::Training, false);
        match result {
            Ok(outcome) => {
                tracing::info!(
                    accuracy = outcome.accuracy,
                    matrix = ?outcome.confusion_matrix.0,
                    "Model trained"
                );
                let toast = format!(
                    "Model trained (accuracy {})",
                    format::accuracy_percent(outcome.accuracy)
                );
                self.ui.training.result = Some(outcome);
                self.toast_success(toast, now);
            }
            Err(err) => self.report_request_failure(Flow::Training, &err, now),
        }
    }
}
