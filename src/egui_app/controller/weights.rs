use std::time::Instant;

use super::jobs::JobMessage;
use super::{EguiController, Submission};
use crate::api::ApiError;
use crate::egui_app::state::{FeedbackTone, Flow};

impl EguiController {
    /// Send the current weights to the service.
    pub fn submit_weights(&mut self) -> Submission {
        if !self.begin_flow(Flow::Weights) {
            return Submission::Busy;
        }
        let weights = self.ui.weights.values;
        tracing::info!(?weights, "Updating weights");
        self.jobs
            .spawn_request(Flow::Weights, self.client.clone(), move |client| {
                JobMessage::WeightsUpdated(client.update_weights(&weights))
            });
        Submission::Started
    }

    pub(super) fn finish_weights_update(&mut self, result: Result<(), ApiError>, now: Instant) {
        self.ui.set_busy(Flow::Weights, false);
        match result {
            Ok(()) => {
                tracing::info!("Weights updated");
                self.ui.dialogs.show(
                    FeedbackTone::Success,
                    "Weights Updated",
                    "Recommendation weights have been successfully updated!",
                );
                self.toast_success("Weights updated successfully!", now);
            }
            Err(err) => self.report_request_failure(Flow::Weights, &err, now),
        }
    }
}
