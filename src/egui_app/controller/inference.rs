use std::time::Instant;

use super::jobs::JobMessage;
use super::{EguiController, Submission, ValidationError};
use crate::api::{ApiError, InferenceRequest, InferenceResult};
use crate::egui_app::state::Flow;

impl EguiController {
    /// Request an availability prediction for the entered product.
    pub fn submit_inference(&mut self) -> Submission {
        if self.ui.is_busy(Flow::Inference) {
            return Submission::Busy;
        }
        let Some(request) = self.inference_request() else {
            self.warn_incomplete(ValidationError::IncompleteInference);
            return Submission::Rejected;
        };
        if !self.begin_flow(Flow::Inference) {
            return Submission::Busy;
        }
        tracing::info!(?request, "Requesting availability prediction");
        self.jobs
            .spawn_request(Flow::Inference, self.client.clone(), move |client| {
                JobMessage::InferenceFinished(client.run_inference(&request))
            });
        Submission::Started
    }

    /// Inputs ready to send, or `None` when a required field is missing.
    fn inference_request(&self) -> Option<InferenceRequest> {
        let state = &self.ui.inference;
        let product_name = state.product_name.trim();
        if product_name.is_empty() || state.price_draft.invalid {
            return None;
        }
        Some(InferenceRequest {
            product_name: product_name.to_string(),
            price: state.price?,
        })
    }

    pub(super) fn finish_inference(
        &mut self,
        result: Result<InferenceResult, ApiError>,
        now: Instant,
    ) {
        self.ui.set_busy(Flow::Inference, false);
        match result {
            Ok(outcome) => {
                tracing::info!(prediction = %outcome.prediction, "Prediction received");
                let toast = format!("Prediction: {}", outcome.prediction);
                self.ui.inference.result = Some(outcome);
                self.toast_success(toast, now);
            }
            Err(err) => self.report_request_failure(Flow::Inference, &err, now),
        }
    }
}
