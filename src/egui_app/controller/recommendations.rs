use std::time::Instant;

use super::jobs::JobMessage;
use super::{EguiController, Submission, ValidationError};
use crate::api::{ApiError, RecommendationResponse};
use crate::egui_app::state::Flow;

impl EguiController {
    /// Ask the service for candidates matching the current requirements.
    ///
    /// Brand and processor must be selected; otherwise a warning is shown and
    /// nothing is sent.
    pub fn submit_recommendations(&mut self) -> Submission {
        if self.ui.is_busy(Flow::Recommendations) {
            return Submission::Busy;
        }
        if !self.ui.requirements.values.is_complete() {
            self.warn_incomplete(ValidationError::IncompleteRequirements);
            return Submission::Rejected;
        }
        if !self.begin_flow(Flow::Recommendations) {
            return Submission::Busy;
        }
        let requirements = self.ui.requirements.values.clone();
        tracing::info!(?requirements, "Fetching recommendations");
        self.jobs.spawn_request(
            Flow::Recommendations,
            self.client.clone(),
            move |client| JobMessage::RecommendationsFetched(client.get_recommendations(&requirements)),
        );
        Submission::Started
    }

    pub(super) fn finish_recommendations(
        &mut self,
        result: Result<RecommendationResponse, ApiError>,
        now: Instant,
    ) {
        self.ui.set_busy(Flow::Recommendations, false);
        match result {
            Ok(response) => {
                let count = response.recommendations.len();
                tracing::info!(count, "Recommendations received");
                self.ui.recommendations.items = response.recommendations;
                self.ui.recommendations.metrics = response.metrics;
                self.toast_success(format!("Found {count} recommendations"), now);
                self.ui.recommendations.modal_open = true;
            }
            Err(err) => self.report_request_failure(Flow::Recommendations, &err, now),
        }
    }
}
