//! Controller that owns UI state and drives the request workflows.
//!
//! Every workflow follows the same shape: validate, mark the flow busy, run one
//! request on a worker thread, then apply the outcome on the UI thread when
//! [`EguiController::tick`] drains the job channel.

mod errors;
mod feedback;
mod form;
mod inference;
mod jobs;
mod recommendations;
mod training;
mod weights;

#[cfg(test)]
mod test_support;

use std::time::Instant;

use crate::api::RecommenderClient;
use crate::config::AppSettings;
use crate::egui_app::state::{Flow, UiState};

pub use errors::{FieldError, ValidationError};

/// What happened when a flow was asked to submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// A request is now in flight.
    Started,
    /// The flow already has a request in flight; nothing was sent.
    Busy,
    /// Client-side validation failed; a warning dialog was queued.
    Rejected,
}

/// Maintains UI state and bridges it to the recommendation service.
pub struct EguiController {
    pub ui: UiState,
    client: RecommenderClient,
    jobs: jobs::ControllerJobs,
}

impl EguiController {
    /// Build a controller from loaded settings.
    pub fn new(settings: &AppSettings) -> Self {
        let mut controller = Self::with_client(RecommenderClient::new(&settings.api));
        controller.ui.show_weights_panel = settings.features.weights_panel;
        controller
    }

    /// Build a controller around an existing client.
    pub fn with_client(client: RecommenderClient) -> Self {
        tracing::info!("Recommendation service at {}", client.base_url());
        Self {
            ui: UiState::default(),
            client,
            jobs: jobs::ControllerJobs::new(),
        }
    }

    pub fn client(&self) -> &RecommenderClient {
        &self.client
    }

    /// Let worker threads wake the renderer when they finish.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.jobs.set_repaint_context(ctx);
    }

    /// Apply finished jobs and expire toasts; call once per frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.poll_background_jobs(now);
        self.ui.toasts.expire(now);
    }

    /// True while something on screen changes without user input.
    pub fn wants_periodic_repaint(&self) -> bool {
        self.ui.any_busy() || !self.ui.toasts.is_empty()
    }

    pub fn is_busy(&self, flow: Flow) -> bool {
        self.ui.is_busy(flow)
    }

    /// Acknowledge the dialog currently on screen.
    pub fn dismiss_dialog(&mut self) {
        self.ui.dialogs.dismiss();
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.ui.toasts.dismiss(id);
    }

    pub fn open_recommendations_modal(&mut self) {
        if !self.ui.recommendations.items.is_empty() {
            self.ui.recommendations.modal_open = true;
        }
    }

    pub fn close_recommendations_modal(&mut self) {
        self.ui.recommendations.modal_open = false;
    }

    /// Drain the job channel, applying every finished request.
    ///
    /// Returns how many results were applied.
    pub fn poll_background_jobs(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        while let Some(message) = self.jobs.try_recv_message() {
            applied += 1;
            match message {
                jobs::JobMessage::WeightsUpdated(result) => self.finish_weights_update(result, now),
                jobs::JobMessage::RecommendationsFetched(result) => {
                    self.finish_recommendations(result, now)
                }
                jobs::JobMessage::ModelTrained(result) => self.finish_training(result, now),
                jobs::JobMessage::InferenceFinished(result) => self.finish_inference(result, now),
            }
        }
        applied
    }

    /// Mark `flow` busy unless it already is.
    fn begin_flow(&mut self, flow: Flow) -> bool {
        if self.ui.is_busy(flow) {
            tracing::debug!(?flow, "Ignoring submit while request is in flight");
            return false;
        }
        self.ui.set_busy(flow, true);
        true
    }
}
