use std::time::Instant;

use super::{EguiController, ValidationError};
use crate::api::ApiError;
use crate::egui_app::state::{FeedbackTone, Flow};

impl EguiController {
    /// Blocking warning for a submission that never reached the network.
    pub(super) fn warn_incomplete(&mut self, error: ValidationError) {
        tracing::info!("Submission blocked: {error}");
        self.ui
            .dialogs
            .show(FeedbackTone::Warning, error.title(), error.to_string());
    }

    /// Error dialog plus toast for a failed request; result slots stay untouched.
    pub(super) fn report_request_failure(&mut self, flow: Flow, error: &ApiError, now: Instant) {
        tracing::warn!(?flow, "Request failed: {error}");
        self.ui.dialogs.show(
            FeedbackTone::Error,
            flow.failure_title(),
            format!("{}{}", flow.failure_prefix(), error.user_message()),
        );
        self.ui
            .toasts
            .push(flow.failure_toast(), FeedbackTone::Error, now);
    }

    pub(super) fn toast_success(&mut self, text: impl Into<String>, now: Instant) {
        self.ui.toasts.push(text, FeedbackTone::Success, now);
    }
}
