use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::api::{
    ApiError, InferenceResult, RecommendationResponse, RecommenderClient, TrainingResult,
};
use crate::egui_app::state::Flow;

/// Outcome of a worker thread, delivered to the UI thread.
#[derive(Debug)]
pub(crate) enum JobMessage {
    WeightsUpdated(Result<(), ApiError>),
    RecommendationsFetched(Result<RecommendationResponse, ApiError>),
    ModelTrained(Result<TrainingResult, ApiError>),
    InferenceFinished(Result<InferenceResult, ApiError>),
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    repaint: Option<egui::Context>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            repaint: None,
        }
    }

    pub(super) fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub(super) fn try_recv_message(&self) -> Option<JobMessage> {
        match self.message_rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Run one request on a fresh thread and post its outcome back.
    ///
    /// The thread is detached; there is no cancellation.
    pub(super) fn spawn_request<F>(&self, flow: Flow, client: RecommenderClient, request: F)
    where
        F: FnOnce(&RecommenderClient) -> JobMessage + Send + 'static,
    {
        let tx = self.message_tx.clone();
        let repaint = self.repaint.clone();
        let spawned = thread::Builder::new()
            .name(format!("pcrec-{flow:?}").to_ascii_lowercase())
            .spawn(move || {
                let message = request(&client);
                let _ = tx.send(message);
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            });
        if let Err(err) = spawned {
            tracing::error!(?flow, "Failed to spawn request worker: {err}");
            let _ = self.message_tx.send(spawn_failure(flow, err.to_string()));
        }
    }
}

/// Report a worker that never started as a failed request for its flow.
fn spawn_failure(flow: Flow, reason: String) -> JobMessage {
    let err = ApiError::Transport(format!("could not start request: {reason}"));
    match flow {
        Flow::Weights => JobMessage::WeightsUpdated(Err(err)),
        Flow::Recommendations => JobMessage::RecommendationsFetched(Err(err)),
        Flow::Training => JobMessage::ModelTrained(Err(err)),
        Flow::Inference => JobMessage::InferenceFinished(Err(err)),
    }
}
