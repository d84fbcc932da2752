//! Shared state types for the egui UI.

mod feedback;
mod flows;
mod forms;
mod results;

pub use feedback::*;
pub use flows::*;
pub use forms::*;
pub use results::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Weight overrides and their busy flag.
    pub weights: WeightsFormState,
    /// Requirement filters for the recommendation flow.
    pub requirements: RequirementsFormState,
    /// Last recommendation response and modal visibility.
    pub recommendations: RecommendationsState,
    pub training: TrainingState,
    /// Inference inputs and last prediction.
    pub inference: InferenceState,
    pub toasts: ToastState,
    /// Blocking dialogs waiting to be acknowledged.
    pub dialogs: DialogState,
    /// Whether the weight configuration panel is shown.
    pub show_weights_panel: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            weights: WeightsFormState::default(),
            requirements: RequirementsFormState::default(),
            recommendations: RecommendationsState::default(),
            training: TrainingState::default(),
            inference: InferenceState::default(),
            toasts: ToastState::default(),
            dialogs: DialogState::default(),
            show_weights_panel: true,
        }
    }
}

impl UiState {
    /// Busy flag owned by `flow`.
    pub fn is_busy(&self, flow: Flow) -> bool {
        match flow {
            Flow::Weights => self.weights.busy,
            Flow::Recommendations => self.recommendations.busy,
            Flow::Training => self.training.busy,
            Flow::Inference => self.inference.busy,
        }
    }

    pub(crate) fn set_busy(&mut self, flow: Flow, busy: bool) {
        let slot = match flow {
            Flow::Weights => &mut self.weights.busy,
            Flow::Recommendations => &mut self.recommendations.busy,
            Flow::Training => &mut self.training.busy,
            Flow::Inference => &mut self.inference.busy,
        };
        *slot = busy;
    }

    pub fn any_busy(&self) -> bool {
        Flow::ALL.iter().any(|flow| self.is_busy(*flow))
    }
}
