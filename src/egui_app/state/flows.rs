/// The independent request workflows the window can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flow {
    /// `POST /update-weights`.
    Weights,
    /// `POST /get-recommendations`.
    Recommendations,
    /// `POST /train-model`.
    Training,
    /// `POST /inference`.
    Inference,
}

impl Flow {
    pub const ALL: [Flow; 4] = [
        Flow::Weights,
        Flow::Recommendations,
        Flow::Training,
        Flow::Inference,
    ];

    /// Trigger button label while idle.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Weights => "Update Weights",
            Self::Recommendations => "Get Recommendations",
            Self::Training => "Train Model",
            Self::Inference => "Predict Availability",
        }
    }

    /// Trigger button label while the request is in flight.
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Weights => "Updating...",
            Self::Recommendations => "Searching...",
            Self::Training => "Training...",
            Self::Inference => "Predicting...",
        }
    }

    pub fn button_label(self, busy: bool) -> &'static str {
        if busy {
            self.busy_label()
        } else {
            self.action_label()
        }
    }

    pub(crate) fn failure_title(self) -> &'static str {
        match self {
            Self::Weights => "Update Failed",
            Self::Recommendations => "Recommendation Error",
            Self::Training => "Training Failed",
            Self::Inference => "Inference Failed",
        }
    }

    /// Dialog text prefix; the error message is appended.
    pub(crate) fn failure_prefix(self) -> &'static str {
        match self {
            Self::Weights => "Failed to update weights: ",
            Self::Recommendations => "Failed to get recommendations: ",
            Self::Training => "Failed to train model: ",
            Self::Inference => "Failed to get prediction: ",
        }
    }

    pub(crate) fn failure_toast(self) -> &'static str {
        match self {
            Self::Weights => "Failed to update weights",
            Self::Recommendations => "Failed to fetch recommendations",
            Self::Training => "Failed to train model",
            Self::Inference => "Failed to get prediction",
        }
    }
}
