use std::collections::BTreeMap;

use crate::api::{Criterion, InferenceResult, Requirements, WeightConfig};

/// Raw text typed into a numeric field.
///
/// The owning form keeps the last value that parsed; `invalid` marks a draft
/// that was rejected and is not reflected in that value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumericDraft {
    pub text: String,
    pub invalid: bool,
}

impl NumericDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            invalid: false,
        }
    }
}

/// Weight configuration inputs.
#[derive(Clone, Debug)]
pub struct WeightsFormState {
    /// Last accepted value per criterion; this is what gets submitted.
    pub values: WeightConfig,
    pub drafts: BTreeMap<Criterion, NumericDraft>,
    pub busy: bool,
}

impl Default for WeightsFormState {
    fn default() -> Self {
        let values = WeightConfig::default();
        let drafts = Criterion::ALL
            .into_iter()
            .map(|criterion| (criterion, NumericDraft::new(values.get(criterion).to_string())))
            .collect();
        Self {
            values,
            drafts,
            busy: false,
        }
    }
}

impl WeightsFormState {
    pub fn draft(&self, criterion: Criterion) -> &NumericDraft {
        static EMPTY: NumericDraft = NumericDraft {
            text: String::new(),
            invalid: false,
        };
        self.drafts.get(&criterion).unwrap_or(&EMPTY)
    }
}

/// Requirement filter inputs.
#[derive(Clone, Debug)]
pub struct RequirementsFormState {
    pub values: Requirements,
    pub ram_draft: NumericDraft,
}

impl Default for RequirementsFormState {
    fn default() -> Self {
        let values = Requirements::default();
        Self {
            ram_draft: NumericDraft::new(values.ram.to_string()),
            values,
        }
    }
}

/// Inference inputs plus the last prediction.
#[derive(Clone, Debug, Default)]
pub struct InferenceState {
    pub product_name: String,
    pub price_draft: NumericDraft,
    /// Last accepted price; `None` while the field is empty or never valid.
    pub price: Option<f64>,
    pub busy: bool,
    pub result: Option<InferenceResult>,
}
