use thiserror::Error;

/// A submission blocked before any request was sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Brand or processor left unselected.
    #[error("Please select a Brand and Processor")]
    IncompleteRequirements,
    /// Product name empty or price missing/invalid.
    #[error("Please enter a product name and price")]
    IncompleteInference,
}

impl ValidationError {
    /// Title of the warning dialog.
    pub fn title(self) -> &'static str {
        match self {
            Self::IncompleteRequirements => "Incomplete Requirements",
            Self::IncompleteInference => "Incomplete Input",
        }
    }
}

/// A typed value that was not accepted into the form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} must be a number, got {text:?}")]
    NotANumber { field: &'static str, text: String },
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
    #[error("{field} must be a whole number between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
}
