use super::super::test_support::offline_controller;
use super::super::{Submission, ValidationError};
use crate::api::{Brand, Processor};
use crate::egui_app::state::{FeedbackTone, Flow};

#[test]
fn missing_brand_blocks_recommendations() {
    let mut controller = offline_controller();
    controller.set_processor(Some(Processor::I5));

    assert_eq!(controller.submit_recommendations(), Submission::Rejected);

    assert!(!controller.is_busy(Flow::Recommendations));
    let dialog = controller.ui.dialogs.current().unwrap();
    assert_eq!(dialog.tone, FeedbackTone::Warning);
    assert_eq!(dialog.title, "Incomplete Requirements");
    assert_eq!(dialog.text, "Please select a Brand and Processor");
    assert!(controller.ui.toasts.is_empty());
}

#[test]
fn missing_processor_blocks_recommendations() {
    let mut controller = offline_controller();
    controller.set_brand(Some(Brand::Asus));

    assert_eq!(controller.submit_recommendations(), Submission::Rejected);
    assert_eq!(
        controller.ui.dialogs.current().map(|dialog| dialog.text.as_str()),
        Some(ValidationError::IncompleteRequirements.to_string().as_str())
    );
}

#[test]
fn inference_requires_name_and_price() {
    let mut controller = offline_controller();
    controller.set_price_text("100").unwrap();
    assert_eq!(controller.submit_inference(), Submission::Rejected);

    controller.set_product_name("   ");
    assert_eq!(controller.submit_inference(), Submission::Rejected);

    controller.set_product_name("Aspire 5");
    controller.set_price_text("").unwrap();
    assert_eq!(controller.submit_inference(), Submission::Rejected);

    controller.set_price_text("12").unwrap();
    let _ = controller.set_price_text("twelve");
    assert_eq!(controller.submit_inference(), Submission::Rejected);

    assert_eq!(controller.ui.dialogs.len(), 4);
    assert_eq!(
        controller.ui.dialogs.current().unwrap().title,
        ValidationError::IncompleteInference.title()
    );
    assert!(!controller.is_busy(Flow::Inference));
}
