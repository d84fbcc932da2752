use super::super::Submission;
use super::super::test_support::{offline_controller, wait_for_idle};
use crate::egui_app::state::{FeedbackTone, Flow};

#[test]
fn busy_flow_ignores_second_trigger() {
    let mut controller = offline_controller();

    assert_eq!(controller.submit_training(), Submission::Started);
    assert!(controller.is_busy(Flow::Training));
    assert!(controller.ui.training.busy);
    assert_eq!(controller.submit_training(), Submission::Busy);

    wait_for_idle(&mut controller, Flow::Training);

    assert!(controller.ui.training.result.is_none());
    assert_eq!(controller.ui.dialogs.len(), 1);
    assert_eq!(controller.ui.dialogs.current().unwrap().tone, FeedbackTone::Error);
}

#[test]
fn flows_run_independently() {
    let mut controller = offline_controller();

    assert_eq!(controller.submit_weights(), Submission::Started);
    assert_eq!(controller.submit_training(), Submission::Started);
    assert!(controller.is_busy(Flow::Weights));
    assert!(controller.is_busy(Flow::Training));
    assert!(!controller.is_busy(Flow::Recommendations));

    wait_for_idle(&mut controller, Flow::Weights);
    wait_for_idle(&mut controller, Flow::Training);

    assert!(!controller.ui.any_busy());
    assert_eq!(controller.ui.dialogs.len(), 2);
    assert_eq!(controller.ui.toasts.entries.len(), 2);
}

#[test]
fn button_labels_follow_busy_flag() {
    assert_eq!(Flow::Recommendations.button_label(false), "Get Recommendations");
    assert_eq!(Flow::Recommendations.button_label(true), "Searching...");
    assert_eq!(Flow::Weights.button_label(true), "Updating...");
    assert_eq!(Flow::Training.button_label(true), "Training...");
    assert_eq!(Flow::Inference.button_label(true), "Predicting...");
}
