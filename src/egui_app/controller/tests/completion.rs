use super::super::jobs::JobMessage;
use super::super::test_support::{offline_controller, recommendation};
use crate::api::{
    ApiError, ConfusionMatrix, InferenceResult, RecommendationResponse, TrainingResult,
};
use crate::egui_app::state::{FeedbackTone, Flow};
use std::time::Instant;

fn server_error(detail: &str) -> ApiError {
    ApiError::Status {
        code: 500,
        detail: Some(detail.to_string()),
        body: String::new(),
    }
}

#[test]
fn recommendations_success_keeps_order_and_opens_modal() {
    let mut controller = offline_controller();
    controller.ui.set_busy(Flow::Recommendations, true);
    let items = vec![
        recommendation("HP", 900.0, 0.4),
        recommendation("ASUS", 1500.0, 0.95),
        recommendation("ACER", 700.0, 0.7),
    ];
    let mut metrics = serde_json::Map::new();
    metrics.insert("precision".into(), serde_json::json!(0.75));

    controller.finish_recommendations(
        Ok(RecommendationResponse {
            recommendations: items.clone(),
            metrics: Some(metrics),
        }),
        Instant::now(),
    );

    let state = &controller.ui.recommendations;
    assert!(!state.busy);
    assert!(state.modal_open);
    assert_eq!(state.items, items);
    assert!(state.metrics.is_some());
    assert_eq!(controller.ui.toasts.entries[0].text, "Found 3 recommendations");
    assert_eq!(controller.ui.toasts.entries[0].tone, FeedbackTone::Success);
    assert!(controller.ui.dialogs.is_empty());
}

#[test]
fn recommendations_failure_leaves_previous_results() {
    let mut controller = offline_controller();
    let previous = vec![recommendation("DELL", 1000.0, 0.5)];
    controller.ui.recommendations.items = previous.clone();
    controller.ui.set_busy(Flow::Recommendations, true);

    controller.finish_recommendations(Err(server_error("index out of range")), Instant::now());

    assert!(!controller.is_busy(Flow::Recommendations));
    assert_eq!(controller.ui.recommendations.items, previous);
    assert!(!controller.ui.recommendations.modal_open);
    let dialog = controller.ui.dialogs.current().unwrap();
    assert_eq!(dialog.tone, FeedbackTone::Error);
    assert_eq!(dialog.title, "Recommendation Error");
    assert_eq!(dialog.text, "Failed to get recommendations: index out of range");
    assert_eq!(controller.ui.toasts.entries[0].text, "Failed to fetch recommendations");
}

#[test]
fn training_failure_keeps_last_result() {
    let mut controller = offline_controller();
    let previous = TrainingResult {
        message: "ok".into(),
        accuracy: 0.8,
        confusion_matrix: ConfusionMatrix([[4, 1], [1, 4]]),
    };
    controller.ui.training.result = Some(previous.clone());
    controller.ui.set_busy(Flow::Training, true);

    controller.finish_training(
        Err(ApiError::Transport("Connection refused".into())),
        Instant::now(),
    );

    assert!(!controller.is_busy(Flow::Training));
    assert_eq!(controller.ui.training.result, Some(previous));
    assert_eq!(
        controller.ui.dialogs.current().unwrap().text,
        "Failed to train model: Network error: Connection refused"
    );
}

#[test]
fn training_success_stores_result() {
    let mut controller = offline_controller();
    controller.ui.set_busy(Flow::Training, true);
    let result = TrainingResult {
        message: "Model trained".into(),
        accuracy: 0.9,
        confusion_matrix: ConfusionMatrix([[5, 2], [1, 8]]),
    };

    controller.finish_training(Ok(result.clone()), Instant::now());

    assert!(!controller.is_busy(Flow::Training));
    assert_eq!(controller.ui.training.result, Some(result));
    assert_eq!(
        controller.ui.toasts.entries[0].text,
        "Model trained (accuracy 90.00%)"
    );
}

#[test]
fn inference_failure_uses_detail_and_keeps_result() {
    let mut controller = offline_controller();
    let previous = InferenceResult {
        product_name: "Old".into(),
        price: 1.0,
        prediction: "In stock".into(),
    };
    controller.ui.inference.result = Some(previous.clone());
    controller.ui.set_busy(Flow::Inference, true);

    controller.finish_inference(Err(server_error("Unknown product")), Instant::now());

    assert!(!controller.is_busy(Flow::Inference));
    assert_eq!(controller.ui.inference.result, Some(previous));
    assert_eq!(
        controller.ui.dialogs.current().unwrap().text,
        "Failed to get prediction: Unknown product"
    );
}

#[test]
fn weights_success_shows_dialog_and_toast() {
    let mut controller = offline_controller();
    controller.ui.set_busy(Flow::Weights, true);

    controller.finish_weights_update(Ok(()), Instant::now());

    assert!(!controller.is_busy(Flow::Weights));
    let dialog = controller.ui.dialogs.current().unwrap();
    assert_eq!(dialog.tone, FeedbackTone::Success);
    assert_eq!(dialog.title, "Weights Updated");
    assert_eq!(controller.ui.toasts.entries[0].text, "Weights updated successfully!");
}

#[test]
fn poll_applies_every_queued_message() {
    let mut controller = offline_controller();
    controller.ui.set_busy(Flow::Weights, true);
    controller.ui.set_busy(Flow::Inference, true);
    let client = controller.client().clone();
    controller
        .jobs
        .spawn_request(Flow::Weights, client.clone(), |_| JobMessage::WeightsUpdated(Ok(())));
    controller.jobs.spawn_request(Flow::Inference, client, |_| {
        JobMessage::InferenceFinished(Ok(InferenceResult {
            product_name: "Vivobook".into(),
            price: 1800.0,
            prediction: "Out of stock".into(),
        }))
    });

    let mut applied = 0;
    for _ in 0..500 {
        applied += controller.poll_background_jobs(Instant::now());
        if applied == 2 {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    assert_eq!(applied, 2);
    assert!(!controller.ui.any_busy());
    let result = controller.ui.inference.result.as_ref().unwrap();
    assert!(!result.is_in_stock());
}
