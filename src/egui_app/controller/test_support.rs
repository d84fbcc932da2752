use super::*;
use crate::api::{Recommendation, RecommenderClient};
use crate::config::ApiSettings;
use std::net::TcpListener;
use std::time::{Duration, Instant};

/// Controller whose client targets a port nobody listens on.
pub(super) fn offline_controller() -> EguiController {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = RecommenderClient::new(&ApiSettings {
        base_url: format!("http://{addr}"),
        request_timeout_secs: Some(5),
        ..ApiSettings::default()
    });
    EguiController::with_client(client)
}

/// Poll until `flow` settles, failing the test after a few seconds.
pub(super) fn wait_for_idle(controller: &mut EguiController, flow: Flow) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while controller.is_busy(flow) {
        assert!(Instant::now() < deadline, "{flow:?} never settled");
        controller.tick();
        std::thread::sleep(Duration::from_millis(10));
    }
}

pub(super) fn recommendation(brand: &str, price: f64, score: f64) -> Recommendation {
    Recommendation {
        brand: brand.to_string(),
        processor: "I5".to_string(),
        ram: 8.0,
        price,
        similarity_score: Some(score),
        price_difference: Some(0.0),
        final_score: Some(score),
        has_sacoche: None,
        is_available: None,
    }
}
