//! Blocking HTTP client for the four service endpoints.

use std::io::Read;

use serde::de::DeserializeOwned;

use super::endpoints;
use super::error::ApiError;
use super::types::{
    InferenceRequest, InferenceResult, RecommendationResponse, Requirements, TrainingResult,
    WeightConfig,
};
use crate::config::ApiSettings;

/// Talks to the recommendation service at a configured base address.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct RecommenderClient {
    base_url: String,
    agent: ureq::Agent,
    max_response_bytes: usize,
}

impl RecommenderClient {
    /// Without `request_timeout_secs` a request waits for as long as the server
    /// keeps the connection open.
    pub fn new(settings: &ApiSettings) -> Self {
        let mut agent = ureq::AgentBuilder::new();
        if let Some(timeout) = settings.request_timeout() {
            agent = agent.timeout(timeout);
        }
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            agent: agent.build(),
            max_response_bytes: settings.max_response_bytes,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /update-weights`; the response body is not inspected.
    pub fn update_weights(&self, weights: &WeightConfig) -> Result<(), ApiError> {
        let request = self.post(endpoints::UPDATE_WEIGHTS)?;
        self.finish(request.send_json(weights)).map(|_| ())
    }

    /// `POST /get-recommendations`.
    pub fn get_recommendations(
        &self,
        requirements: &Requirements,
    ) -> Result<RecommendationResponse, ApiError> {
        let request = self.post(endpoints::GET_RECOMMENDATIONS)?;
        let body = self.finish(request.send_json(requirements))?;
        decode(&body)
    }

    /// `POST /train-model` with an empty body.
    pub fn train_model(&self) -> Result<TrainingResult, ApiError> {
        let request = self.post(endpoints::TRAIN_MODEL)?;
        let body = self.finish(request.call())?;
        decode(&body)
    }

    /// `POST /inference` with the product passed as query parameters.
    pub fn run_inference(&self, input: &InferenceRequest) -> Result<InferenceResult, ApiError> {
        let request = self
            .post(endpoints::INFERENCE)?
            .query("product_name", &input.product_name)
            .query("price", &input.price.to_string());
        let body = self.finish(request.call())?;
        decode(&body)
    }

    fn post(&self, path: &str) -> Result<ureq::Request, ApiError> {
        let url = format!("{}{path}", self.base_url);
        url::Url::parse(&url).map_err(|err| ApiError::InvalidUrl(format!("{url}: {err}")))?;
        Ok(self.agent.post(&url).set("Accept", "application/json"))
    }

    fn finish(&self, outcome: Result<ureq::Response, ureq::Error>) -> Result<String, ApiError> {
        match outcome {
            Ok(response) => self.read_body(response),
            Err(ureq::Error::Status(code, response)) => {
                let body = self
                    .read_body(response)
                    .unwrap_or_else(|err| err.to_string());
                Err(ApiError::from_status(code, body))
            }
            Err(ureq::Error::Transport(err)) => Err(ApiError::Transport(err.to_string())),
        }
    }

    /// Body as UTF-8 text, capped at `max_response_bytes`.
    ///
    /// A declared `Content-Length` over the cap is refused before reading.
    fn read_body(&self, response: ureq::Response) -> Result<String, ApiError> {
        let limit = self.max_response_bytes;
        let declared = response
            .header("Content-Length")
            .and_then(|value| value.trim().parse::<u64>().ok());
        if declared.is_some_and(|length| length > limit as u64) {
            return Err(ApiError::TooLarge { limit });
        }
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(limit as u64 + 1)
            .read_to_end(&mut bytes)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if bytes.len() > limit {
            return Err(ApiError::TooLarge { limit });
        }
        String::from_utf8(bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Decode("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| ApiError::Decode(err.to_string()))
}
