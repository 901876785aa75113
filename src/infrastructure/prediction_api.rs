use crate::domain::errors::PredictionError;
use crate::domain::form::PredictionRequest;
use crate::domain::ports::PredictionService;
use crate::domain::prediction::PredictionResult;
use crate::infrastructure::http_client_factory::join_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the liquidity prediction backend (`POST {base}/predict`).
pub struct HttpPredictionService {
    client: Client,
    predict_url: String,
}

impl HttpPredictionService {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            predict_url: join_url(base_url, "predict"),
        }
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        info!("POST {}", self.predict_url);

        let response = self
            .client
            .post(&self.predict_url)
            .json(request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: the body may be empty or not JSON at all.
            let body = response.text().await.unwrap_or_default();
            let server_error = extract_server_error(&body);
            warn!(
                "Prediction service answered {} (server error: {:?})",
                status, server_error
            );
            return Err(PredictionError::from_status(status.as_u16(), server_error));
        }

        response.json::<PredictionResult>().await.map_err(|e| {
            if e.is_decode() {
                PredictionError::MalformedResponse {
                    reason: e.to_string(),
                }
            } else {
                classify_transport_error(e)
            }
        })
    }
}

/// Request never built vs. request sent without a response.
fn classify_transport_error(e: reqwest::Error) -> PredictionError {
    if e.is_builder() {
        PredictionError::RequestSetup {
            reason: e.to_string(),
        }
    } else {
        PredictionError::Unreachable {
            reason: e.to_string(),
        }
    }
}

fn extract_server_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}
