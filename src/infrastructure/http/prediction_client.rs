use gloo_net::http::Request;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::housing::{PredictionRequest, PredictionResponse, PriceEstimate, PricePredictor};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};

/// POSTs housing attributes to the remote model-serving endpoint
#[derive(Clone, Debug)]
pub struct HttpPricePredictor {
    endpoint: String,
}

impl HttpPricePredictor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PricePredictor for HttpPricePredictor {
    async fn predict(&self, request: &PredictionRequest) -> AppResult<PriceEstimate> {
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Infrastructure("Predictor"),
            &format!("📡 POST {}", self.endpoint),
            &serde_json::to_string(request).unwrap_or_default(),
        );

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| AppError::Network(format!("Failed to encode request: {e:?}")))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::HttpStatus(response.status()));
        }

        let body: PredictionResponse = response
            .json()
            .await
            .map_err(|e| AppError::InvalidResponse(format!("Failed to parse JSON: {e:?}")))?;

        let estimate = body.into_estimate()?;
        get_logger().info(
            LogComponent::Infrastructure("Predictor"),
            &format!("✅ Estimated price {estimate}"),
        );
        Ok(estimate)
    }
}
