use crate::domain::errors::AppResult;
use crate::domain::housing::{PendingPrediction, PriceEstimate, PricePredictor};
use crate::domain::logging::{LogComponent, get_logger};

pub const FAILURE_MESSAGE: &str = "Something went wrong during prediction. Check console.";

/// Use case: turn a committed form into a price estimate
pub struct PredictionService<P> {
    predictor: P,
}

impl<P: PricePredictor> PredictionService<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub async fn estimate(&self, pending: &PendingPrediction) -> AppResult<PriceEstimate> {
        let request = pending.request();
        get_logger().info(
            LogComponent::Application("Prediction"),
            &format!(
                "🏠 #{} {} / {}: {} bd, {} ba, {} sqft",
                pending.ticket, request.state, request.city, request.beds, request.baths, request.living_space
            ),
        );

        self.predictor.predict(&request).await.inspect_err(|e| {
            get_logger().error(LogComponent::Application("Prediction"), &format!("❌ Prediction error: {e}"));
        })
    }
}

pub fn success_message(estimate: &PriceEstimate) -> String {
    format!("Estimated price: {estimate}")
}
