use serde::{Deserialize, Serialize};

use super::value_objects::{HousingInput, PriceEstimate, StateName};
use crate::domain::errors::AppResult;

/// Wire body for the prediction endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub state: String,
    pub city: String,
    pub beds: u32,
    pub baths: u32,
    pub living_space: u32,
}

impl PredictionRequest {
    pub fn from_input(state: &StateName, input: &HousingInput) -> Self {
        Self {
            state: state.value().to_string(),
            city: input.city().to_string(),
            beds: input.bedrooms(),
            baths: input.bathrooms(),
            living_space: input.square_footage(),
        }
    }
}

/// Wire response; older endpoint revisions named the field differently.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(alias = "predicted_price", alias = "prediction")]
    pub price: f64,
}

impl PredictionResponse {
    pub fn into_estimate(self) -> AppResult<PriceEstimate> {
        PriceEstimate::new(self.price)
    }
}

/// A request the session has committed to; `ticket` identifies its completion.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPrediction {
    pub ticket: u64,
    pub region: StateName,
    pub input: HousingInput,
}

impl PendingPrediction {
    pub fn request(&self) -> PredictionRequest {
        PredictionRequest::from_input(&self.region, &self.input)
    }
}

/// Remote price model
#[allow(async_fn_in_trait)]
pub trait PricePredictor {
    async fn predict(&self, request: &PredictionRequest) -> AppResult<PriceEstimate>;
}
