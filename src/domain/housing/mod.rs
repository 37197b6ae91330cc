pub mod form;
pub mod prediction;
pub mod services;
pub mod value_objects;

pub use form::{FormField, InputForm};
pub use prediction::{PendingPrediction, PredictionRequest, PredictionResponse, PricePredictor};
pub use services::{count_from_js_int, format_price, parse_js_int};
pub use value_objects::{HousingInput, PriceEstimate, StateName};
