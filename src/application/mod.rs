pub mod prediction_service;
pub mod prompt_flow;

pub use prediction_service::{FAILURE_MESSAGE, PredictionService, success_message};
pub use prompt_flow::{Dialogs, PromptFlow};
