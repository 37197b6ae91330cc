use crate::domain::errors::AppResult;
use crate::domain::housing::{HousingInput, StateName, count_from_js_int, parse_js_int};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Blocking browser dialogs
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn prompt(&self, message: &str) -> Option<String>;
}

/// Collects housing attributes one `prompt` at a time.
pub struct PromptFlow<D> {
    dialogs: D,
}

impl<D: Dialogs> PromptFlow<D> {
    pub fn new(dialogs: D) -> Self {
        Self { dialogs }
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// `Ok(None)` when the user backs out or types something that is not a number.
    pub fn collect(&self, region: &StateName) -> AppResult<Option<HousingInput>> {
        let city = match self.dialogs.prompt(&format!("Enter the city/borough for {region}:")) {
            Some(city) if !city.trim().is_empty() => city,
            _ => {
                log_debug!(LogComponent::Application("PromptFlow"), "city prompt cancelled");
                return Ok(None);
            }
        };

        let Some(bedrooms) = self.ask_count("Enter number of bedrooms:", "Bedrooms")? else { return Ok(None) };
        let Some(bathrooms) = self.ask_count("Enter number of bathrooms:", "Bathrooms")? else { return Ok(None) };
        let Some(sqft) = self.ask_count("Enter square footage:", "Square footage")? else { return Ok(None) };

        HousingInput::new(&city, bedrooms, bathrooms, sqft).map(Some)
    }

    fn ask_count(&self, message: &str, field: &str) -> AppResult<Option<u32>> {
        let answer = self.dialogs.prompt(message).filter(|a| !a.is_empty());
        match parse_js_int(answer.as_deref().unwrap_or("0")) {
            Some(value) => count_from_js_int(value, field).map(Some),
            None => Ok(None),
        }
    }
}
