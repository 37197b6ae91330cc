use derive_more::Display;

/// One error type for the whole front end. No retries, no taxonomy beyond what the UI needs.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    #[display(fmt = "API Error: {}", _0)]
    HttpStatus(u16),
    #[display(fmt = "Invalid Response: {}", _0)]
    InvalidResponse(String),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
    #[display(fmt = "GeoJSON Error: {}", _0)]
    GeoJson(String),
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
    #[display(fmt = "A prediction request is already in flight")]
    RequestInFlight,
    #[display(fmt = "Invalid Transition: {}", _0)]
    InvalidTransition(String),
}

impl std::error::Error for AppError {}

impl AppError {
    /// Errors the user caused and can fix in the form.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
