use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

use super::services::format_price;
use crate::domain::errors::{AppError, AppResult};

/// Value Object - name of a selected U.S. state, never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct StateName(String);

impl StateName {
    pub fn new(name: &str) -> AppResult<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("State name cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Value Object - validated housing attributes for one prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HousingInput {
    city: String,
    bedrooms: u32,
    bathrooms: u32,
    square_footage: u32,
}

impl HousingInput {
    pub fn new(city: &str, bedrooms: u32, bathrooms: u32, square_footage: u32) -> AppResult<Self> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::Validation("City cannot be empty".to_string()));
        }
        if square_footage == 0 {
            return Err(AppError::Validation("Square footage must be greater than zero".to_string()));
        }
        Ok(Self { city: city.to_string(), bedrooms, bathrooms, square_footage })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    pub fn bathrooms(&self) -> u32 {
        self.bathrooms
    }

    pub fn square_footage(&self) -> u32 {
        self.square_footage
    }
}

/// Value Object - price returned by the remote model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEstimate(f64);

impl std::fmt::Display for PriceEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", format_price(self.0))
    }
}

impl PriceEstimate {
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() {
            return Err(AppError::InvalidResponse(format!("price is not a finite number: {value}")));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn formatted(&self) -> String {
        format_price(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_is_trimmed() {
        assert_eq!(StateName::new("  Ohio ").unwrap().value(), "Ohio");
        assert!(StateName::new("   ").is_err());
    }

    #[test]
    fn estimate_display_uses_dollar_grouping() {
        let estimate = PriceEstimate::new(1_250_000.0).unwrap();
        assert_eq!(estimate.to_string(), "$1,250,000");
    }
}
