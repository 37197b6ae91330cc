use std::ops::RangeInclusive;

use strum::{AsRefStr, EnumIter};

use super::value_objects::HousingInput;
use crate::domain::errors::{AppError, AppResult};

/// Slider-backed fields of the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum FormField {
    Bedrooms,
    Bathrooms,
    SquareFootage,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Bedrooms => "Bedrooms",
            FormField::Bathrooms => "Bathrooms",
            FormField::SquareFootage => "Square footage",
        }
    }

    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            FormField::Bedrooms => 1..=10,
            FormField::Bathrooms => 1..=10,
            FormField::SquareFootage => 200..=10_000,
        }
    }

    pub fn step(self) -> u32 {
        match self {
            FormField::SquareFootage => 50,
            _ => 1,
        }
    }

    pub fn default_value(self) -> u32 {
        match self {
            FormField::Bedrooms => 3,
            FormField::Bathrooms => 2,
            FormField::SquareFootage => 1_500,
        }
    }
}

/// Raw modal values, validated only on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    pub city: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub square_footage: u32,
}

impl Default for InputForm {
    fn default() -> Self {
        Self {
            city: String::new(),
            bedrooms: FormField::Bedrooms.default_value(),
            bathrooms: FormField::Bathrooms.default_value(),
            square_footage: FormField::SquareFootage.default_value(),
        }
    }
}

impl InputForm {
    pub fn get(&self, field: FormField) -> u32 {
        match field {
            FormField::Bedrooms => self.bedrooms,
            FormField::Bathrooms => self.bathrooms,
            FormField::SquareFootage => self.square_footage,
        }
    }

    /// Set a slider from its input text, clamped into the field range.
    pub fn set(&mut self, field: FormField, text: &str) -> AppResult<u32> {
        let parsed: u32 = text
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("{} must be a whole number", field.label())))?;
        let range = field.range();
        let value = parsed.clamp(*range.start(), *range.end());

        let slot = match field {
            FormField::Bedrooms => &mut self.bedrooms,
            FormField::Bathrooms => &mut self.bathrooms,
            FormField::SquareFootage => &mut self.square_footage,
        };
        *slot = value;
        Ok(value)
    }

    pub fn to_input(&self) -> AppResult<HousingInput> {
        HousingInput::new(&self.city, self.bedrooms, self.bathrooms, self.square_footage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn defaults_sit_inside_ranges() {
        for field in FormField::iter() {
            assert!(field.range().contains(&field.default_value()), "{}", field.as_ref());
        }
    }

    #[test]
    fn set_clamps_and_rejects_garbage() {
        let mut form = InputForm::default();
        assert_eq!(form.set(FormField::SquareFootage, "50000").unwrap(), 10_000);
        assert!(form.set(FormField::Bedrooms, "three").is_err());
        assert_eq!(form.bedrooms, 3);
    }
}
