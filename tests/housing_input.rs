use home_price_map::domain::errors::AppError;
use home_price_map::domain::housing::{HousingInput, InputForm, count_from_js_int, parse_js_int};
use quickcheck_macros::quickcheck;

#[test]
fn valid_input_is_trimmed() {
    let input = HousingInput::new("  Brooklyn ", 3, 2, 1_500).unwrap();
    assert_eq!(input.city(), "Brooklyn");
    assert_eq!(input.bedrooms(), 3);
    assert_eq!(input.bathrooms(), 2);
    assert_eq!(input.square_footage(), 1_500);
}

#[test]
fn zero_rooms_are_allowed() {
    assert!(HousingInput::new("Austin", 0, 0, 400).is_ok());
}

#[test]
fn empty_city_is_rejected() {
    assert!(matches!(HousingInput::new("   ", 3, 2, 1_500), Err(AppError::Validation(_))));
}

#[test]
fn zero_square_footage_is_rejected() {
    assert!(matches!(HousingInput::new("Austin", 3, 2, 0), Err(AppError::Validation(_))));
}

#[test]
fn negative_counts_are_rejected() {
    assert!(matches!(count_from_js_int(-1, "Bedrooms"), Err(AppError::Validation(_))));
    assert_eq!(count_from_js_int(4, "Bedrooms").unwrap(), 4);
}

#[test]
fn oversized_counts_are_rejected() {
    assert!(count_from_js_int(i64::from(u32::MAX) + 1, "Square footage").is_err());
}

#[test]
fn parse_matches_parse_int_on_prompt_answers() {
    assert_eq!(parse_js_int("3"), Some(3));
    assert_eq!(parse_js_int("2.5"), Some(2));
    assert_eq!(parse_js_int("1500 sqft"), Some(1500));
    assert_eq!(parse_js_int("\t 7"), Some(7));
    assert_eq!(parse_js_int("+8"), Some(8));
    assert_eq!(parse_js_int("-2"), Some(-2));
    assert_eq!(parse_js_int("0x10"), Some(0));
    assert_eq!(parse_js_int("two"), None);
    assert_eq!(parse_js_int(" "), None);
}

#[test]
fn form_validates_on_conversion() {
    let mut form = InputForm::default();
    assert!(form.to_input().is_err());
    form.city = "Denver".to_string();
    let input = form.to_input().unwrap();
    assert_eq!(input.city(), "Denver");
    assert_eq!(input.bedrooms(), form.bedrooms);
}

#[quickcheck]
fn parse_reads_leading_integer(n: u32, suffix: String) -> bool {
    let suffix: String = suffix.chars().filter(|c| !c.is_ascii_digit()).collect();
    parse_js_int(&format!("{n}{suffix}")) == Some(i64::from(n))
}

#[quickcheck]
fn non_negative_counts_round_trip(n: u32) -> bool {
    count_from_js_int(i64::from(n), "Bedrooms").ok() == Some(n)
}

#[test]
fn only_validation_errors_are_shown_in_the_form() {
    let error = HousingInput::new("  ", 2, 1, 900).unwrap_err();
    assert!(error.is_user_facing());
    assert!(!AppError::RequestInFlight.is_user_facing());
    assert!(!AppError::HttpStatus(502).is_user_facing());
}
