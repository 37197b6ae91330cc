use home_price_map::application::success_message;
use home_price_map::domain::housing::{PriceEstimate, format_price};
use quickcheck_macros::quickcheck;

#[test]
fn groups_thousands_like_en_us() {
    assert_eq!(format_price(350_000.0), "350,000");
    assert_eq!(format_price(1_234_567.0), "1,234,567");
    assert_eq!(format_price(1_000.0), "1,000");
    assert_eq!(format_price(100.0), "100");
}

#[test]
fn keeps_at_most_three_fraction_digits() {
    assert_eq!(format_price(1_234.5), "1,234.5");
    assert_eq!(format_price(0.12345), "0.123");
    assert_eq!(format_price(99.9999), "100");
    assert_eq!(format_price(412_345.678_9), "412,345.679");
}

#[test]
fn non_finite_prices_are_rejected() {
    assert!(PriceEstimate::new(f64::NAN).is_err());
    assert!(PriceEstimate::new(f64::INFINITY).is_err());
}

#[test]
fn success_message_matches_alert_text() {
    let estimate = PriceEstimate::new(425_000.0).unwrap();
    assert_eq!(success_message(&estimate), "Estimated price: $425,000");
}

#[quickcheck]
fn stripping_commas_gives_plain_integer(n: u32) -> bool {
    format_price(f64::from(n)).replace(',', "") == n.to_string()
}
