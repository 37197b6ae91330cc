use home_price_map::domain::housing::{HousingInput, PredictionRequest, PredictionResponse, StateName};

#[test]
fn request_body_uses_endpoint_field_names() {
    let state = StateName::new("New York").unwrap();
    let input = HousingInput::new("Brooklyn", 3, 2, 1_500).unwrap();
    let request = PredictionRequest::from_input(&state, &input);

    insta::assert_json_snapshot!(request, @r###"
    {
      "state": "New York",
      "city": "Brooklyn",
      "beds": 3,
      "baths": 2,
      "living_space": 1500
    }
    "###);
}

#[test]
fn response_reads_price() {
    let response: PredictionResponse = serde_json::from_str(r#"{"price": 512000.5, "model": "ahab"}"#).unwrap();
    let estimate = response.into_estimate().unwrap();
    assert!((estimate.value() - 512_000.5).abs() < f64::EPSILON);
}

#[test]
fn response_accepts_older_field_names() {
    let older: PredictionResponse = serde_json::from_str(r#"{"predicted_price": 300000}"#).unwrap();
    assert!((older.price - 300_000.0).abs() < f64::EPSILON);

    let oldest: PredictionResponse = serde_json::from_str(r#"{"prediction": 1.0}"#).unwrap();
    assert!((oldest.price - 1.0).abs() < f64::EPSILON);
}

#[test]
fn response_without_price_fails_to_decode() {
    assert!(serde_json::from_str::<PredictionResponse>(r#"{"error": "bad state"}"#).is_err());
    assert!(serde_json::from_str::<PredictionResponse>(r#"{"price": "lots"}"#).is_err());
}
