use home_price_map::config::{AppConfig, DEFAULT_PREDICTION_ENDPOINT, InputFlow};
use home_price_map::domain::errors::AppError;
use home_price_map::domain::logging::LogLevel;

#[test]
fn defaults_match_the_deployed_service() {
    let config = AppConfig::default();
    assert_eq!(config.prediction_endpoint, DEFAULT_PREDICTION_ENDPOINT);
    assert_eq!(config.input_flow, InputFlow::Modal);
    assert_eq!(config.level().unwrap(), LogLevel::Debug);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_fills_in_defaults() {
    let config = AppConfig::from_json(
        r#"{"prediction_endpoint": "http://localhost:8080/predict", "input_flow": "prompt", "map": {"zoom": 5}}"#,
    )
    .unwrap();

    assert_eq!(config.prediction_endpoint, "http://localhost:8080/predict");
    assert_eq!(config.input_flow, InputFlow::Prompt);
    assert!((config.map.zoom - 5.0).abs() < f64::EPSILON);
    assert!((config.map.zoom_snap - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.tiles, AppConfig::default().tiles);
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{"prediction_endpoint": "  "}"#,
        r#"{"map": {"min_zoom": 8, "max_zoom": 3}}"#,
        r#"{"map": {"zoom_snap": 0}}"#,
        r#"{"log_level": "chatty"}"#,
        r#"{"input_flow": "wizard"}"#,
        "not json",
    ] {
        assert!(matches!(AppConfig::from_json(json), Err(AppError::Config(_))), "{json}");
    }
}

#[test]
fn resolve_falls_back_and_reports() {
    let (config, problem) = AppConfig::resolve(Some(r#"{"log_level": "chatty"}"#));
    assert_eq!(config, AppConfig::default());
    assert!(matches!(problem, Some(AppError::Config(_))));

    let (config, problem) = AppConfig::resolve(None);
    assert_eq!(config, AppConfig::default());
    assert!(problem.is_none());

    let (config, problem) = AppConfig::resolve(Some(r#"{"log_level": "warn"}"#));
    assert_eq!(config.level().unwrap(), LogLevel::Warn);
    assert!(problem.is_none());
}

#[test]
fn zoom_levels_beyond_tile_range_are_rejected() {
    for json in [
        r#"{"tiles": {"max_zoom": 70}, "map": {"zoom": 66, "max_zoom": 70}}"#,
        r#"{"tiles": {"max_zoom": 31}}"#,
        r#"{"map": {"zoom": 40, "max_zoom": 40}}"#,
        r#"{"map": {"min_zoom": -1}}"#,
    ] {
        assert!(matches!(AppConfig::from_json(json), Err(AppError::Config(_))), "{json}");
    }

    let deepest = AppConfig::from_json(r#"{"tiles": {"max_zoom": 30}, "map": {"max_zoom": 30}}"#).unwrap();
    assert_eq!(deepest.tiles.max_zoom, 30);
}
