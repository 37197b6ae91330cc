use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::geo::{MAX_TILE_ZOOM, TileLayerConfig};
use crate::domain::logging::LogLevel;
use crate::view_state::MapSettings;

/// DOM id of the inline JSON config block in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

pub const DEFAULT_PREDICTION_ENDPOINT: &str = "https://house-price-api-359511347434.us-central1.run.app/predict";
pub const DEFAULT_STATES_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/PublicaMundi/MappingAPI/master/data/geojson/us-states.json";

/// How attributes are collected after a state is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InputFlow {
    /// In-page modal with sliders, spinner and result panel.
    #[default]
    Modal,
    /// Sequential browser prompts; result and errors via alert.
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub prediction_endpoint: String,
    pub states_geojson_url: String,
    pub tiles: TileLayerConfig,
    pub map: MapSettings,
    pub input_flow: InputFlow,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prediction_endpoint: DEFAULT_PREDICTION_ENDPOINT.to_string(),
            states_geojson_url: DEFAULT_STATES_GEOJSON_URL.to_string(),
            tiles: TileLayerConfig::default(),
            map: MapSettings::default(),
            input_flow: InputFlow::default(),
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.prediction_endpoint.trim().is_empty() {
            return Err(AppError::Config("prediction_endpoint cannot be empty".to_string()));
        }
        if self.states_geojson_url.trim().is_empty() {
            return Err(AppError::Config("states_geojson_url cannot be empty".to_string()));
        }
        let zooms = [self.map.zoom, self.map.min_zoom, self.map.max_zoom];
        if zooms.iter().any(|z| !z.is_finite() || *z < 0.0 || *z > f64::from(MAX_TILE_ZOOM)) {
            return Err(AppError::Config(format!("map zoom levels must lie within 0..={MAX_TILE_ZOOM}")));
        }
        if self.map.min_zoom > self.map.max_zoom {
            return Err(AppError::Config(format!(
                "min_zoom {} is greater than max_zoom {}",
                self.map.min_zoom, self.map.max_zoom
            )));
        }
        if [self.map.zoom_snap, self.map.zoom_delta].iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(AppError::Config("zoom_snap and zoom_delta must be positive".to_string()));
        }
        if self.tiles.max_zoom > MAX_TILE_ZOOM {
            return Err(AppError::Config(format!(
                "tile max_zoom {} exceeds {MAX_TILE_ZOOM}",
                self.tiles.max_zoom
            )));
        }
        if self.tiles.min_zoom > self.tiles.max_zoom {
            return Err(AppError::Config("tile min_zoom is greater than tile max_zoom".to_string()));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> AppResult<LogLevel> {
        LogLevel::from_str(self.log_level.trim())
            .map_err(|_| AppError::Config(format!("unknown log level '{}'", self.log_level)))
    }

    /// Resolve an optional inline config. Any problem falls back to defaults
    /// and is handed back so it can be logged once the logger exists.
    pub fn resolve(json: Option<&str>) -> (Self, Option<AppError>) {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            return (Self::default(), None);
        };
        match Self::from_json(json) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Text of the `<script id="app-config" type="application/json">` block, if the page has one.
    pub fn read_inline() -> Option<String> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
    }
}
