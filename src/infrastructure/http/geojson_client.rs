use gloo_net::http::Request;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::geo::{FeatureCollection, RegionCollection};
use crate::domain::logging::{LogComponent, get_logger};

/// Loads the U.S. states outline GeoJSON
#[derive(Clone, Debug)]
pub struct GeoJsonClient {
    url: String,
}

impl GeoJsonClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub async fn fetch_regions(&self) -> AppResult<RegionCollection> {
        get_logger().info(
            LogComponent::Infrastructure("GeoJson"),
            &format!("🗺️ Fetching state outlines from: {}", self.url),
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch GeoJSON: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::HttpStatus(response.status()));
        }

        let collection: FeatureCollection =
            response.json().await.map_err(|e| AppError::GeoJson(format!("Failed to parse JSON: {e:?}")))?;
        let regions = RegionCollection::from_feature_collection(collection)?;

        get_logger().info(
            LogComponent::Infrastructure("GeoJson"),
            &format!("✅ Loaded {} regions", regions.len()),
        );
        Ok(regions)
    }
}
