pub mod geojson_client;
pub mod prediction_client;

pub use geojson_client::GeoJsonClient;
pub use prediction_client::HttpPricePredictor;
