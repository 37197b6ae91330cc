pub mod entities;
pub mod projection;
pub mod style;
pub mod tiles;

pub use entities::{Bounds, FeatureCollection, LatLng, Region, RegionCollection};
pub use projection::{Point, project, unproject};
pub use style::PathStyle;
pub use tiles::{MAX_TILE_ZOOM, TileLayerConfig, TilePlacement, tiles_for_viewport};
