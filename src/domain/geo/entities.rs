use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, AppResult};
use crate::domain::housing::StateName;

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Lon/lat bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}

/// A ring is a closed sequence of coordinates; the first ring of a polygon is its outline.
pub type Ring = Vec<LatLng>;

/// One clickable state on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: StateName,
    pub polygons: Vec<Vec<Ring>>,
}

impl Region {
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons.iter().flatten()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.rings().flatten();
        let first = *points.next()?;
        let mut bounds = Bounds { south_west: first, north_east: first };
        for p in points {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(p.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(p.lng);
        }
        Some(bounds)
    }
}

/// GeoJSON `FeatureCollection`, reduced to what the map draws
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Unsupported,
}

/// All regions loaded from the states GeoJSON, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionCollection {
    regions: Vec<Region>,
}

impl RegionCollection {
    pub fn from_geojson_str(json: &str) -> AppResult<Self> {
        let collection: FeatureCollection =
            serde_json::from_str(json).map_err(|e| AppError::GeoJson(format!("Failed to parse GeoJSON: {e}")))?;
        Self::from_feature_collection(collection)
    }

    pub fn from_feature_collection(collection: FeatureCollection) -> AppResult<Self> {
        let mut regions = Vec::with_capacity(collection.features.len());
        for feature in collection.features {
            let Some(name) = feature.properties.and_then(|p| p.name) else { continue };
            let Ok(name) = StateName::new(&name) else { continue };

            let polygons = match feature.geometry {
                Some(Geometry::Polygon { coordinates }) => vec![convert_polygon(coordinates)?],
                Some(Geometry::MultiPolygon { coordinates }) => {
                    coordinates.into_iter().map(convert_polygon).collect::<AppResult<Vec<_>>>()?
                }
                Some(Geometry::Unsupported) | None => continue,
            };
            regions.push(Region { name, polygons });
        }
        Ok(Self { regions })
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name.value() == name)
    }
}

fn convert_polygon(rings: Vec<Vec<Vec<f64>>>) -> AppResult<Vec<Ring>> {
    rings
        .into_iter()
        .map(|ring| ring.into_iter().map(convert_position).collect::<AppResult<Ring>>())
        .collect()
}

/// GeoJSON positions are `[lng, lat, (alt)]`.
fn convert_position(position: Vec<f64>) -> AppResult<LatLng> {
    match position.as_slice() {
        [lng, lat, ..] => Ok(LatLng::new(*lat, *lng)),
        _ => Err(AppError::GeoJson(format!("position needs two numbers, got {}", position.len()))),
    }
}
