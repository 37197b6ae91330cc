use home_price_map::domain::errors::AppError;
use home_price_map::domain::geo::{LatLng, RegionCollection};
use home_price_map::view_state::MapViewport;

const SAMPLE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": "08",
      "properties": { "name": "Colorado", "density": 49.33 },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-109.05, 41.0], [-102.05, 41.0], [-102.05, 37.0], [-109.05, 37.0], [-109.05, 41.0]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "Hawaii" },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [
          [[[-155.5, 19.0, 0.0], [-155.0, 19.5, 0.0], [-155.9, 20.2, 0.0], [-155.5, 19.0, 0.0]]],
          [[[-156.6, 20.6], [-156.0, 20.7], [-156.4, 21.0], [-156.6, 20.6]]]
        ]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "Somewhere" },
      "geometry": { "type": "Point", "coordinates": [-100.0, 40.0] }
    },
    {
      "type": "Feature",
      "properties": {},
      "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] }
    },
    {
      "type": "Feature",
      "properties": { "name": "Nowhere" },
      "geometry": null
    }
  ]
}"#;

#[test]
fn keeps_named_polygonal_features_only() {
    let regions = RegionCollection::from_geojson_str(SAMPLE).unwrap();
    let names: Vec<&str> = regions.regions().iter().map(|r| r.name.value()).collect();
    assert_eq!(names, vec!["Colorado", "Hawaii"]);
}

#[test]
fn multipolygon_keeps_every_island() {
    let regions = RegionCollection::from_geojson_str(SAMPLE).unwrap();
    let hawaii = regions.find("Hawaii").unwrap();
    assert_eq!(hawaii.polygons.len(), 2);
    assert_eq!(hawaii.rings().count(), 2);
    assert_eq!(hawaii.polygons[0][0][0], LatLng::new(19.0, -155.5));
}

#[test]
fn bounds_cover_the_outline() {
    let regions = RegionCollection::from_geojson_str(SAMPLE).unwrap();
    let bounds = regions.find("Colorado").unwrap().bounds().unwrap();
    assert_eq!(bounds.south_west, LatLng::new(37.0, -109.05));
    assert_eq!(bounds.north_east, LatLng::new(41.0, -102.05));
    assert!(bounds.contains(LatLng::new(39.7, -104.9)));
    assert!(!bounds.contains(LatLng::new(30.3, -97.7)));
}

#[test]
fn short_position_is_an_error() {
    let bad = r#"{"features": [{"properties": {"name": "Bad"},
        "geometry": {"type": "Polygon", "coordinates": [[[1.0]]]}}]}"#;
    assert!(matches!(RegionCollection::from_geojson_str(bad), Err(AppError::GeoJson(_))));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(RegionCollection::from_geojson_str("{"), Err(AppError::GeoJson(_))));
}

#[test]
fn region_path_draws_closed_rings() {
    let regions = RegionCollection::from_geojson_str(SAMPLE).unwrap();
    let viewport = MapViewport::default();

    let colorado = viewport.region_path(regions.find("Colorado").unwrap());
    assert!(colorado.starts_with('M'));
    assert!(colorado.ends_with('Z'));
    assert_eq!(colorado.matches('L').count(), 4);

    let hawaii = viewport.region_path(regions.find("Hawaii").unwrap());
    assert_eq!(hawaii.matches('M').count(), 2);
    assert_eq!(hawaii.matches('Z').count(), 2);
}
