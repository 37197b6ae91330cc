use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::domain::geo::{LatLng, Point, Region, project, unproject};

/// Viewport parameters controlling zoom and pan of the map.
#[derive(Clone, Debug, PartialEq)]
pub struct MapViewport {
    pub center: LatLng,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_snap: f64,
    pub zoom_delta: f64,
}

/// Serializable initial view, part of the app config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_snap: f64,
    pub zoom_delta: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: LatLng::new(37.8, -96.0),
            zoom: 4.0,
            min_zoom: 2.0,
            max_zoom: 10.0,
            zoom_snap: 0.3,
            zoom_delta: 0.9,
        }
    }
}

pub const VIEWPORT_WIDTH: f64 = 1200.0;
pub const VIEWPORT_HEIGHT: f64 = 700.0;

impl Default for MapViewport {
    fn default() -> Self {
        Self::from_settings(&MapSettings::default(), VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

impl MapViewport {
    pub fn from_settings(settings: &MapSettings, width: f64, height: f64) -> Self {
        Self {
            center: settings.center,
            zoom: settings.zoom.clamp(settings.min_zoom, settings.max_zoom),
            width,
            height,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            zoom_snap: settings.zoom_snap,
            zoom_delta: settings.zoom_delta,
        }
    }

    /// World pixel of the viewport's top-left corner at the current zoom.
    pub fn top_left_world(&self) -> Point {
        project(self.center, self.zoom) - Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn to_screen(&self, coord: LatLng) -> Point {
        project(coord, self.zoom) - self.top_left_world()
    }

    pub fn to_lat_lng(&self, screen: Point) -> LatLng {
        unproject(screen + self.top_left_world(), self.zoom)
    }

    fn snap(&self, zoom: f64) -> f64 {
        let snapped = if self.zoom_snap > 0.0 { (zoom / self.zoom_snap).round() * self.zoom_snap } else { zoom };
        snapped.clamp(self.min_zoom, self.max_zoom)
    }

    /// Zoom by `steps` wheel notches keeping the coordinate under `anchor` stable.
    pub fn zoom_by(&mut self, steps: f64, anchor: Point) {
        let new_zoom = self.snap(self.zoom + steps * self.zoom_delta);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let anchored = self.to_lat_lng(anchor);
        let top_left = project(anchored, new_zoom) - anchor;
        self.zoom = new_zoom;
        self.center = unproject(top_left + Point::new(self.width / 2.0, self.height / 2.0), new_zoom);
    }

    /// Pan by a drag delta in screen pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let center = project(self.center, self.zoom) - Point::new(dx, dy);
        self.center = unproject(center, self.zoom);
    }

    /// SVG path data for every ring of a region.
    pub fn region_path(&self, region: &Region) -> String {
        let origin = self.top_left_world();
        let mut path = String::new();
        for ring in region.rings() {
            for (i, coord) in ring.iter().enumerate() {
                let p = project(*coord, self.zoom) - origin;
                let cmd = if i == 0 { 'M' } else { 'L' };
                let _ = write!(path, "{cmd}{:.1},{:.1} ", p.x, p.y);
            }
            if !ring.is_empty() {
                path.push_str("Z ");
            }
        }
        path.truncate(path.trim_end().len());
        path
    }
}
