use serde::{Deserialize, Serialize};

use super::projection::TILE_SIZE;
use crate::view_state::MapViewport;

/// Deepest tile level any raster source is expected to serve.
pub const MAX_TILE_ZOOM: u8 = 30;

/// Raster basemap source (`{s}`, `{z}`, `{x}`, `{y}`, `{r}` placeholders)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url_template: String,
    pub subdomains: String,
    pub attribution: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".to_string(),
            subdomains: "abcd".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            min_zoom: 0,
            max_zoom: 18,
        }
    }
}

impl TileLayerConfig {
    pub fn tile_url(&self, x: u32, y: u32, z: u8) -> String {
        let subdomains: Vec<char> = self.subdomains.chars().collect();
        let subdomain = if subdomains.is_empty() {
            String::new()
        } else {
            subdomains[(x as usize + y as usize) % subdomains.len()].to_string()
        };
        self.url_template
            .replace("{s}", &subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", "")
    }
}

/// One basemap tile positioned in viewport pixels
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    pub url: String,
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

/// Tiles covering the viewport. Fractional zoom scales the nearest integer level.
pub fn tiles_for_viewport(viewport: &MapViewport, layer: &TileLayerConfig) -> Vec<TilePlacement> {
    let tile_zoom = viewport.zoom.round().clamp(f64::from(layer.min_zoom), f64::from(layer.max_zoom));
    let z = tile_zoom as u8;
    let size = TILE_SIZE * 2f64.powf(viewport.zoom - tile_zoom);
    let Some(count) = 1i64.checked_shl(u32::from(z)).filter(|c| *c > 0) else {
        return Vec::new();
    };
    let origin = viewport.top_left_world();

    let x_start = (origin.x / size).floor() as i64;
    let x_end = ((origin.x + viewport.width) / size).ceil() as i64;
    let y_start = (origin.y / size).floor() as i64;
    let y_end = ((origin.y + viewport.height) / size).ceil() as i64;

    let mut tiles = Vec::new();
    for ty in y_start.max(0)..y_end.min(count) {
        for tx in x_start..x_end {
            let wrapped = tx.rem_euclid(count) as u32;
            tiles.push(TilePlacement {
                x: wrapped,
                y: ty as u32,
                z,
                url: layer.tile_url(wrapped, ty as u32, z),
                left: tx as f64 * size - origin.x,
                top: ty as f64 * size - origin.y,
                size,
            });
        }
    }
    tiles
}
