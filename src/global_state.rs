use leptos::*;
use once_cell::sync::OnceCell;

use crate::config::AppConfig;
use crate::domain::geo::RegionCollection;
use crate::domain::housing::StateName;
use crate::domain::session::PredictionSession;
use crate::global_signals;
use crate::view_state::MapViewport;

pub struct Globals {
    pub session: RwSignal<PredictionSession>,
    pub regions: RwSignal<RegionCollection>,
    pub hovered_region: RwSignal<Option<StateName>>,
    pub viewport: RwSignal<MapViewport>,
    pub map_status: RwSignal<Option<String>>,
    pub form_error: RwSignal<Option<String>>,
    pub is_dragging: RwSignal<bool>,
    pub last_mouse_x: RwSignal<f64>,
    pub last_mouse_y: RwSignal<f64>,
    /// Pixels moved since the last mousedown; large values turn a click into a drag.
    pub drag_travel: RwSignal<f64>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();
static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// First call wins; later calls keep the original config.
pub fn install_config(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| {
        let config = app_config();
        Globals {
            session: create_rw_signal(PredictionSession::new()),
            regions: create_rw_signal(RegionCollection::default()),
            hovered_region: create_rw_signal(None),
            viewport: create_rw_signal(MapViewport::from_settings(
                &config.map,
                crate::view_state::VIEWPORT_WIDTH,
                crate::view_state::VIEWPORT_HEIGHT,
            )),
            map_status: create_rw_signal(None),
            form_error: create_rw_signal(None),
            is_dragging: create_rw_signal(false),
            last_mouse_x: create_rw_signal(0.0),
            last_mouse_y: create_rw_signal(0.0),
            drag_travel: create_rw_signal(0.0),
        }
    })
}

global_signals! {
    pub session => session: PredictionSession,
    pub regions => regions: RegionCollection,
    pub hovered_region => hovered_region: Option<StateName>,
    pub viewport => viewport: MapViewport,
    pub map_status => map_status: Option<String>,
    pub form_error => form_error: Option<String>,
    pub is_dragging => is_dragging: bool,
    pub last_mouse_x => last_mouse_x: f64,
    pub last_mouse_y => last_mouse_y: f64,
    pub drag_travel => drag_travel: f64,
}
