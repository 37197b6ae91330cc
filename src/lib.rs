use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::domain::logging::{LogComponent, LogLevel};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod view_state;

/// Initialize services and mount the Leptos app
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (config, problem) = AppConfig::resolve(AppConfig::read_inline().as_deref());
    let level = config.level().unwrap_or(LogLevel::Debug);
    domain::logging::init_logger(Box::new(ConsoleLogger::new(level)));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    if let Some(e) = problem {
        log_warn!(LogComponent::Infrastructure("Config"), "⚠️ {e}; using defaults");
    }

    let config = global_state::install_config(config);
    log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Home price map starting ({} flow, endpoint {})",
        config.input_flow.as_ref(),
        config.prediction_endpoint
    );

    leptos::mount_to_body(|| leptos::view! { <app::App/> });
}
