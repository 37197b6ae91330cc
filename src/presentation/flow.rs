use leptos::*;

use crate::application::{Dialogs, FAILURE_MESSAGE, PredictionService, PromptFlow, success_message};
use crate::config::InputFlow;
use crate::domain::housing::{FormField, PendingPrediction, StateName};
use crate::domain::logging::LogComponent;
use crate::domain::session::Completion;
use crate::global_state::{app_config, form_error, map_status, regions, session};
use crate::infrastructure::http::{GeoJsonClient, HttpPricePredictor};
use crate::infrastructure::services::BrowserDialogs;
use crate::{log_debug, log_error, log_warn};

/// Entry point for a click on a state.
pub fn on_region_clicked(region: StateName) {
    match app_config().input_flow {
        InputFlow::Modal => {
            form_error().set(None);
            if let Some(Err(e)) = session().try_update(|s| s.select_region(region)) {
                log_warn!(LogComponent::Presentation("Flow"), "⚠️ {e}");
            }
        }
        InputFlow::Prompt => run_prompt_flow(region),
    }
}

fn run_prompt_flow(region: StateName) {
    if session().with_untracked(|s| s.is_loading()) {
        log_debug!(LogComponent::Presentation("Flow"), "prompt skipped for {}: request in flight", region);
        return;
    }
    let flow = PromptFlow::new(BrowserDialogs);
    match flow.collect(&region) {
        Ok(Some(input)) => match session().try_update(|s| s.submit_direct(region, input)) {
            Some(Ok(pending)) => spawn_prediction(pending, InputFlow::Prompt),
            Some(Err(e)) => log_warn!(LogComponent::Presentation("Flow"), "⚠️ {e}"),
            None => {}
        },
        Ok(None) => log_debug!(LogComponent::Presentation("Flow"), "prompt flow aborted for {}", region),
        Err(e) => flow.dialogs().alert(&e.to_string()),
    }
}

/// Submit the modal form; validation problems stay inside the modal.
pub fn submit_form() {
    match session().try_update(|s| s.submit()) {
        Some(Ok(pending)) => {
            form_error().set(None);
            spawn_prediction(pending, InputFlow::Modal);
        }
        Some(Err(e)) if e.is_user_facing() => form_error().set(Some(e.to_string())),
        Some(Err(e)) => log_warn!(LogComponent::Presentation("Flow"), "⚠️ {e}"),
        None => {}
    }
}

pub fn edit_city(city: &str) {
    if let Some(Err(e)) = session().try_update(|s| s.set_city(city)) {
        log_debug!(LogComponent::Presentation("Flow"), "city edit ignored: {}", e);
    }
}

/// Slider input; unparsable text keeps the previous value.
pub fn edit_field(field: FormField, text: &str) {
    match session().try_update(|s| s.update_form(field, text)) {
        Some(Err(e)) if e.is_user_facing() => log_warn!(LogComponent::Presentation("Flow"), "⚠️ {e}"),
        Some(Err(e)) => log_debug!(LogComponent::Presentation("Flow"), "{} edit ignored: {}", field.as_ref(), e),
        _ => {}
    }
}

pub fn edit_again() {
    if let Some(Err(e)) = session().try_update(|s| s.edit_again()) {
        log_warn!(LogComponent::Presentation("Flow"), "⚠️ {e}");
    }
}

/// Close the modal unless a request is in flight.
pub fn close_modal() {
    if let Some(Err(e)) = session().try_update(|s| s.dismiss()) {
        log_debug!(LogComponent::Presentation("Flow"), "close ignored: {}", e);
    } else {
        form_error().set(None);
    }
}

fn spawn_prediction(pending: PendingPrediction, flow: InputFlow) {
    spawn_local(async move {
        let service = PredictionService::new(HttpPricePredictor::new(app_config().prediction_endpoint.clone()));
        let result = service.estimate(&pending).await;
        let completion = session().try_update(|s| s.complete(pending.ticket, result));

        match completion {
            Some(Completion::Shown(estimate)) => {
                if flow == InputFlow::Prompt {
                    BrowserDialogs.alert(&success_message(&estimate));
                    close_prompt_session();
                }
            }
            Some(Completion::Failed(_)) => {
                BrowserDialogs.alert(FAILURE_MESSAGE);
                if flow == InputFlow::Prompt {
                    close_prompt_session();
                }
            }
            Some(Completion::Stale) | None => {
                log_debug!(LogComponent::Presentation("Flow"), "dropped stale result #{}", pending.ticket);
            }
        }
    });
}

fn close_prompt_session() {
    if let Some(Err(e)) = session().try_update(|s| s.dismiss()) {
        log_warn!(LogComponent::Presentation("Flow"), "⚠️ prompt session left open: {e}");
    }
}

/// Fetch the state outlines once at startup.
pub fn load_regions() {
    map_status().set(Some("Loading states…".to_string()));
    spawn_local(async move {
        match GeoJsonClient::new(app_config().states_geojson_url.clone()).fetch_regions().await {
            Ok(collection) => {
                regions().set(collection);
                map_status().set(None);
            }
            Err(e) => {
                log_error!(LogComponent::Presentation("Map"), "❌ Failed to load GeoJSON: {e}");
                map_status().set(Some("Failed to load state outlines".to_string()));
            }
        }
    });
}
