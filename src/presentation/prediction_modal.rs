use leptos::*;
use strum::IntoEnumIterator;

use super::flow;
use crate::domain::housing::FormField;
use crate::domain::session::SessionPhase;
use crate::event_utils::on_escape;
use crate::global_state::{form_error, session};

/// Modal flow: city + sliders → spinner → result panel
#[component]
pub fn PredictionModal() -> impl IntoView {
    let session = session();
    let is_open = create_memo(move |_| session.with(|s| s.modal_open()));
    let showing_result = create_memo(move |_| session.with(|s| s.estimate().is_some()));
    let title = move || {
        session.with(|s| s.selected_region().map(|r| format!("🏠 {r}")).unwrap_or_default())
    };

    let escape = on_escape(flow::close_modal);
    on_cleanup(move || drop(escape));

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| flow::close_modal()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">{title}</h2>
                    <Show when=move || showing_result.get() fallback=|| view! { <InputPanel/> }>
                        <ResultPanel/>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn InputPanel() -> impl IntoView {
    let session = session();
    let form_error = form_error();
    let loading = create_memo(move |_| session.with(|s| s.is_loading()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        flow::submit_form();
    };
    let on_city = move |ev: ev::Event| {
        flow::edit_city(&event_target_value(&ev));
    };

    view! {
        <form class="prediction-form" on:submit=on_submit>
            <label class="text-field">
                <span>"City / borough"</span>
                <input
                    type="text"
                    placeholder="e.g. Brooklyn"
                    prop:value=move || session.with(|s| s.form().city.clone())
                    on:input=on_city
                    disabled=move || loading.get()
                />
            </label>
            {FormField::iter().map(|field| view! { <SliderField field=field/> }).collect_view()}
            {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <div class="modal-actions">
                <button type="submit" class="primary-btn" disabled=move || loading.get()>
                    {move || if loading.get() { "Estimating…" } else { "Estimate price" }}
                </button>
                <button type="button" class="secondary-btn" on:click=move |_| flow::close_modal() disabled=move || loading.get()>
                    "Cancel"
                </button>
            </div>
            <Show when=move || loading.get()>
                <div class="spinner" role="status" aria-label="Loading"></div>
            </Show>
        </form>
    }
}

#[component]
fn SliderField(field: FormField) -> impl IntoView {
    let session = session();
    let range = field.range();
    let value = move || session.with(|s| s.form().get(field));

    let on_input = move |ev: ev::Event| {
        flow::edit_field(field, &event_target_value(&ev));
    };

    view! {
        <label class="slider-field">
            <span class="slider-label">{field.label()}": "<strong>{value}</strong></span>
            <input
                type="range"
                name=field.as_ref().to_string()
                min=*range.start()
                max=*range.end()
                step=field.step()
                prop:value=move || value().to_string()
                on:input=on_input
                disabled=move || session.with(|s| s.is_loading())
            />
        </label>
    }
}

#[component]
fn ResultPanel() -> impl IntoView {
    let session = session();
    let summary = move || {
        session.with(|s| match s.phase() {
            SessionPhase::ShowingResult { input, estimate, .. } => Some((
                estimate.to_string(),
                format!(
                    "{} · {} bd · {} ba · {} sqft",
                    input.city(),
                    input.bedrooms(),
                    input.bathrooms(),
                    input.square_footage()
                ),
            )),
            _ => None,
        })
    };

    view! {
        <div class="result-panel">
            <p class="result-label">"Estimated price"</p>
            <p class="result-value">{move || summary().map(|(price, _)| price).unwrap_or_default()}</p>
            <p class="result-detail">{move || summary().map(|(_, detail)| detail).unwrap_or_default()}</p>
            <div class="modal-actions">
                <button type="button" class="primary-btn" on:click=move |_| flow::edit_again()>"Estimate again"</button>
                <button type="button" class="secondary-btn" on:click=move |_| flow::close_modal()>"Close"</button>
            </div>
        </div>
    }
}
