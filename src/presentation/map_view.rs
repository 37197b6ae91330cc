use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, WheelEvent};

use super::flow;
use crate::domain::geo::{PathStyle, Point, Region, tiles_for_viewport};
use crate::global_state::{
    app_config, drag_travel, hovered_region, is_dragging, last_mouse_x, last_mouse_y, map_status, regions, viewport,
};
use crate::view_state::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Mouse travel (screen px) above which a press is a drag, not a click.
pub const CLICK_TOLERANCE_PX: f64 = 4.0;

/// Ratio between logical viewBox units and rendered CSS pixels.
fn view_scale(ev: &MouseEvent) -> Option<(web_sys::DomRect, f64)> {
    let target = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = target.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return None;
    }
    let scale = VIEWPORT_WIDTH / rect.width();
    Some((rect, scale))
}

fn logical_point(ev: &MouseEvent) -> Option<Point> {
    let (rect, scale) = view_scale(ev)?;
    Some(Point::new(
        (f64::from(ev.client_x()) - rect.left()) * scale,
        (f64::from(ev.client_y()) - rect.top()) * scale,
    ))
}

/// 🗺️ Interactive state map drawn as SVG over raster tiles
#[component]
pub fn MapView() -> impl IntoView {
    let config = app_config();
    let viewport = viewport();
    let regions = regions();
    let hovered = hovered_region();

    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        let Some(anchor) = logical_point(&ev) else { return };
        let steps = if ev.delta_y() < 0.0 { 1.0 } else { -1.0 };
        viewport.update(|v| v.zoom_by(steps, anchor));
    };

    let on_mouse_down = move |ev: MouseEvent| {
        is_dragging().set(true);
        drag_travel().set(0.0);
        last_mouse_x().set(f64::from(ev.client_x()));
        last_mouse_y().set(f64::from(ev.client_y()));
    };

    let on_mouse_move = move |ev: MouseEvent| {
        if !is_dragging().get_untracked() {
            return;
        }
        let x = f64::from(ev.client_x());
        let y = f64::from(ev.client_y());
        let dx = x - last_mouse_x().get_untracked();
        let dy = y - last_mouse_y().get_untracked();
        last_mouse_x().set(x);
        last_mouse_y().set(y);
        drag_travel().update(|t| *t += dx.abs() + dy.abs());

        let scale = view_scale(&ev).map(|(_, s)| s).unwrap_or(1.0);
        viewport.update(|v| v.pan(dx * scale, dy * scale));
    };

    let stop_drag = move |_: MouseEvent| is_dragging().set(false);

    let hovered_path = move || {
        let name = hovered.get()?;
        let d = regions.with(|rc| rc.find(name.value()).map(|r| viewport.with(|v| v.region_path(r))))?;
        let style = PathStyle::hovered_region();
        Some(view! {
            <path
                class="region-highlight"
                d=d
                fill="none"
                stroke=style.color
                stroke-width=style.weight
                stroke-opacity=style.opacity
                pointer-events="none"
            />
        })
    };

    view! {
        <div class="map-container">
            <svg
                class="map-svg"
                viewBox=format!("0 0 {VIEWPORT_WIDTH} {VIEWPORT_HEIGHT}")
                on:wheel=on_wheel
                on:mousedown=on_mouse_down
                on:mousemove=on_mouse_move
                on:mouseup=stop_drag
                on:mouseleave=stop_drag
            >
                <g class="tile-layer">
                    {move || {
                        viewport.with(|v| tiles_for_viewport(v, &config.tiles))
                            .into_iter()
                            .map(|tile| view! {
                                <image
                                    href=tile.url
                                    x=tile.left
                                    y=tile.top
                                    width=tile.size
                                    height=tile.size
                                    preserveAspectRatio="none"
                                />
                            })
                            .collect_view()
                    }}
                </g>
                <g class="region-layer">
                    <For
                        each=move || regions.with(|rc| rc.regions().iter().cloned().map(Rc::new).collect::<Vec<_>>())
                        key=|region| region.name.clone()
                        children=move |region| view! { <RegionPath region=region/> }
                    />
                    {hovered_path}
                </g>
            </svg>
            <div class="map-overlay">
                {move || hovered.get().map(|name| view! { <div class="hover-label">{name.to_string()}</div> })}
                {move || map_status().get().map(|status| view! { <div class="map-status">{status}</div> })}
            </div>
            <div class="attribution">{config.tiles.attribution.clone()}</div>
        </div>
    }
}

#[component]
fn RegionPath(region: Rc<Region>) -> impl IntoView {
    let viewport = viewport();
    let hovered = hovered_region();
    let name = region.name.clone();

    let is_hovered = {
        let name = name.clone();
        create_memo(move |_| hovered.with(|h| h.as_ref() == Some(&name)))
    };
    let style = move || PathStyle::for_hover(is_hovered.get());
    let d = move || viewport.with(|v| v.region_path(&region));

    let enter_name = name.clone();
    let on_enter = move |_: MouseEvent| hovered.set(Some(enter_name.clone()));
    let on_leave = move |_: MouseEvent| {
        if is_hovered.get_untracked() {
            hovered.set(None);
        }
    };
    let on_click = move |_: MouseEvent| {
        if drag_travel().get_untracked() <= CLICK_TOLERANCE_PX {
            flow::on_region_clicked(name.clone());
        }
    };

    view! {
        <path
            class="region"
            d=d
            fill=move || style().fill_color
            fill-opacity=move || style().fill_opacity
            stroke=move || style().color
            stroke-width=move || style().weight
            stroke-opacity=move || style().opacity
            fill-rule="evenodd"
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:click=on_click
        />
    }
}
