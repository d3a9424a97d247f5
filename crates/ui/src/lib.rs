//! WASM frontend for the revenue dashboard
//! Wires the page, `localStorage` and the frame loop to the core `Dashboard`

mod dom;
mod render;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;
use revenue_dashboard_core::{Dashboard, DashboardConfig, RevenueField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Window};

use crate::dom::{get_document, WebSurface, CONFIG_ID, THEME_TOGGLE_ID};
use crate::render::FrameLoop;
use crate::storage::LocalStore;

pub(crate) type WebDashboard = Dashboard<WebSurface, LocalStore>;

/// Page-lifetime state shared by event handlers and the frame loop
struct App {
    dashboard: Rc<RefCell<WebDashboard>>,
    frames: Rc<FrameLoop>,
}

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

fn app() -> Option<Rc<App>> {
    APP.with(|app| app.borrow().clone())
}

/// `performance.now()`, the clock requestAnimationFrame timestamps use
fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

fn prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Optional `<script type="application/json" id="dashboardConfig">` block
fn load_config(document: &Document) -> DashboardConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return DashboardConfig::default();
    };

    DashboardConfig::from_json(&raw).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[Dashboard] {e}, using defaults").into());
        DashboardConfig::default()
    })
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = get_document().ok_or_else(|| JsValue::from_str("no document on window"))?;

    let config = load_config(&document);
    let store = LocalStore::from_window(&window);
    let surface = WebSurface::new(document.clone());
    let dashboard = Rc::new(RefCell::new(Dashboard::new(surface, store, config)));
    let frames = FrameLoop::new(dashboard.clone());
    let app = Rc::new(App { dashboard, frames });
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    app.dashboard.borrow_mut().init_theme(prefers_dark(&window));
    setup_theme_toggle(&document)?;
    let reveal_after = app.dashboard.borrow_mut().start(now());

    if let Some(delay) = reveal_after {
        schedule_reveal(&window, &app, delay);
    }
    app.frames.request_frame();

    web_sys::console::log_1(&"[Dashboard] Ready".into());
    Ok(())
}

fn setup_theme_toggle(document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return Ok(());
    };
    let onclick = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        toggle_theme();
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

/// Hide the skeleton and show the dashboard after `delay` ms
fn schedule_reveal(window: &Window, app: &Rc<App>, delay: u32) {
    let dashboard = app.dashboard.clone();
    let callback = Closure::once(Box::new(move || {
        dashboard.borrow_mut().reveal();
    }) as Box<dyn FnOnce()>);

    let delay = i32::try_from(delay).unwrap_or(i32::MAX);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        )
        .is_err()
    {
        web_sys::console::warn_1(&"[Dashboard] setTimeout failed, revealing now".into());
        app.dashboard.borrow_mut().reveal();
    }
    callback.forget();
}

fn update(field: RevenueField) {
    if let Some(app) = app() {
        app.dashboard.borrow_mut().update_field(field, now());
        app.frames.request_frame();
    }
}

/// Total revenue input handler
#[wasm_bindgen(js_name = updateRevenue)]
pub fn update_revenue() {
    update(RevenueField::Total);
}

/// Today's revenue input handler
#[wasm_bindgen(js_name = updateTodayRevenue)]
pub fn update_today_revenue() {
    update(RevenueField::Today);
}

/// Target revenue input handler
#[wasm_bindgen(js_name = updateTargetRevenue)]
pub fn update_target_revenue() {
    update(RevenueField::Target);
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    if let Some(app) = app() {
        app.dashboard.borrow_mut().toggle_theme();
    }
}

/// Current `[today, total, target]`
#[wasm_bindgen(js_name = revenueSnapshot)]
pub fn revenue_snapshot() -> js_sys::Array {
    let values = app().map(|app| app.dashboard.borrow().revenue().to_array());
    values
        .unwrap_or_default()
        .iter()
        .map(|&v| JsValue::from_f64(v as f64))
        .collect()
}
