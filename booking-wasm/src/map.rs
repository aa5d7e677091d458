use std::cell::RefCell;
use std::rc::Rc;

use booking_core::constants::{DATA_URL, DEBOUNCE_DELAY_MS};
use booking_core::controller::schedule_filter_change;
use booking_core::{Debounced, Listing, MapController, Scheduler};
use gloo_timers::callback::Timeout;
use leaflet::{Map, MapOptions};
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::activity;
use crate::constants::{AD_FORM, ADDRESS, MAP_CANVAS, MAP_FILTERS};
use crate::data::load_listings;
use crate::form;
use crate::state::{self, App, with_app};
use crate::surface::{AddressInput, DomFilterForm, LeafletSurface, from_leaflet};
use crate::utils::select;

/// Browser timers; dropping the `Timeout` clears it.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Pending = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Create the map and wait for it to load before enabling anything.
pub fn render_map(document: &Document) -> Result<(), JsValue> {
    let container: HtmlElement = select(document, MAP_CANVAS)?;
    let filters: HtmlFormElement = select(document, MAP_FILTERS)?;
    let address: HtmlInputElement = select(document, &format!("{AD_FORM} {ADDRESS}"))?;

    let map = Map::new_with_element(&container, &MapOptions::default());
    let surface = LeafletSurface::new(document.clone(), map.clone());
    let main_pin = surface.main_pin().clone();
    let controller = Rc::new(RefCell::new(MapController::new(
        surface,
        DomFilterForm::new(filters.clone()),
    )));
    state::install(App {
        document: document.clone(),
        controller: controller.clone(),
        filters,
        address: AddressInput(address),
        main_pin,
        filter_change: Debounced::new(TimeoutScheduler, DEBOUNCE_DELAY_MS),
    });

    let onload = Closure::<dyn FnMut()>::wrap(Box::new(|| {
        // Leaflet fires `load` from inside setView, while the controller is
        // still borrowed by render_map.
        spawn_local(async {
            with_app(on_map_ready);
        });
    }));
    map.on("load", onload.as_ref().unchecked_ref());
    onload.forget();

    controller.borrow_mut().render_map();
    Ok(())
}

fn on_map_ready(app: &App) {
    if !app.controller.borrow_mut().on_map_ready() {
        return;
    }
    if let Err(e) = form::init_form(app) {
        warn!("advert form setup failed: {e:?}");
    }
    if let Err(e) = activity::activate_form(&app.document) {
        warn!("activating advert form failed: {e:?}");
    }
    if let Err(e) = bind_filter_change(app) {
        warn!("filter listener not bound: {e:?}");
    }
    load_listings(DATA_URL, render_markers, |e| {
        // The map simply stays without markers.
        warn!("listings unavailable: {e}");
    });
}

fn render_markers(listings: Vec<Listing>) {
    with_app(|app| {
        app.controller.borrow_mut().render_markers(listings);
        if let Err(e) = activity::activate_filters(&app.document) {
            warn!("activating filters failed: {e:?}");
        }
    });
}

fn bind_filter_change(app: &App) -> Result<(), JsValue> {
    let onchange = Closure::<dyn FnMut()>::wrap(Box::new(|| {
        with_app(|app| schedule_filter_change(&app.filter_change, &app.controller));
    }));
    app.filters
        .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
    onchange.forget();
    Ok(())
}

/// Fill the address field with the default origin and keep it in sync with
/// every drag of the origin pin.
pub fn render_main_pin_coordinates(app: &App) {
    app.controller
        .borrow_mut()
        .render_main_pin_coordinates(&mut app.address.clone());

    let pin = app.main_pin.clone();
    let onmoveend = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let at = from_leaflet(&pin.get_lat_lng());
        with_app(|app| {
            app.controller
                .borrow_mut()
                .on_origin_moved(at, &mut app.address.clone())
        });
    }));
    app.main_pin.on("moveend", onmoveend.as_ref().unchecked_ref());
    onmoveend.forget();
}

pub fn reset_map(app: &App) {
    app.controller
        .borrow_mut()
        .reset_map(&mut app.address.clone());
}
