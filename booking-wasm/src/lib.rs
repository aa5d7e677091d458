use wasm_bindgen::prelude::*;

mod activity;
mod card;
mod constants;
mod data;
mod form;
mod map;
mod state;
mod surface;
mod upload;
mod utils;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    utils::init_logger();
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    // Nothing is usable until the map has loaded.
    activity::inactivate_form(&document)?;
    activity::inactivate_filters(&document)?;
    map::render_map(&document)?;
    Ok(())
}
