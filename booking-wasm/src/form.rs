use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlFormElement;

use crate::constants::AD_FORM;
use crate::map;
use crate::state::{App, with_app};
use crate::upload::{self, ImagePreviews};
use crate::utils::select;

/// Wire the advert form: read-only address bound to the origin pin, image
/// previews, and a reset that also restores the map.
pub fn init_form(app: &App) -> Result<(), JsValue> {
    let ad_form: HtmlFormElement = select(&app.document, AD_FORM)?;
    app.address.0.set_read_only(true);
    map::render_main_pin_coordinates(app);

    let previews = Rc::new(ImagePreviews::new(app.document.clone(), &ad_form)?);
    upload::attach_file_inputs(previews.clone(), &ad_form)?;

    let onreset = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let previews = previews.clone();
        // The browser restores field values after the reset event returns.
        Timeout::new(0, move || {
            previews.reset_images();
            with_app(map::reset_map);
        })
        .forget();
    }));
    ad_form.add_event_listener_with_callback("reset", onreset.as_ref().unchecked_ref())?;
    onreset.forget();
    Ok(())
}
