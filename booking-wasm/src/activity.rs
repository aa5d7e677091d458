//! Enables and disables the advert form and the map filters.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{AD_FORM, AD_FORM_DISABLED, MAP_FILTERS, MAP_FILTERS_DISABLED};
use crate::utils::{select, select_all_in};

fn set_activity(
    document: &Document,
    form_selector: &str,
    disabled_class: &str,
    controls: &str,
    active: bool,
) -> Result<(), JsValue> {
    let form: Element = select(document, form_selector)?;
    form.class_list().toggle_with_force(disabled_class, !active)?;
    for control in select_all_in::<Element>(&form, controls)? {
        if active {
            control.remove_attribute("disabled")?;
        } else {
            control.set_attribute("disabled", "")?;
        }
    }
    Ok(())
}

pub fn inactivate_form(document: &Document) -> Result<(), JsValue> {
    set_activity(document, AD_FORM, AD_FORM_DISABLED, "fieldset", false)
}

pub fn activate_form(document: &Document) -> Result<(), JsValue> {
    set_activity(document, AD_FORM, AD_FORM_DISABLED, "fieldset", true)
}

pub fn inactivate_filters(document: &Document) -> Result<(), JsValue> {
    set_activity(document, MAP_FILTERS, MAP_FILTERS_DISABLED, "select, fieldset", false)
}

pub fn activate_filters(document: &Document) -> Result<(), JsValue> {
    set_activity(document, MAP_FILTERS, MAP_FILTERS_DISABLED, "select, fieldset", true)
}
