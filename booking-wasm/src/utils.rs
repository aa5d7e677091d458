use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// `log` backend writing to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route `log` records to the console. Debug builds also show `debug!`.
pub fn init_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
    }
}

/// Build an absolute URL for an asset, taking into account the optional
/// `window.__BASE_URL` which is set by the host page.
pub fn asset_url(path: &str) -> String {
    let p = path.trim();
    if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
        return p.to_string();
    }
    let base = web_sys::window()
        .and_then(|w| {
            let v = js_sys::Reflect::get(&w, &JsValue::from_str("__BASE_URL")).ok()?;
            v.as_string()
        })
        .unwrap_or_default();
    if base.is_empty() {
        return p.to_string();
    }
    let base = base.trim_end_matches('/');
    format!("{}/{}", base, p.trim_start_matches('/'))
}

/// First element under `document` matching `selector`, as `T`.
pub fn select<T: JsCast>(document: &Document, selector: &str) -> Result<T, JsValue> {
    let el = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("{selector} not found")))?;
    cast(el, selector)
}

/// First element under `parent` matching `selector`, as `T`.
pub fn select_in<T: JsCast>(parent: &Element, selector: &str) -> Result<T, JsValue> {
    let el = parent
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("{selector} not found")))?;
    cast(el, selector)
}

/// Every element under `parent` matching `selector` that is a `T`.
pub fn select_all_in<T: JsCast>(parent: &Element, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = parent.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

fn cast<T: JsCast>(el: Element, selector: &str) -> Result<T, JsValue> {
    el.dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("{selector} has an unexpected element type")))
}
