use std::cell::RefCell;
use std::rc::Rc;

use booking_core::{Debounced, MapController};
use leaflet::Marker;
use web_sys::{Document, HtmlFormElement};

use crate::map::TimeoutScheduler;
use crate::surface::{AddressInput, DomFilterForm, LeafletSurface};

pub type Controller = MapController<LeafletSurface, DomFilterForm>;

/// Everything the page's event handlers share, built once per page load.
pub struct App {
    pub document: Document,
    pub controller: Rc<RefCell<Controller>>,
    pub filters: HtmlFormElement,
    pub address: AddressInput,
    pub main_pin: Marker,
    pub filter_change: Debounced<TimeoutScheduler>,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

pub fn install(app: App) {
    APP.with(|slot| slot.replace(Some(Rc::new(app))));
}

/// Run `f` against the installed app. The slot is released before `f` runs so
/// handlers may reenter.
pub fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
    let app = APP.with(|slot| slot.borrow().clone())?;
    Some(f(&app))
}
