use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::constants::{CITY_CENTER, COPYRIGHT, TILE_LAYER, ZOOM};
use crate::debounce::{Debounced, Scheduler};
use crate::filters::{FilterSelection, filter_listings};
use crate::models::{LatLng, Listing, format_coordinates};

/// The map widget: viewport, origin pin and the listing marker layer.
pub trait MapSurface {
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);
    fn set_view(&mut self, center: LatLng, zoom: f64);
    fn close_popup(&mut self);
    fn move_origin(&mut self, to: LatLng);
    fn clear_markers(&mut self);
    /// Draw one marker for `listing` with its popup bound.
    fn add_marker(&mut self, listing: &Listing);
}

/// The filter controls above the map.
pub trait FilterForm {
    fn read_selection(&self) -> FilterSelection;
    /// Restore every control to its default state.
    fn reset(&mut self);
}

/// Text field that receives the origin pin coordinates.
pub trait AddressField {
    fn set_address(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapPhase {
    Uninitialized,
    /// Tiles requested, waiting for the map's load signal.
    Loading,
    Ready,
    Filtered,
    Reset,
}

/// Sole owner of the map state for one page load.
///
/// The drawn markers are always `filter_listings(current, selection)`; every
/// redraw clears the layer and repopulates it instead of patching it.
pub struct MapController<M, F> {
    map: M,
    filters: F,
    phase: MapPhase,
    // full set as fetched, set once
    listings: Option<Rc<[Listing]>>,
    current: Rc<[Listing]>,
    selection: FilterSelection,
    drawn: usize,
}

impl<M: MapSurface, F: FilterForm> MapController<M, F> {
    pub fn new(map: M, filters: F) -> Self {
        let selection = filters.read_selection();
        MapController {
            map,
            filters,
            phase: MapPhase::Uninitialized,
            listings: None,
            current: Rc::from(Vec::new()),
            selection,
            drawn: 0,
        }
    }

    fn transition(&mut self, next: MapPhase) {
        if self.phase != next {
            debug!("map phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    /// Center the map and add the tile layer. The caller listens for the
    /// map's load signal and forwards it to [`Self::on_map_ready`].
    pub fn render_map(&mut self) {
        if self.phase != MapPhase::Uninitialized {
            warn!("map already rendered");
            return;
        }
        self.transition(MapPhase::Loading);
        self.map.set_view(CITY_CENTER, ZOOM);
        self.map.add_tile_layer(TILE_LAYER, COPYRIGHT);
    }

    /// Returns `true` only for the first load signal.
    pub fn on_map_ready(&mut self) -> bool {
        if self.phase != MapPhase::Loading {
            return false;
        }
        self.transition(MapPhase::Ready);
        true
    }

    /// Store the fetched listings and draw the first marker set.
    pub fn render_markers(&mut self, listings: Vec<Listing>) {
        if self.listings.is_some() {
            warn!("listings already loaded, dropping {} records", listings.len());
            return;
        }
        if matches!(self.phase, MapPhase::Uninitialized | MapPhase::Loading) {
            warn!("listings arrived before the map was ready");
        }
        let full: Rc<[Listing]> = Rc::from(listings);
        self.listings = Some(Rc::clone(&full));
        self.create_markers(full);
    }

    /// Make `listings` current and draw the ones the live selection accepts.
    pub fn create_markers(&mut self, listings: Rc<[Listing]>) {
        self.current = listings;
        self.draw();
    }

    fn draw(&mut self) {
        let current = Rc::clone(&self.current);
        let mut drawn = 0;
        for listing in filter_listings(&current, &self.selection) {
            self.map.add_marker(listing);
            drawn += 1;
        }
        self.drawn = drawn;
        debug!("drew {drawn} of {} listings", current.len());
    }

    /// Re-read the form and redraw from the current set.
    pub fn on_filter_change(&mut self) {
        self.selection = self.filters.read_selection();
        self.map.clear_markers();
        self.draw();
        self.transition(MapPhase::Filtered);
    }

    /// Put the viewport, origin pin, address and filters back to their
    /// defaults and redraw everything the default filters accept.
    /// Ignored until the map has loaded.
    pub fn reset_map<A: AddressField + ?Sized>(&mut self, address: &mut A) {
        if matches!(self.phase, MapPhase::Uninitialized | MapPhase::Loading) {
            warn!("reset requested before the map loaded");
            return;
        }
        self.transition(MapPhase::Reset);
        self.map.close_popup();
        self.map.move_origin(CITY_CENTER);
        self.map.set_view(CITY_CENTER, ZOOM);
        address.set_address(&format_coordinates(CITY_CENTER));

        self.filters.reset();
        self.selection = self.filters.read_selection();
        // Nothing was ever drawn without listings, so leave the layer alone.
        if let Some(full) = self.listings.clone() {
            self.map.clear_markers();
            self.create_markers(full);
            self.transition(MapPhase::Filtered);
        }
    }

    /// Write the default origin into `address`. Later drags arrive through
    /// [`Self::on_origin_moved`] for the rest of the page's life.
    pub fn render_main_pin_coordinates<A: AddressField + ?Sized>(&mut self, address: &mut A) {
        address.set_address(&format_coordinates(CITY_CENTER));
    }

    pub fn on_origin_moved<A: AddressField + ?Sized>(&mut self, at: LatLng, address: &mut A) {
        debug!("origin moved to {at:?}");
        address.set_address(&format_coordinates(at));
    }

    pub fn phase(&self) -> MapPhase {
        self.phase
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn listings(&self) -> Option<&[Listing]> {
        self.listings.as_deref()
    }

    /// Number of markers on the layer after the last redraw.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

/// Queue a debounced [`MapController::on_filter_change`]. The task holds a
/// weak reference so a pending timer never keeps the controller alive.
pub fn schedule_filter_change<S, M, F>(
    debounce: &Debounced<S>,
    controller: &Rc<RefCell<MapController<M, F>>>,
) where
    S: Scheduler,
    M: MapSurface + 'static,
    F: FilterForm + 'static,
{
    let weak = Rc::downgrade(controller);
    debounce.call(move || {
        if let Some(controller) = weak.upgrade() {
            controller.borrow_mut().on_filter_change();
        }
    });
}
