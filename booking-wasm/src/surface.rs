//! DOM and Leaflet implementations of the controller's seams.

use booking_core::constants::{CITY_CENTER, IconConfig, MAIN_ICON, PIN_ICON};
use booking_core::{AddressField, FilterForm, FilterSelection, Listing, MapSurface};
use leaflet::{
    Icon, IconOptions, LayerGroup, Map, Marker, MarkerOptions, Point, Popup, PopupOptions,
    TileLayer, TileLayerOptions,
};
use log::warn;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::card::render_card;
use crate::constants::{CHECKED_FILTERS, SELECT_FILTERS};
use crate::utils::{asset_url, select_all_in};

pub fn to_leaflet(at: booking_core::LatLng) -> leaflet::LatLng {
    leaflet::LatLng::new(at.lat, at.lng)
}

pub fn from_leaflet(at: &leaflet::LatLng) -> booking_core::LatLng {
    booking_core::LatLng {
        lat: at.lat(),
        lng: at.lng(),
    }
}

fn icon(config: &IconConfig) -> Icon {
    let options = IconOptions::new();
    options.set_icon_url(asset_url(config.url));
    options.set_icon_size(Point::new(f64::from(config.width), f64::from(config.height)));
    options.set_icon_anchor(Point::new(
        f64::from(config.anchor_x),
        f64::from(config.anchor_y),
    ));
    Icon::new(&options)
}

pub struct LeafletSurface {
    document: Document,
    map: Map,
    main_pin: Marker,
    markers: LayerGroup,
    // markers currently in the group, for closing their popups
    drawn: Vec<Marker>,
}

impl LeafletSurface {
    /// Adds the draggable origin pin and an empty marker group to `map`.
    pub fn new(document: Document, map: Map) -> Self {
        let options = MarkerOptions::new();
        options.set_draggable(true);
        options.set_icon(icon(&MAIN_ICON));
        let main_pin = Marker::new_with_options(&to_leaflet(CITY_CENTER), &options);
        main_pin.add_to(&map);

        let markers = LayerGroup::new();
        markers.add_to(&map);
        LeafletSurface {
            document,
            map,
            main_pin,
            markers,
            drawn: Vec::new(),
        }
    }

    pub fn main_pin(&self) -> &Marker {
        &self.main_pin
    }
}

impl MapSurface for LeafletSurface {
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        let options = TileLayerOptions::new();
        options.set_attribution(attribution.to_string());
        TileLayer::new_options(url_template, &options).add_to(&self.map);
    }

    fn set_view(&mut self, center: booking_core::LatLng, zoom: f64) {
        self.map.set_view(&to_leaflet(center), zoom);
    }

    fn close_popup(&mut self) {
        for marker in &self.drawn {
            marker.close_popup();
        }
    }

    fn move_origin(&mut self, to: booking_core::LatLng) {
        self.main_pin.set_lat_lng(&to_leaflet(to));
    }

    fn clear_markers(&mut self) {
        self.markers.clear_layers();
        self.drawn.clear();
    }

    fn add_marker(&mut self, listing: &Listing) {
        let options = MarkerOptions::new();
        options.set_icon(icon(&PIN_ICON));
        let marker = Marker::new_with_options(&to_leaflet(listing.location), &options);
        self.markers.add_layer(&marker);
        match render_card(&self.document, listing) {
            Ok(card) => {
                let popup = Popup::new(&PopupOptions::default(), None);
                popup.set_content(&card);
                marker.bind_popup(&popup);
            }
            Err(e) => warn!("popup for marker skipped: {e:?}"),
        }
        self.drawn.push(marker);
    }
}

/// The `.map__filters` form.
pub struct DomFilterForm {
    form: HtmlFormElement,
}

impl DomFilterForm {
    pub fn new(form: HtmlFormElement) -> Self {
        DomFilterForm { form }
    }
}

impl FilterForm for DomFilterForm {
    fn read_selection(&self) -> FilterSelection {
        let mut selection = FilterSelection::default();
        match select_all_in::<HtmlInputElement>(&self.form, CHECKED_FILTERS) {
            Ok(boxes) => boxes.iter().for_each(|b| selection.push_value(&b.value())),
            Err(e) => warn!("reading checkboxes failed: {e:?}"),
        }
        match select_all_in::<HtmlSelectElement>(&self.form, SELECT_FILTERS) {
            Ok(selects) => selects
                .iter()
                .for_each(|s| selection.push_control(&s.name(), &s.value())),
            Err(e) => warn!("reading selects failed: {e:?}"),
        }
        selection
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

/// The read-only `#address` input of the advert form.
#[derive(Clone)]
pub struct AddressInput(pub HtmlInputElement);

impl AddressField for AddressInput {
    fn set_address(&mut self, text: &str) {
        self.0.set_value(text);
    }
}
