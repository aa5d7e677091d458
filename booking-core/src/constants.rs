/// Page-wide constants shared by the map controller and the browser layer.
use crate::models::LatLng;

/// Endpoint returning every published listing as a JSON array.
pub const DATA_URL: &str = "https://30.javascript.pages.academy/keksobooking/data";

pub const TILE_LAYER: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const COPYRIGHT: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const ZOOM: f64 = 13.0;
/// Digits after the decimal point in the address field.
pub const DECIMAL_PLACES: usize = 5;

/// Where the origin pin starts and returns to on reset.
pub const CITY_CENTER: LatLng = LatLng {
    lat: 35.67640,
    lng: 139.76134,
};

/// Window in which filter toggles are coalesced into one redraw.
pub const DEBOUNCE_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug)]
pub struct IconConfig {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub anchor_x: u32,
    pub anchor_y: u32,
}

pub const MAIN_ICON: IconConfig = IconConfig {
    url: "img/main-pin.svg",
    width: 52,
    height: 52,
    anchor_x: 26,
    anchor_y: 52,
};

pub const PIN_ICON: IconConfig = IconConfig {
    url: "img/pin.svg",
    width: 40,
    height: 40,
    anchor_x: 20,
    anchor_y: 40,
};

#[derive(Clone, Copy, Debug)]
pub struct PhotoOptions {
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
    pub default_src: &'static str,
}

pub const PHOTO: PhotoOptions = PhotoOptions {
    alt: "Фото вашего жилья",
    width: 70,
    height: 70,
    default_src: "img/muffin-grey.svg",
};
