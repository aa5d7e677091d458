//! Selectors forming the contract with the page markup.

pub const AD_FORM: &str = ".ad-form";
pub const AD_FORM_DISABLED: &str = "ad-form--disabled";
pub const ADDRESS: &str = "#address";
pub const AVATAR_INPUT: &str = "#avatar";
pub const IMAGES_INPUT: &str = "#images";
pub const AVATAR_PREVIEW: &str = ".ad-form-header__preview img";
pub const PHOTO_CONTAINER: &str = ".ad-form__photo";

pub const MAP_CANVAS: &str = ".map__canvas";
pub const MAP_FILTERS: &str = ".map__filters";
pub const MAP_FILTERS_DISABLED: &str = "map__filters--disabled";
pub const CHECKED_FILTERS: &str = ".map__checkbox:checked";
pub const SELECT_FILTERS: &str = "select.map__filter";
