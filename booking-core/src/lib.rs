//! Listing map state, filtering and popup text for the booking page.
//!
//! Nothing in here touches the browser: the map, the filter form and the
//! address input are reached through the traits in [`controller`], and timers
//! through [`debounce::Scheduler`], so the whole crate runs under `cargo test`.

pub mod card;
pub mod constants;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod filters;
pub mod models;
pub mod preview;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{AddressField, FilterForm, MapController, MapPhase, MapSurface};
pub use debounce::{Debounced, Scheduler};
pub use error::DataError;
pub use filters::{FilterSelection, filter_listings};
pub use models::{LatLng, Listing, format_coordinates, parse_listings};
