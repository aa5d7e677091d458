//! Fixtures and fakes shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::{AddressField, FilterForm, MapSurface};
use crate::debounce::Scheduler;
use crate::filters::FilterSelection;
use crate::models::{HousingType, LatLng, Listing, Offer};

pub fn listing(kind: HousingType, features: &[&str]) -> Listing {
    let mut offer = Offer::of_kind(kind);
    offer.features = features.iter().map(|f| f.to_string()).collect();
    Listing {
        author: Default::default(),
        offer,
        location: LatLng::from((35.6, 139.7)),
    }
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(HousingType::Flat, &["wifi", "parking"]),
        listing(HousingType::House, &["dishwasher"]),
        listing(HousingType::Flat, &["elevator"]),
        listing(HousingType::Hotel, &["wifi", "washer"]),
        listing(HousingType::Bungalow, &[]),
        listing(HousingType::Palace, &["conditioner", "elevator", "washer"]),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub enum MapCall {
    TileLayer,
    SetView(LatLng),
    ClosePopup,
    MoveOrigin(LatLng),
    Clear,
}

/// Records what the controller asked the map to do.
#[derive(Clone, Default)]
pub struct FakeMap {
    pub calls: Rc<RefCell<Vec<MapCall>>>,
    pub markers: Rc<RefCell<Vec<Listing>>>,
}

impl FakeMap {
    pub fn clears(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == MapCall::Clear)
            .count()
    }
}

impl MapSurface for FakeMap {
    fn add_tile_layer(&mut self, _url_template: &str, _attribution: &str) {
        self.calls.borrow_mut().push(MapCall::TileLayer);
    }
    fn set_view(&mut self, center: LatLng, _zoom: f64) {
        self.calls.borrow_mut().push(MapCall::SetView(center));
    }
    fn close_popup(&mut self) {
        self.calls.borrow_mut().push(MapCall::ClosePopup);
    }
    fn move_origin(&mut self, to: LatLng) {
        self.calls.borrow_mut().push(MapCall::MoveOrigin(to));
    }
    fn clear_markers(&mut self) {
        self.calls.borrow_mut().push(MapCall::Clear);
        self.markers.borrow_mut().clear();
    }
    fn add_marker(&mut self, listing: &Listing) {
        self.markers.borrow_mut().push(listing.clone());
    }
}

/// Checkbox values the test can flip while the controller owns the form.
#[derive(Clone, Default)]
pub struct FakeForm {
    pub checked: Rc<RefCell<Vec<String>>>,
    pub defaults: Vec<String>,
}

impl FakeForm {
    pub fn check(&self, values: &[&str]) {
        *self.checked.borrow_mut() = values.iter().map(|v| v.to_string()).collect();
    }
}

impl FilterForm for FakeForm {
    fn read_selection(&self) -> FilterSelection {
        self.checked.borrow().iter().collect()
    }
    fn reset(&mut self) {
        *self.checked.borrow_mut() = self.defaults.clone();
    }
}

#[derive(Default)]
pub struct FakeAddress(pub String);

impl AddressField for FakeAddress {
    fn set_address(&mut self, text: &str) {
        self.0 = text.to_string();
    }
}

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    tasks: Vec<(u64, u64, Task)>,
}

/// Timer queue driven by hand through [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Dropping the handle cancels the task, like a browser timeout handle.
pub struct ManualPending {
    id: u64,
    clock: Rc<RefCell<Clock>>,
}

impl Drop for ManualPending {
    fn drop(&mut self) {
        self.clock.borrow_mut().tasks.retain(|(id, _, _)| *id != self.id);
    }
}

impl Scheduler for ManualScheduler {
    type Pending = ManualPending;

    fn schedule(&self, delay_ms: u32, task: Task) -> ManualPending {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + u64::from(delay_ms);
        clock.tasks.push((id, due, task));
        ManualPending {
            id,
            clock: Rc::clone(&self.clock),
        }
    }
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    /// Move time forward and run every task that came due, earliest first.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, due, _))| *due <= target)
                    .min_by_key(|(_, (_, due, _))| *due)
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let (_, at, task) = clock.tasks.remove(i);
                        clock.now = at;
                        Some(task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}
