use log::debug;

use crate::models::{HousingType, Listing};

/// Select value meaning "no constraint".
pub const ANY: &str = "any";

const LOW_PRICE_LIMIT: u32 = 10_000;
const HIGH_PRICE_LIMIT: u32 = 50_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceBand {
    Low,
    Middle,
    High,
}

impl PriceBand {
    pub fn parse(value: &str) -> Option<PriceBand> {
        match value {
            "low" => Some(PriceBand::Low),
            "middle" => Some(PriceBand::Middle),
            "high" => Some(PriceBand::High),
            _ => None,
        }
    }

    pub fn contains(self, price: u32) -> bool {
        match self {
            PriceBand::Low => price < LOW_PRICE_LIMIT,
            PriceBand::Middle => (LOW_PRICE_LIMIT..=HIGH_PRICE_LIMIT).contains(&price),
            PriceBand::High => price > HIGH_PRICE_LIMIT,
        }
    }
}

/// Currently checked filter values, grouped by category.
///
/// Built fresh from the form on every change. A listing matches when every
/// non-empty category accepts it: for housing type, price, rooms and guests
/// any one selected value is enough, features must all be present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    types: Vec<HousingType>,
    prices: Vec<PriceBand>,
    rooms: Vec<u32>,
    guests: Vec<u32>,
    features: Vec<String>,
}

impl FilterSelection {
    /// Add a bare checkbox value. Housing type names constrain the type,
    /// anything else is treated as a required feature.
    pub fn push_value(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match HousingType::parse(value) {
            Some(kind) => push_unique(&mut self.types, kind),
            None => push_unique(&mut self.features, value.to_string()),
        }
    }

    /// Add the value of a named select control of the filter form.
    pub fn push_control(&mut self, name: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            return;
        }
        let parsed = match name {
            "housing-type" => HousingType::parse(value).map(|v| push_unique(&mut self.types, v)),
            "housing-price" => PriceBand::parse(value).map(|v| push_unique(&mut self.prices, v)),
            "housing-rooms" => value.parse().ok().map(|v| push_unique(&mut self.rooms, v)),
            "housing-guests" => value.parse().ok().map(|v| push_unique(&mut self.guests, v)),
            _ => {
                self.push_value(value);
                Some(())
            }
        };
        if parsed.is_none() {
            debug!("ignoring filter {name}={value}");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.prices.is_empty()
            && self.rooms.is_empty()
            && self.guests.is_empty()
            && self.features.is_empty()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let offer = &listing.offer;
        (self.types.is_empty() || self.types.contains(&offer.kind))
            && (self.prices.is_empty()
                || offer
                    .price
                    .is_some_and(|p| self.prices.iter().any(|band| band.contains(p))))
            && accepts(&self.rooms, offer.rooms)
            && accepts(&self.guests, offer.guests)
            && self.features.iter().all(|f| offer.features.contains(f))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = S>>(values: I) -> Self {
        let mut selection = FilterSelection::default();
        for value in values {
            selection.push_value(value.as_ref());
        }
        selection
    }
}

fn accepts(selected: &[u32], actual: Option<u32>) -> bool {
    selected.is_empty() || actual.is_some_and(|v| selected.contains(&v))
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Listings accepted by `selection`, in their original order.
pub fn filter_listings<'a>(
    listings: &'a [Listing],
    selection: &'a FilterSelection,
) -> impl Iterator<Item = &'a Listing> + 'a {
    listings.iter().filter(move |l| selection.matches(l))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{listing, sample_listings};

    fn run(listings: &[Listing], values: &[&str]) -> Vec<Listing> {
        let selection: FilterSelection = values.iter().collect();
        filter_listings(listings, &selection).cloned().collect()
    }

    fn selections() -> Vec<Vec<&'static str>> {
        vec![
            vec![],
            vec!["flat"],
            vec!["house", "hotel"],
            vec!["wifi"],
            vec!["wifi", "parking"],
            vec!["flat", "wifi"],
            vec!["conditioner", "elevator", "washer"],
            vec!["palace"],
        ]
    }

    #[test]
    fn matches_type_scenario() {
        let listings = vec![listing(HousingType::Flat, &[]), listing(HousingType::House, &[])];
        assert_eq!(run(&listings, &["flat"]), vec![listings[0].clone()]);
    }

    #[test]
    fn empty_selection_passes_everything() {
        let listings = sample_listings();
        assert_eq!(run(&listings, &[]), listings);
    }

    #[test]
    fn empty_listings_stay_empty() {
        for values in selections() {
            assert!(run(&[], &values).is_empty());
        }
    }

    #[test]
    fn result_is_ordered_subsequence() {
        let listings = sample_listings();
        for values in selections() {
            let result = run(&listings, &values);
            let mut cursor = listings.iter();
            for kept in &result {
                assert!(
                    cursor.any(|l| l == kept),
                    "{values:?} produced an element out of order or foreign"
                );
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let listings = sample_listings();
        for values in selections() {
            let once = run(&listings, &values);
            assert_eq!(run(&once, &values), once, "{values:?}");
        }
    }

    #[test]
    fn features_are_conjunctive_and_types_disjunctive() {
        let listings = sample_listings();
        let both = run(&listings, &["wifi", "parking"]);
        assert!(both.iter().all(|l| {
            l.offer.features.iter().any(|f| f == "wifi")
                && l.offer.features.iter().any(|f| f == "parking")
        }));
        assert_eq!(both.len(), 1);

        let either = run(&listings, &["house", "hotel"]);
        assert_eq!(either.len(), 2);

        let flat_with_wifi = run(&listings, &["flat", "wifi"]);
        assert_eq!(flat_with_wifi.len(), 1);
        assert_eq!(flat_with_wifi[0].offer.kind, HousingType::Flat);
    }

    #[test]
    fn select_controls_constrain_price_rooms_guests() {
        let mut cheap = listing(HousingType::Bungalow, &[]);
        cheap.offer.price = Some(5_000);
        cheap.offer.rooms = Some(1);
        cheap.offer.guests = Some(1);
        let mut pricey = listing(HousingType::Palace, &[]);
        pricey.offer.price = Some(90_000);
        pricey.offer.rooms = Some(3);
        pricey.offer.guests = Some(6);
        let listings = vec![cheap.clone(), pricey.clone()];

        let mut selection = FilterSelection::default();
        selection.push_control("housing-type", ANY);
        selection.push_control("housing-price", "high");
        assert_eq!(
            filter_listings(&listings, &selection).collect::<Vec<_>>(),
            vec![&pricey]
        );

        let mut selection = FilterSelection::default();
        selection.push_control("housing-rooms", "1");
        selection.push_control("housing-guests", "1");
        assert_eq!(
            filter_listings(&listings, &selection).collect::<Vec<_>>(),
            vec![&cheap]
        );
    }

    #[test]
    fn price_bands_cover_boundaries() {
        assert!(PriceBand::Low.contains(9_999));
        assert!(PriceBand::Middle.contains(10_000));
        assert!(PriceBand::Middle.contains(50_000));
        assert!(PriceBand::High.contains(50_001));
        assert!(!PriceBand::High.contains(50_000));
    }

    #[test]
    fn ignores_any_and_garbage_values() {
        let mut selection = FilterSelection::default();
        selection.push_control("housing-price", ANY);
        selection.push_control("housing-rooms", "many");
        selection.push_value("  ");
        assert!(selection.is_empty());
    }
}
