//! Text content of the popup card bound to each listing marker.

use crate::models::Listing;

/// Everything the popup shows. `None` and empty lists hide their element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardText {
    pub avatar: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub price: Option<String>,
    pub kind: Option<&'static str>,
    pub capacity: Option<String>,
    pub time: Option<String>,
    pub features: Vec<String>,
    pub description: Option<String>,
    pub photos: Vec<String>,
}

impl CardText {
    pub fn describe(listing: &Listing) -> Self {
        let offer = &listing.offer;
        let capacity = match (offer.rooms, offer.guests) {
            (Some(rooms), Some(guests)) => Some(format!(
                "{rooms} {} для {guests} {}",
                plural(rooms, ["комната", "комнаты", "комнат"]),
                plural(guests, ["гостя", "гостей", "гостей"]),
            )),
            _ => None,
        };
        let time = match (&offer.checkin, &offer.checkout) {
            (Some(checkin), Some(checkout)) => {
                Some(format!("Заезд после {checkin}, выезд до {checkout}"))
            }
            _ => None,
        };
        CardText {
            avatar: non_empty(&listing.author.avatar),
            title: non_empty(&offer.title),
            address: non_empty(&offer.address),
            price: offer.price.map(|p| format!("{p} ₽/ночь")),
            kind: offer.kind.label(),
            capacity,
            time,
            features: offer.features.clone(),
            description: non_empty(&offer.description),
            photos: offer.photos.clone(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.trim().is_empty()).map(str::to_string)
}

/// Pick the Russian plural form for `n`: one, few, many.
pub fn plural(n: u32, forms: [&'static str; 3]) -> &'static str {
    let (last, last_two) = (n % 10, n % 100);
    if last == 1 && last_two != 11 {
        forms[0]
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        forms[1]
    } else {
        forms[2]
    }
}
