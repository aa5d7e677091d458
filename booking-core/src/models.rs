use serde::{Deserialize, Serialize};

use crate::constants::DECIMAL_PLACES;
use crate::error::DataError;

/// Geographic position in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<(f64, f64)> for LatLng {
    fn from(v: (f64, f64)) -> Self {
        LatLng { lat: v.0, lng: v.1 }
    }
}

/// Render a position the way the address field expects it: `"lat, lng"` with
/// a fixed number of decimals.
pub fn format_coordinates(at: LatLng) -> String {
    format!(
        "{:.prec$}, {:.prec$}",
        at.lat,
        at.lng,
        prec = DECIMAL_PLACES
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingType {
    Palace,
    Flat,
    House,
    Bungalow,
    Hotel,
    #[serde(other)]
    Other,
}

impl HousingType {
    pub fn parse(value: &str) -> Option<HousingType> {
        match value {
            "palace" => Some(HousingType::Palace),
            "flat" => Some(HousingType::Flat),
            "house" => Some(HousingType::House),
            "bungalow" => Some(HousingType::Bungalow),
            "hotel" => Some(HousingType::Hotel),
            _ => None,
        }
    }

    /// Label shown in the popup card.
    pub fn label(self) -> Option<&'static str> {
        match self {
            HousingType::Palace => Some("Дворец"),
            HousingType::Flat => Some("Квартира"),
            HousingType::House => Some("Дом"),
            HousingType::Bungalow => Some("Бунгало"),
            HousingType::Hotel => Some("Отель"),
            HousingType::Other => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub avatar: Option<String>,
}

/// Offer details. The endpoint leaves fields out on some records, so
/// everything except the housing type is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub title: Option<String>,
    pub address: Option<String>,
    pub price: Option<u32>,
    #[serde(rename = "type")]
    pub kind: HousingType,
    pub rooms: Option<u32>,
    pub guests: Option<u32>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Offer {
    pub fn of_kind(kind: HousingType) -> Self {
        Offer {
            title: None,
            address: None,
            price: None,
            kind,
            rooms: None,
            guests: None,
            checkin: None,
            checkout: None,
            features: Vec::new(),
            description: None,
            photos: Vec::new(),
        }
    }
}

/// One published offer. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub author: Author,
    pub offer: Offer,
    pub location: LatLng,
}

/// Decode the listings endpoint body.
pub fn parse_listings(text: &str) -> Result<Vec<Listing>, DataError> {
    Ok(serde_json::from_str(text)?)
}
