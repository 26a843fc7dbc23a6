use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One venue as it appears in list views.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub phone: String,
    pub image_url: String,
    pub opening_hours: String,
    pub address: String,
}

/// Full record behind a detail page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub phone: String,
    pub image_url: String,
    pub opening_hours: String,
    pub address: String,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ListingDetail {
    /// (latitude, longitude) when the record carries a usable position.
    /// A zero on either axis is how the form's blank default arrives, so it
    /// counts as "no location".
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Payload for `POST /create`. Built from a validated form and sent once.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub phone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: String,
    pub opening_hours: String,
    pub address: String,
    pub password: String,
}

// Hand-written so the access password never reaches a log line.
impl fmt::Debug for NewListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewListing")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("phone", &self.phone)
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("image_url", &self.image_url)
            .field("opening_hours", &self.opening_hours)
            .field("address", &self.address)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}
