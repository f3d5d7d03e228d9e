//! Pass-through records returned by the place index.
//!
//! Field names follow the Amazon Location Service JSON documents (`Label`,
//! `Geometry`, `PlaceId`, ...) so clients see the same payload they would get
//! from the service directly. Absent attributes are omitted rather than
//! serialized as `null`.

use serde::{Deserialize, Serialize};

/// A place record as returned by `GetPlace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PlaceGeometry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_municipality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// ISO 3166 alpha-3 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// True when the address number was interpolated from a street range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplemental_categories: Option<Vec<String>>,
}

/// Point geometry, `[longitude, latitude]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceGeometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<Vec<f64>>,
}

/// IANA time zone of a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZone {
    pub name: String,

    /// Offset from UTC in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
}

/// One autocomplete candidate from `SearchPlaceIndexForSuggestions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuggestionResult {
    pub text: String,

    /// Identifier usable with `GetPlace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplemental_categories: Option<Vec<String>>,
}
