//! Amazon Location Service implementation of [`PlaceIndex`].
//!
//! Credentials and region come from the default `aws-config` provider chain
//! (`AWS_REGION`, `AWS_PROFILE`, instance/task roles, ...). The client is
//! built once and cloned cheaply; it is never mutated after construction.

use std::time::Instant;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_location::error::DisplayErrorContext;
use aws_sdk_location::types as sdk;
use aws_sdk_location::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::index::{PlaceIndex, OPERATION_GET_PLACE, OPERATION_SEARCH_SUGGESTIONS};
use crate::model::{Place, PlaceGeometry, SuggestionResult, TimeZone};

/// Place index backed by the `aws-sdk-location` client.
#[derive(Debug, Clone)]
pub struct AwsPlaceIndex {
    client: Client,
}

impl AwsPlaceIndex {
    /// Wrap an already configured client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS configuration chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl PlaceIndex for AwsPlaceIndex {
    async fn get_place(&self, place_id: Option<&str>, index_name: &str) -> Result<Place> {
        let start = Instant::now();

        let output = self
            .client
            .get_place()
            .index_name(index_name)
            .set_place_id(place_id.map(str::to_owned))
            .send()
            .await
            .map_err(|e| Error::Service {
                operation: OPERATION_GET_PLACE,
                message: DisplayErrorContext(&e).to_string(),
            })?;

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "GetPlace returned"
        );

        output
            .place
            .map(place_from_sdk)
            .ok_or(Error::MissingField {
                operation: OPERATION_GET_PLACE,
                field: "Place",
            })
    }

    async fn search_suggestions(
        &self,
        text: Option<&str>,
        index_name: &str,
        filter_countries: &[String],
    ) -> Result<Vec<SuggestionResult>> {
        let start = Instant::now();

        let output = self
            .client
            .search_place_index_for_suggestions()
            .index_name(index_name)
            .set_text(text.map(str::to_owned))
            .set_filter_countries(Some(filter_countries.to_vec()))
            .send()
            .await
            .map_err(|e| Error::Service {
                operation: OPERATION_SEARCH_SUGGESTIONS,
                message: DisplayErrorContext(&e).to_string(),
            })?;

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            results = output.results.len(),
            "SearchPlaceIndexForSuggestions returned"
        );

        Ok(output.results.into_iter().map(suggestion_from_sdk).collect())
    }
}

fn place_from_sdk(place: sdk::Place) -> Place {
    Place {
        label: place.label,
        geometry: place.geometry.map(geometry_from_sdk),
        address_number: place.address_number,
        street: place.street,
        neighborhood: place.neighborhood,
        municipality: place.municipality,
        sub_municipality: place.sub_municipality,
        sub_region: place.sub_region,
        region: place.region,
        country: place.country,
        postal_code: place.postal_code,
        interpolated: place.interpolated,
        time_zone: place.time_zone.map(time_zone_from_sdk),
        unit_type: place.unit_type,
        unit_number: place.unit_number,
        categories: place.categories,
        supplemental_categories: place.supplemental_categories,
    }
}

fn geometry_from_sdk(geometry: sdk::PlaceGeometry) -> PlaceGeometry {
    PlaceGeometry {
        point: geometry.point,
    }
}

fn time_zone_from_sdk(time_zone: sdk::TimeZone) -> TimeZone {
    TimeZone {
        name: time_zone.name,
        offset: time_zone.offset,
    }
}

fn suggestion_from_sdk(result: sdk::SearchForSuggestionsResult) -> SuggestionResult {
    SuggestionResult {
        text: result.text,
        place_id: result.place_id,
        categories: result.categories,
        supplemental_categories: result.supplemental_categories,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sdk_place() -> sdk::Place {
        let geometry = sdk::PlaceGeometry::builder()
            .set_point(Some(vec![34.7751, 32.0753]))
            .build();
        let time_zone = sdk::TimeZone::builder()
            .name("Asia/Jerusalem")
            .offset(10800)
            .build()
            .unwrap();

        sdk::Place::builder()
            .label("Dizengoff St 50, Tel Aviv-Yafo, ISR")
            .geometry(geometry)
            .address_number("50")
            .street("Dizengoff St")
            .neighborhood("Lev HaIr")
            .municipality("Tel Aviv-Yafo")
            .sub_municipality("Center")
            .sub_region("Tel Aviv")
            .region("Tel Aviv District")
            .country("ISR")
            .postal_code("6433222")
            .interpolated(false)
            .time_zone(time_zone)
            .unit_type("Floor")
            .unit_number("3")
            .set_categories(Some(vec!["AddressType".to_string()]))
            .set_supplemental_categories(Some(vec!["Shopping".to_string()]))
            .build()
    }

    #[test]
    fn place_conversion_keeps_every_field() {
        let value = serde_json::to_value(place_from_sdk(sdk_place())).unwrap();

        assert_eq!(
            value,
            json!({
                "Label": "Dizengoff St 50, Tel Aviv-Yafo, ISR",
                "Geometry": { "Point": [34.7751, 32.0753] },
                "AddressNumber": "50",
                "Street": "Dizengoff St",
                "Neighborhood": "Lev HaIr",
                "Municipality": "Tel Aviv-Yafo",
                "SubMunicipality": "Center",
                "SubRegion": "Tel Aviv",
                "Region": "Tel Aviv District",
                "Country": "ISR",
                "PostalCode": "6433222",
                "Interpolated": false,
                "TimeZone": { "Name": "Asia/Jerusalem", "Offset": 10800 },
                "UnitType": "Floor",
                "UnitNumber": "3",
                "Categories": ["AddressType"],
                "SupplementalCategories": ["Shopping"]
            })
        );
    }

    #[test]
    fn place_conversion_omits_absent_fields() {
        let place = sdk::Place::builder().label("Somewhere").build();
        let value = serde_json::to_value(place_from_sdk(place)).unwrap();

        assert_eq!(value, json!({ "Label": "Somewhere" }));
    }

    #[test]
    fn suggestion_conversion_keeps_every_field() {
        let result = sdk::SearchForSuggestionsResult::builder()
            .text("Tel Aviv-Yafo, Tel Aviv, ISR")
            .place_id("AQAAAFUAjAzyWm1yQ6LF")
            .set_categories(Some(vec!["MunicipalityType".to_string()]))
            .set_supplemental_categories(Some(vec!["City".to_string()]))
            .build()
            .unwrap();

        let value = serde_json::to_value(suggestion_from_sdk(result)).unwrap();

        assert_eq!(
            value,
            json!({
                "Text": "Tel Aviv-Yafo, Tel Aviv, ISR",
                "PlaceId": "AQAAAFUAjAzyWm1yQ6LF",
                "Categories": ["MunicipalityType"],
                "SupplementalCategories": ["City"]
            })
        );
    }
}
