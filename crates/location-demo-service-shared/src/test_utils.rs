//! Test utilities for handler testing.
//!
//! [`MockPlaceIndex`] stands in for Amazon Location Service: it answers from
//! in-memory fixtures, fails the way the real service does for missing
//! parameters, and records every call so tests can check what was forwarded.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use location_demo_lib::{
    Error, IndexSettings, Place, PlaceGeometry, PlaceIndex, Result, SuggestionResult, TimeZone,
    OPERATION_GET_PLACE, OPERATION_SEARCH_SUGGESTIONS,
};

use crate::state::AppState;

/// Place ID of [`sample_place`] in the default mock.
pub const SAMPLE_PLACE_ID: &str = "AQAAAFUAjAzyWm1yQ6LF";

/// A call received by [`MockPlaceIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexCall {
    GetPlace {
        place_id: Option<String>,
        index_name: String,
    },
    SearchSuggestions {
        text: Option<String>,
        index_name: String,
        filter_countries: Vec<String>,
    },
}

/// In-memory [`PlaceIndex`] for tests.
#[derive(Debug, Default)]
pub struct MockPlaceIndex {
    places: HashMap<String, Place>,
    suggestions: Vec<SuggestionResult>,
    failure: Option<String>,
    calls: Mutex<Vec<IndexCall>>,
}

impl MockPlaceIndex {
    /// Empty index: every lookup is "not found", every search returns nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index preloaded with [`sample_place`] and [`sample_suggestions`].
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_place(SAMPLE_PLACE_ID, sample_place())
            .with_suggestions(sample_suggestions())
    }

    pub fn with_place(mut self, place_id: impl Into<String>, place: Place) -> Self {
        self.places.insert(place_id.into(), place);
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<SuggestionResult>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Make every call fail with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<IndexCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    fn record(&self, call: IndexCall) {
        self.calls.lock().expect("mock call log poisoned").push(call);
    }

    fn check_failure(&self, operation: &'static str) -> Result<()> {
        match &self.failure {
            Some(message) => Err(Error::Service {
                operation,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PlaceIndex for MockPlaceIndex {
    async fn get_place(&self, place_id: Option<&str>, index_name: &str) -> Result<Place> {
        self.record(IndexCall::GetPlace {
            place_id: place_id.map(str::to_owned),
            index_name: index_name.to_string(),
        });
        self.check_failure(OPERATION_GET_PLACE)?;

        let place_id = place_id.ok_or_else(|| Error::Service {
            operation: OPERATION_GET_PLACE,
            message: "failed to construct request: PlaceId is required".to_string(),
        })?;

        self.places
            .get(place_id)
            .cloned()
            .ok_or_else(|| Error::Service {
                operation: OPERATION_GET_PLACE,
                message: format!("ResourceNotFoundException: place {} not found", place_id),
            })
    }

    async fn search_suggestions(
        &self,
        text: Option<&str>,
        index_name: &str,
        filter_countries: &[String],
    ) -> Result<Vec<SuggestionResult>> {
        self.record(IndexCall::SearchSuggestions {
            text: text.map(str::to_owned),
            index_name: index_name.to_string(),
            filter_countries: filter_countries.to_vec(),
        });
        self.check_failure(OPERATION_SEARCH_SUGGESTIONS)?;

        if text.is_none() {
            return Err(Error::Service {
                operation: OPERATION_SEARCH_SUGGESTIONS,
                message: "failed to construct request: Text is required".to_string(),
            });
        }

        Ok(self.suggestions.clone())
    }
}

/// Build an [`AppState`] around a mock, with default index settings.
///
/// The returned `Arc` lets the test inspect the call log afterwards.
pub fn mock_state(index: MockPlaceIndex) -> (AppState, Arc<MockPlaceIndex>) {
    let index = Arc::new(index);
    let state = AppState::new(index.clone(), IndexSettings::default());
    (state, index)
}

/// A fully populated place in Tel Aviv.
pub fn sample_place() -> Place {
    Place {
        label: Some("Dizengoff St 50, Tel Aviv-Yafo, ISR".to_string()),
        geometry: Some(PlaceGeometry {
            point: Some(vec![34.7751, 32.0753]),
        }),
        address_number: Some("50".to_string()),
        street: Some("Dizengoff St".to_string()),
        neighborhood: Some("Lev HaIr".to_string()),
        municipality: Some("Tel Aviv-Yafo".to_string()),
        sub_region: Some("Tel Aviv".to_string()),
        region: Some("Tel Aviv District".to_string()),
        country: Some("ISR".to_string()),
        postal_code: Some("6433222".to_string()),
        interpolated: Some(false),
        time_zone: Some(TimeZone {
            name: "Asia/Jerusalem".to_string(),
            offset: Some(10800),
        }),
        categories: Some(vec!["AddressType".to_string()]),
        ..Default::default()
    }
}

/// Suggestions in the order the service would rank them.
pub fn sample_suggestions() -> Vec<SuggestionResult> {
    vec![
        SuggestionResult {
            text: "Tel Aviv-Yafo, Tel Aviv, ISR".to_string(),
            place_id: Some("AQAAAFUAn1".to_string()),
            categories: Some(vec!["MunicipalityType".to_string()]),
            supplemental_categories: None,
        },
        SuggestionResult {
            text: "Tel Aviv University, Tel Aviv-Yafo, ISR".to_string(),
            place_id: Some("AQAAAFUAn2".to_string()),
            categories: Some(vec!["PointOfInterestType".to_string()]),
            supplemental_categories: Some(vec!["University".to_string()]),
        },
        SuggestionResult {
            text: "Tel Mond, Central District, ISR".to_string(),
            place_id: None,
            categories: None,
            supplemental_categories: None,
        },
    ]
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_fixture_place() {
        let index = MockPlaceIndex::with_fixtures();
        let place = index
            .get_place(Some(SAMPLE_PLACE_ID), "my-place-index")
            .await
            .unwrap();
        assert_eq!(place, sample_place());
    }

    #[tokio::test]
    async fn test_mock_rejects_missing_place_id() {
        let index = MockPlaceIndex::with_fixtures();
        let err = index.get_place(None, "my-place-index").await.unwrap_err();
        assert!(err.to_string().contains("PlaceId is required"));
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let index = MockPlaceIndex::with_fixtures();
        let countries = vec!["ISR".to_string()];
        index
            .search_suggestions(Some("Tel"), "idx", &countries)
            .await
            .unwrap();

        assert_eq!(
            index.calls(),
            vec![IndexCall::SearchSuggestions {
                text: Some("Tel".to_string()),
                index_name: "idx".to_string(),
                filter_countries: countries,
            }]
        );
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let index = MockPlaceIndex::with_fixtures().failing("ThrottlingException");
        let err = index
            .get_place(Some(SAMPLE_PLACE_ID), "idx")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("ThrottlingException"));
    }

    #[test]
    fn test_request_id_unique() {
        assert_ne!(test_request_id(), test_request_id());
    }
}
