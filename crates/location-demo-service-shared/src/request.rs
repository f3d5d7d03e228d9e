//! Query parameter types for HTTP endpoints.
//!
//! Parameters are optional on purpose: an absent value is forwarded to the
//! place index as absent and the index decides whether that is an error.
//! Both types are extractors that never reject. A repeated key keeps its
//! first value and unknown keys are ignored.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

/// Query string of `GET /place`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceQuery {
    /// Place identifier, typically a `PlaceId` taken from a suggestion.
    pub id: Option<String>,
}

impl PlaceQuery {
    /// Build from decoded query pairs.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            id: first_value(pairs, "id"),
        }
    }
}

/// Query string of `GET /suggestions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionsQuery {
    /// Free-form text to autocomplete.
    pub q: Option<String>,
}

impl SuggestionsQuery {
    /// Build from decoded query pairs.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            q: first_value(pairs, "q"),
        }
    }
}

/// First value given for `key`, if any.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

fn query_pairs(parts: &Parts) -> Vec<(String, String)> {
    Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default()
}

impl<S> FromRequestParts<S> for PlaceQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_pairs(&query_pairs(parts)))
    }
}

impl<S> FromRequestParts<S> for SuggestionsQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_pairs(&query_pairs(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(uri: &str) -> Parts {
        Request::builder().uri(uri).body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_place_query_missing_id() {
        let query = PlaceQuery::from_request_parts(&mut parts("/place"), &())
            .await
            .unwrap();
        assert!(query.id.is_none());
    }

    #[tokio::test]
    async fn test_place_query_keeps_empty_id() {
        let query = PlaceQuery::from_request_parts(&mut parts("/place?id="), &())
            .await
            .unwrap();
        assert_eq!(query.id.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_place_query_repeated_id_takes_first() {
        let query = PlaceQuery::from_request_parts(&mut parts("/place?id=A&id=B"), &())
            .await
            .unwrap();
        assert_eq!(query.id.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_suggestions_query_decodes_and_ignores_unknown_fields() {
        let query =
            SuggestionsQuery::from_request_parts(&mut parts("/suggestions?country=USA&q=Tel+Av"), &())
                .await
                .unwrap();
        assert_eq!(query.q.as_deref(), Some("Tel Av"));
    }

    #[test]
    fn test_suggestions_query_repeated_q_takes_first() {
        let pairs = vec![
            ("q".to_string(), "Tel".to_string()),
            ("q".to_string(), "Haifa".to_string()),
        ];
        assert_eq!(SuggestionsQuery::from_pairs(&pairs).q.as_deref(), Some("Tel"));
    }
}
