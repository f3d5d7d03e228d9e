//! The place index capability and its settings.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Place, SuggestionResult};

/// Index searched when `LOCATION_PLACE_INDEX` is not set.
pub const DEFAULT_INDEX_NAME: &str = "my-place-index";

/// Country filter applied to suggestions when `LOCATION_FILTER_COUNTRIES` is not set.
pub const DEFAULT_FILTER_COUNTRIES: &[&str] = &["ISR"];

/// Operation name used in errors, logs and metrics for place lookups.
pub const OPERATION_GET_PLACE: &str = "GetPlace";

/// Operation name used in errors, logs and metrics for suggestion searches.
pub const OPERATION_SEARCH_SUGGESTIONS: &str = "SearchPlaceIndexForSuggestions";

/// Read-only access to an external place index.
///
/// Implementations are constructed once at start-up and shared across
/// requests, so they must be `Send + Sync` and must not need `&mut self`.
///
/// Parameters are forwarded as received: a missing `place_id` or `text` is
/// passed through as `None` and it is up to the index to reject it.
#[async_trait]
pub trait PlaceIndex: Send + Sync {
    /// Fetch a single place by identifier.
    async fn get_place(&self, place_id: Option<&str>, index_name: &str) -> Result<Place>;

    /// Return autocomplete candidates for `text`, restricted to `filter_countries`.
    async fn search_suggestions(
        &self,
        text: Option<&str>,
        index_name: &str,
        filter_countries: &[String],
    ) -> Result<Vec<SuggestionResult>>;
}

/// Which index to query and how suggestions are filtered.
///
/// These are process-wide constants; no request parameter can change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    /// Name of the place index resource.
    pub index_name: String,
    /// ISO 3166 alpha-3 codes suggestions are restricted to.
    pub filter_countries: Vec<String>,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            filter_countries: DEFAULT_FILTER_COUNTRIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl IndexSettings {
    /// Create settings from environment variables.
    ///
    /// - `LOCATION_PLACE_INDEX`: index name (default: `my-place-index`)
    /// - `LOCATION_FILTER_COUNTRIES`: comma-separated country codes (default: `ISR`)
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("LOCATION_PLACE_INDEX").ok(),
            std::env::var("LOCATION_FILTER_COUNTRIES").ok(),
        )
    }

    /// Build settings from raw values, falling back to defaults for missing or blank ones.
    pub fn from_values(index_name: Option<String>, filter_countries: Option<String>) -> Self {
        let defaults = Self::default();

        let index_name = index_name
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.index_name);

        let filter_countries = filter_countries
            .map(|v| parse_countries(&v))
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.filter_countries);

        Self {
            index_name,
            filter_countries,
        }
    }
}

/// Split a comma-separated country list, dropping blanks and upper-casing codes.
fn parse_countries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_index() {
        let settings = IndexSettings::default();
        assert_eq!(settings.index_name, "my-place-index");
        assert_eq!(settings.filter_countries, vec!["ISR".to_string()]);
    }

    #[test]
    fn from_values_overrides_defaults() {
        let settings = IndexSettings::from_values(
            Some("prod-index".to_string()),
            Some("isr, usa ,,GBR".to_string()),
        );
        assert_eq!(settings.index_name, "prod-index");
        assert_eq!(settings.filter_countries, vec!["ISR", "USA", "GBR"]);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings = IndexSettings::from_values(Some("  ".to_string()), Some(" , ".to_string()));
        assert_eq!(settings, IndexSettings::default());
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        assert_eq!(
            IndexSettings::from_values(None, None),
            IndexSettings::default()
        );
    }
}
