//! Application state for HTTP services.
//!
//! Holds the single place index client shared by every handler together with
//! the index settings applied to each call.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use location_demo_lib::{AwsPlaceIndex, IndexSettings, PlaceIndex};

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. Nothing inside it is mutated after
/// construction.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use location_demo_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let index = state.place_index();
///     // ... call the index
/// }
///
/// let state = AppState::from_env().await;
/// let app = Router::new()
///     .route("/place", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    place_index: Arc<dyn PlaceIndex>,
    settings: IndexSettings,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state around any [`PlaceIndex`] implementation.
    ///
    /// Tests inject a mock here; production code goes through [`AppState::from_env`].
    pub fn new(place_index: Arc<dyn PlaceIndex>, settings: IndexSettings) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                place_index,
                settings,
                started_at: Utc::now(),
            }),
        }
    }

    /// Build state backed by Amazon Location Service.
    ///
    /// Index settings come from `LOCATION_PLACE_INDEX` and
    /// `LOCATION_FILTER_COUNTRIES`; AWS region and credentials from the
    /// default provider chain.
    pub async fn from_env() -> Self {
        let settings = IndexSettings::from_env();

        tracing::info!(
            index_name = %settings.index_name,
            filter_countries = ?settings.filter_countries,
            "creating Amazon Location client"
        );
        let place_index = AwsPlaceIndex::from_env().await;

        Self::new(Arc::new(place_index), settings)
    }

    /// Access the place index client.
    pub fn place_index(&self) -> &dyn PlaceIndex {
        self.inner.place_index.as_ref()
    }

    /// Access the index settings applied to every call.
    pub fn settings(&self) -> &IndexSettings {
        &self.inner.settings
    }

    /// Name of the place index every request is sent to.
    pub fn index_name(&self) -> &str {
        &self.inner.settings.index_name
    }

    /// Country filter applied to every suggestion search.
    pub fn filter_countries(&self) -> &[String] {
        &self.inner.settings.filter_countries
    }

    /// When this state was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("index_name", &self.inner.settings.index_name)
            .field("filter_countries", &self.inner.settings.filter_countries)
            .field("started_at", &self.inner.started_at)
            .finish()
    }
}
