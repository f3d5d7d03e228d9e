//! Place index access for the location-demo HTTP front-end.
//!
//! The service does no geospatial work of its own. Everything here exists to
//! hand a query to Amazon Location Service and bring the answer back in the
//! same JSON shape the service documents:
//!
//! - [`PlaceIndex`]: the two-operation capability handlers depend on
//! - [`AwsPlaceIndex`]: the production implementation backed by `aws-sdk-location`
//! - [`Place`] and [`SuggestionResult`]: pass-through records
//! - [`IndexSettings`]: index name and country filter, read from the environment

#![deny(warnings)]

pub mod aws;
pub mod error;
pub mod index;
pub mod model;

pub use aws::AwsPlaceIndex;
pub use error::{Error, Result};
pub use index::{
    IndexSettings, PlaceIndex, DEFAULT_FILTER_COUNTRIES, DEFAULT_INDEX_NAME,
    OPERATION_GET_PLACE, OPERATION_SEARCH_SUGGESTIONS,
};
pub use model::{Place, PlaceGeometry, SuggestionResult, TimeZone};
