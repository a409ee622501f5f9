//! Conversion from MBTA DTOs to feed records.

use serde::de::DeserializeOwned;

use crate::network::{FeedRoute, FeedStop};

use super::error::FeedError;
use super::types::{Document, RouteResource, StopResource};

/// How much of an unparseable body to keep for the error message.
const BODY_SNIPPET_CHARS: usize = 500;

/// Parse a JSON:API document body into its primary data.
pub fn parse_document<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FeedError> {
    serde_json::from_str::<Document<T>>(body)
        .map(|doc| doc.data)
        .map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
}

impl From<StopResource> for FeedStop {
    fn from(stop: StopResource) -> Self {
        FeedStop {
            id: stop.id,
            name: stop.attributes.name,
        }
    }
}

/// Pair a route resource with its stops, in the order the API listed them.
pub fn to_feed_route(route: RouteResource, stops: Vec<StopResource>) -> FeedRoute {
    FeedRoute {
        id: route.id,
        name: route.attributes.long_name,
        stops: stops.into_iter().map(FeedStop::from).collect(),
    }
}
