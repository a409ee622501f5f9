//! MBTA v3 API feed.
//!
//! Supplies the network builder with subway routes and their ordered stop
//! lists, either live from the API or from saved responses on disk.
//!
//! The API is a JSON:API service: `/routes` lists routes (filtered to
//! subway route types) and `/stops?filter[route]=<id>` lists a route's
//! stops in travel order.

mod client;
mod convert;
mod error;
mod fixture;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use convert::parse_document;
pub use error::FeedError;
pub use fixture::FixtureFeed;
pub use types::{Document, RouteAttributes, RouteResource, StopAttributes, StopResource};

use crate::network::FeedRoute;

/// A source of routes with their ordered stop lists.
///
/// Implemented by the live client and the on-disk fixture feed so the
/// binary can build a network from either.
#[allow(async_fn_in_trait)]
pub trait FeedSource {
    /// Fetch every route with its stops in travel order.
    async fn fetch_routes(&self) -> Result<Vec<FeedRoute>, FeedError>;
}
