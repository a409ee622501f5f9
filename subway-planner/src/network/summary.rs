//! Read-only summaries over a built network.

use crate::domain::{Route, Stop};

use super::builder::Network;

/// The routes with the most and the fewest stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopExtremes<'a> {
    pub most: &'a Route,
    pub least: &'a Route,
}

/// Long names of every route, in feed order.
pub fn route_names(network: &Network) -> Vec<&str> {
    network.routes().iter().map(Route::name).collect()
}

/// Find the routes with the most and fewest stops.
///
/// Ties go to the route listed first. Returns `None` for an empty list.
pub fn stop_extremes(routes: &[Route]) -> Option<StopExtremes<'_>> {
    let first = routes.first()?;
    let mut extremes = StopExtremes {
        most: first,
        least: first,
    };

    for route in routes {
        if route.stop_count() > extremes.most.stop_count() {
            extremes.most = route;
        }
        if route.stop_count() < extremes.least.stop_count() {
            extremes.least = route;
        }
    }

    Some(extremes)
}

/// Stops served by more than one line, in name order.
pub fn transfer_stops(network: &Network) -> Vec<&Stop> {
    network
        .stops()
        .values()
        .filter(|stop| stop.is_transfer())
        .collect()
}
