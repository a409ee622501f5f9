//! Network construction from feed records.
//!
//! Each route's ordered stop list becomes a chain of connections: every
//! stop is linked to the stop before and after it, in both directions,
//! tagged with the route's long name.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::{Connection, Route, Stop};

use super::feed::{FeedRoute, FeedStop};

/// Feed data is missing something the network cannot be built without.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedFeed {
    /// A route entry lacks its id or long name.
    #[error("malformed feed: route #{index} has no {field}")]
    Route { index: usize, field: &'static str },

    /// A stop entry lacks its id or name.
    #[error("malformed feed: stop #{index} on route {route} has no {field}")]
    Stop {
        route: String,
        index: usize,
        field: &'static str,
    },
}

/// The subway network: routes in feed order and stops keyed by name.
///
/// Only [`build_network`] mutates a network; once returned it is read-only.
#[derive(Debug, Clone, Default)]
pub struct Network {
    routes: Vec<Route>,
    stops: BTreeMap<String, Stop>,
}

impl Network {
    /// Routes in the order the feed listed them.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// All stops, keyed by name.
    pub fn stops(&self) -> &BTreeMap<String, Stop> {
        &self.stops
    }

    /// Look up a stop by its exact (case-sensitive) name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    pub fn contains_stop(&self, name: &str) -> bool {
        self.stops.contains_key(name)
    }

    /// Stop names in sorted order.
    pub fn stop_names(&self) -> impl Iterator<Item = &str> {
        self.stops.keys().map(String::as_str)
    }

    /// Insert `name` if unseen, then tag it with `line` and link it to its neighbours.
    fn visit(&mut self, id: &str, name: &str, line: &str, prev: Option<&str>, next: Option<&str>) {
        let stop = self
            .stops
            .entry(name.to_string())
            .or_insert_with(|| Stop::new(id, name));

        stop.add_line(line);
        if let Some(prev) = prev {
            stop.add_connection(Connection::new(prev, line));
        }
        if let Some(next) = next {
            stop.add_connection(Connection::new(next, line));
        }
    }
}

/// Build the network from feed routes.
///
/// Fails on the first route or stop missing a required field; no partial
/// network is returned.
pub fn build_network(feed: &[FeedRoute]) -> Result<Network, MalformedFeed> {
    let mut network = Network::default();

    for (index, route) in feed.iter().enumerate() {
        let route_id = required(&route.id).ok_or(MalformedFeed::Route { index, field: "id" })?;
        let line = required(&route.name).ok_or(MalformedFeed::Route {
            index,
            field: "name",
        })?;

        let stops = validate_stops(route_id, &route.stops)?;

        debug!(route = route_id, line, stops = stops.len(), "adding route");

        for (i, (stop_id, stop_name)) in stops.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| stops[p].1);
            let next = stops.get(i + 1).map(|(_, name)| *name);
            network.visit(stop_id, stop_name, line, prev, next);
        }

        network
            .routes
            .push(Route::new(route_id, line, route.stops.len()));
    }

    info!(
        routes = network.routes.len(),
        stops = network.stops.len(),
        "built subway network"
    );

    Ok(network)
}

/// Check every stop on a route up front, returning `(id, name)` pairs.
fn validate_stops<'a>(
    route_id: &str,
    stops: &'a [FeedStop],
) -> Result<Vec<(&'a str, &'a str)>, MalformedFeed> {
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            let missing = |field| MalformedFeed::Stop {
                route: route_id.to_string(),
                index,
                field,
            };
            let id = required(&stop.id).ok_or_else(|| missing("id"))?;
            let name = required(&stop.name).ok_or_else(|| missing("name"))?;
            Ok((id, name))
        })
        .collect()
}

/// A field counts as present only if it is non-blank.
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbours<'a>(network: &'a Network, name: &str) -> Vec<(&'a str, &'a str)> {
        network
            .stop(name)
            .unwrap()
            .connections()
            .iter()
            .map(|c| (c.stop(), c.line()))
            .collect()
    }

    #[test]
    fn single_route_is_a_chain() {
        let feed = vec![FeedRoute::from_names(
            "Red",
            &["Davis", "Porter", "Harvard", "Central"],
        )];
        let network = build_network(&feed).unwrap();

        assert_eq!(network.routes().len(), 1);
        assert_eq!(network.routes()[0].stop_count(), 4);
        assert_eq!(network.stops().len(), 4);

        assert_eq!(neighbours(&network, "Davis"), vec![("Porter", "Red")]);
        assert_eq!(
            neighbours(&network, "Porter"),
            vec![("Davis", "Red"), ("Harvard", "Red")]
        );
        assert_eq!(neighbours(&network, "Central"), vec![("Harvard", "Red")]);
    }

    #[test]
    fn every_consecutive_pair_is_linked_both_ways() {
        let feed = vec![
            FeedRoute::from_names("Red", &["Alewife", "Davis", "Porter", "Park Street"]),
            FeedRoute::from_names("Green", &["Copley", "Arlington", "Park Street", "Haymarket"]),
        ];
        let network = build_network(&feed).unwrap();

        for route in &feed {
            let line = route.name.as_deref().unwrap();
            for pair in route.stops.windows(2) {
                let a = pair[0].name.as_deref().unwrap();
                let b = pair[1].name.as_deref().unwrap();
                assert!(neighbours(&network, a).contains(&(b, line)), "{a} -> {b}");
                assert!(neighbours(&network, b).contains(&(a, line)), "{b} -> {a}");
            }
        }
    }

    #[test]
    fn shared_stop_collects_lines() {
        let feed = vec![
            FeedRoute::from_names("Red", &["Charles/MGH", "Park Street", "Downtown Crossing"]),
            FeedRoute::from_names("Green", &["Boylston", "Park Street", "Government Center"]),
        ];
        let network = build_network(&feed).unwrap();

        let park = network.stop("Park Street").unwrap();
        assert_eq!(park.lines(), ["Red", "Green"]);
        assert!(park.is_transfer());
        assert_eq!(park.connections().len(), 4);
        assert!(!network.stop("Boylston").unwrap().is_transfer());
    }

    #[test]
    fn first_seen_id_is_kept() {
        let feed = vec![
            FeedRoute::new("Red", "Red Line", vec![FeedStop::new("70075", "Park Street")]),
            FeedRoute::new(
                "Green-B",
                "Green Line B",
                vec![FeedStop::new("70200", "Park Street")],
            ),
        ];
        let network = build_network(&feed).unwrap();
        assert_eq!(network.stop("Park Street").unwrap().id(), "70075");
    }

    #[test]
    fn repeated_segment_does_not_duplicate_edges() {
        let feed = vec![
            FeedRoute::from_names("Green", &["Kenmore", "Hynes", "Copley"]),
            FeedRoute::from_names("Green", &["Kenmore", "Hynes"]),
        ];
        let network = build_network(&feed).unwrap();
        assert_eq!(
            neighbours(&network, "Hynes"),
            vec![("Kenmore", "Green"), ("Copley", "Green")]
        );
        assert_eq!(network.routes().len(), 2);
    }

    #[test]
    fn empty_route_is_recorded_without_stops() {
        let feed = vec![FeedRoute::from_names("Mattapan", &[])];
        let network = build_network(&feed).unwrap();
        assert_eq!(network.routes()[0].stop_count(), 0);
        assert!(network.stops().is_empty());
    }

    #[test]
    fn stop_names_are_sorted() {
        let feed = vec![FeedRoute::from_names("Red", &["Porter", "Davis", "Alewife"])];
        let network = build_network(&feed).unwrap();
        let names: Vec<_> = network.stop_names().collect();
        assert_eq!(names, vec!["Alewife", "Davis", "Porter"]);
        assert!(network.contains_stop("Davis"));
        assert!(!network.contains_stop("davis"));
    }

    #[test]
    fn route_missing_name_is_malformed() {
        let feed = vec![
            FeedRoute::from_names("Red", &["Davis", "Porter"]),
            FeedRoute {
                id: Some("Blue".into()),
                name: None,
                stops: vec![],
            },
        ];
        assert_eq!(
            build_network(&feed).unwrap_err(),
            MalformedFeed::Route {
                index: 1,
                field: "name"
            }
        );
    }

    #[test]
    fn route_with_blank_id_is_malformed() {
        let feed = vec![FeedRoute {
            id: Some("  ".into()),
            name: Some("Blue Line".into()),
            stops: vec![],
        }];
        let err = build_network(&feed).unwrap_err();
        assert_eq!(err, MalformedFeed::Route { index: 0, field: "id" });
        assert_eq!(err.to_string(), "malformed feed: route #0 has no id");
    }

    #[test]
    fn stop_missing_fields_is_malformed() {
        let mut route = FeedRoute::from_names("Orange", &["Oak Grove", "Malden Center"]);
        route.stops[1].name = None;
        let err = build_network(&[route]).unwrap_err();
        assert_eq!(
            err,
            MalformedFeed::Stop {
                route: "Orange".into(),
                index: 1,
                field: "name"
            }
        );
        assert_eq!(
            err.to_string(),
            "malformed feed: stop #1 on route Orange has no name"
        );

        let mut route = FeedRoute::from_names("Orange", &["Oak Grove"]);
        route.stops[0].id = None;
        assert!(matches!(
            build_network(&[route]),
            Err(MalformedFeed::Stop { field: "id", .. })
        ));
    }
}
