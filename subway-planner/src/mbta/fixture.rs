//! Offline feed that reads saved MBTA responses from disk.
//!
//! Useful for development and testing without network access. The
//! directory layout mirrors the two API calls:
//!
//! ```text
//! <dir>/routes.json          body of GET /routes
//! <dir>/stops/<route>.json   body of GET /stops?filter[route]=<route>
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::network::FeedRoute;

use super::FeedSource;
use super::convert::{parse_document, to_feed_route};
use super::error::FeedError;
use super::types::{RouteResource, StopResource};

/// Feed backed by a directory of saved JSON:API responses.
#[derive(Debug, Clone)]
pub struct FixtureFeed {
    dir: PathBuf,
}

impl FixtureFeed {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the saved stop list for a route.
    ///
    /// The id must be a single plain path component so the lookup stays
    /// inside the fixture directory.
    pub fn stops_path(&self, route_id: &str) -> Result<PathBuf, FeedError> {
        if Path::new(route_id).file_name() != Some(OsStr::new(route_id)) {
            return Err(FeedError::Fixture {
                path: self.dir.join("stops").display().to_string(),
                message: format!("route id {route_id:?} is not a plain file name"),
            });
        }
        Ok(self.dir.join("stops").join(format!("{route_id}.json")))
    }

    fn routes_path(&self) -> PathBuf {
        self.dir.join("routes.json")
    }
}

impl FeedSource for FixtureFeed {
    async fn fetch_routes(&self) -> Result<Vec<FeedRoute>, FeedError> {
        let routes: Vec<RouteResource> = read_document(&self.routes_path())?;

        let mut feed = Vec::with_capacity(routes.len());
        for route in routes {
            let stops: Vec<StopResource> = match route.id.as_deref() {
                Some(id) => read_document(&self.stops_path(id)?)?,
                None => Vec::new(),
            };
            feed.push(to_feed_route(route, stops));
        }

        debug!(dir = %self.dir.display(), routes = feed.len(), "loaded fixture feed");
        Ok(feed)
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FeedError> {
    let fixture_error = |message: String| FeedError::Fixture {
        path: path.display().to_string(),
        message,
    };

    let body = std::fs::read_to_string(path).map_err(|e| fixture_error(e.to_string()))?;
    parse_document(&body).map_err(|e| fixture_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{FeedStop, build_network};

    fn write(path: &Path, body: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    fn red_and_blue(dir: &Path) -> FixtureFeed {
        let feed = FixtureFeed::new(dir);
        write(
            &dir.join("routes.json"),
            r#"{"data": [
                {"type": "route", "id": "Red", "attributes": {"long_name": "Red Line"}},
                {"type": "route", "id": "Blue", "attributes": {"long_name": "Blue Line"}}
            ]}"#,
        );
        write(
            &feed.stops_path("Red").unwrap(),
            r#"{"data": [
                {"id": "place-davis", "attributes": {"name": "Davis"}},
                {"id": "place-portr", "attributes": {"name": "Porter"}},
                {"id": "place-dwnxg", "attributes": {"name": "Downtown Crossing"}}
            ]}"#,
        );
        write(
            &feed.stops_path("Blue").unwrap(),
            r#"{"data": [
                {"id": "place-state", "attributes": {"name": "State"}},
                {"id": "place-gover", "attributes": {"name": "Government Center"}}
            ]}"#,
        );
        feed
    }

    #[tokio::test]
    async fn loads_routes_with_stops() {
        let dir = tempfile::tempdir().unwrap();
        let feed = red_and_blue(dir.path()).fetch_routes().await.unwrap();

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].name.as_deref(), Some("Red Line"));
        assert_eq!(feed[0].stops[1], FeedStop::new("place-portr", "Porter"));
        assert_eq!(feed[1].stops.len(), 2);

        let network = build_network(&feed).unwrap();
        assert_eq!(network.routes().len(), 2);
        assert_eq!(network.stops().len(), 5);
    }

    #[tokio::test]
    async fn missing_stop_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let feed = red_and_blue(dir.path());
        std::fs::remove_file(feed.stops_path("Blue").unwrap()).unwrap();

        let err = feed.fetch_routes().await.unwrap_err();
        match err {
            FeedError::Fixture { path, .. } => assert!(path.ends_with("Blue.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn route_without_id_skips_stop_lookup() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("routes.json"),
            r#"{"data": [{"type": "route", "attributes": {"long_name": "Mystery Line"}}]}"#,
        );

        let feed = FixtureFeed::new(dir.path()).fetch_routes().await.unwrap();
        assert_eq!(feed[0].id, None);
        assert!(feed[0].stops.is_empty());
        assert!(build_network(&feed).is_err());
    }

    #[test]
    fn stops_path_rejects_non_file_names() {
        let feed = FixtureFeed::new("fixtures");
        assert!(feed.stops_path("Green-B").is_ok());

        for id in ["../x", "a/b", "..", ".", "", "/etc/passwd"] {
            assert!(
                matches!(feed.stops_path(id), Err(FeedError::Fixture { .. })),
                "{id:?}"
            );
        }
    }

    #[tokio::test]
    async fn route_id_cannot_escape_fixture_dir() {
        let dir = tempfile::tempdir().unwrap();
        let fixtures = dir.path().join("fixtures");
        write(
            &fixtures.join("routes.json"),
            r#"{"data": [{"type": "route", "id": "../secret", "attributes": {"long_name": "Escape Line"}}]}"#,
        );
        // Would be read as stops/../secret.json without the check
        write(
            &fixtures.join("secret.json"),
            r#"{"data": [{"id": "x", "attributes": {"name": "Outside"}}]}"#,
        );

        let err = FixtureFeed::new(&fixtures).fetch_routes().await.unwrap_err();
        match err {
            FeedError::Fixture { message, .. } => assert!(message.contains("../secret")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn garbage_document_is_a_fixture_error() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("routes.json"), "not json");

        let err = FixtureFeed::new(dir.path()).fetch_routes().await.unwrap_err();
        assert!(matches!(err, FeedError::Fixture { .. }));
        assert!(err.to_string().contains("routes.json"));
    }
}
