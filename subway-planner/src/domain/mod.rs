//! Domain types for the subway planner.
//!
//! A `Route` is a line as listed by the feed; a `Stop` is a station with
//! the lines serving it and its connections to neighbouring stations.

mod route;
mod stop;

pub use route::Route;
pub use stop::{Connection, Stop};
