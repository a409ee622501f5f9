//! Subway network construction.
//!
//! Turns the ordered stop lists of each route into a stop graph whose
//! edges remember which line they belong to.

mod builder;
mod feed;
pub mod summary;

pub use builder::{MalformedFeed, Network, build_network};
pub use feed::{FeedRoute, FeedStop};
