//! Fewest-transfer route planning.
//!
//! Answers "which lines do I ride to get from here to there with the fewest
//! changes?" over a built [`Network`](crate::network::Network). Only the
//! number of transfers matters; the number of stops ridden does not.

mod config;
mod search;
mod transfers;

pub use config::SearchConfig;
pub use search::{PathOutcome, Planner, SearchError, SearchRequest, find_best_path};
pub use transfers::{collapse_repeats, select_fewest_transfers, transfer_count};
