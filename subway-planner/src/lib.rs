//! Subway route planner.
//!
//! Builds a stop graph of the MBTA subway from the v3 API and answers:
//! "which lines do I ride from this stop to that one with the fewest
//! changes?"

pub mod console;
pub mod domain;
pub mod mbta;
pub mod network;
pub mod planner;
