//! MBTA v3 API response DTOs.
//!
//! The API speaks JSON:API: every response wraps its resources in a
//! top-level `data` array, and each resource carries an `id` plus an
//! `attributes` object. Only the fields the planner reads are modelled.
//! Everything is optional because sparse fieldsets and partial records
//! are normal; the network builder decides what is required.

use serde::Deserialize;

/// A JSON:API document whose primary data is a list of resources.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    pub data: Vec<T>,
}

/// A route resource from `/routes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResource {
    pub id: Option<String>,

    #[serde(default)]
    pub attributes: RouteAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteAttributes {
    /// Full display name, e.g. "Green Line B".
    pub long_name: Option<String>,
}

/// A stop resource from `/stops`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopResource {
    pub id: Option<String>,

    #[serde(default)]
    pub attributes: StopAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopAttributes {
    pub name: Option<String>,
}
