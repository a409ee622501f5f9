//! Feed records consumed by the network builder.
//!
//! These mirror what a transit feed hands over: a route and its stops in
//! travel order. Fields are optional because feeds omit them rather than
//! failing; the builder decides what is required.

/// A stop as listed on a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedStop {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl FeedStop {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }
}

/// A route with its stops in physical travel order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedRoute {
    pub id: Option<String>,
    pub name: Option<String>,
    pub stops: Vec<FeedStop>,
}

impl FeedRoute {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stops: Vec<FeedStop>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            stops,
        }
    }

    /// Build a route whose stop ids are the stop names.
    ///
    /// Handy for hand-written networks where ids carry no meaning.
    pub fn from_names(name: impl Into<String>, stops: &[&str]) -> Self {
        let name = name.into();
        Self {
            id: Some(name.clone()),
            name: Some(name),
            stops: stops.iter().map(|s| FeedStop::new(*s, *s)).collect(),
        }
    }
}
