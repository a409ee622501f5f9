//! Subway route records.

use std::fmt;

/// A named subway line as delivered by the feed.
///
/// Routes are created once per feed entry and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: String,
    name: String,
    stop_count: usize,
}

impl Route {
    /// Create a route record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, stop_count: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stop_count,
        }
    }

    /// Feed identifier (e.g. `"Red"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable long name (e.g. `"Red Line"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stops listed for this route.
    pub fn stop_count(&self) -> usize {
        self.stop_count
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let route = Route::new("Red", "Red Line", 22);
        assert_eq!(route.id(), "Red");
        assert_eq!(route.name(), "Red Line");
        assert_eq!(route.stop_count(), 22);
    }

    #[test]
    fn display_uses_long_name() {
        let route = Route::new("Green-B", "Green Line B", 23);
        assert_eq!(format!("{}", route), "Green Line B");
    }
}
