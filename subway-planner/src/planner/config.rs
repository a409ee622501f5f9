//! Search configuration for the path finder.

/// Default ceiling on connections explored in one search.
const DEFAULT_MAX_EXPANSIONS: usize = 5_000_000;

/// Limits applied to a single path search.
///
/// Simple-path enumeration is exponential in the worst case. These bounds
/// keep a search over a hostile network finite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Longest path to consider, in connections. `None` means unbounded.
    pub max_depth: Option<usize>,

    /// Maximum number of connections followed before giving up.
    pub max_expansions: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given limits.
    pub fn new(max_depth: Option<usize>, max_expansions: usize) -> Self {
        Self {
            max_depth,
            max_expansions,
        }
    }

    /// Set the maximum path length.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the expansion ceiling.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = n;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}
