//! Fewest-transfer path search.
//!
//! Enumerates simple paths (no stop visited twice) depth-first from the
//! start stop, following each stop's connections in insertion order.
//! Every path that reaches the destination is a candidate; its line
//! sequence is collapsed so that riding one line through several stops
//! counts once, and the candidate with the fewest lines wins. The first
//! candidate found wins ties.
//!
//! The walk uses an explicit frame stack rather than recursion, and when
//! looking for the best path it abandons any branch whose collapsed line
//! count already matches the best candidate so far. Such a branch can only
//! produce candidates that would lose, so the answer is unchanged.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::Stop;
use crate::network::Network;

use super::config::SearchConfig;
use super::transfers::transfer_count;

/// Error from path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A start or end name that is not a stop in the network
    #[error("unknown stop name: {0}")]
    UnknownStop(String),

    /// The configured expansion ceiling was reached
    #[error("search gave up after exploring {expansions} connections")]
    LimitExceeded { expansions: usize },
}

/// A request to travel between two named stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub start: String,
    pub end: String,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Check that both stops exist, returning them.
    pub fn validate<'n>(
        &self,
        network: &'n Network,
    ) -> Result<(&'n Stop, &'n Stop), SearchError> {
        let lookup = |name: &str| {
            network
                .stop(name)
                .ok_or_else(|| SearchError::UnknownStop(name.to_string()))
        };
        Ok((lookup(&self.start)?, lookup(&self.end)?))
    }
}

/// Outcome of a valid search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Lines to ride, in order. Empty when start and end are the same stop.
    Found(Vec<String>),

    /// The stops are not connected.
    NoPathFound,
}

impl PathOutcome {
    /// The lines to ride, if a path exists.
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            PathOutcome::Found(lines) => Some(lines),
            PathOutcome::NoPathFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// Path finder over a frozen network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find the path with the fewest line transfers.
    pub fn best_path(&self, request: &SearchRequest) -> Result<PathOutcome, SearchError> {
        let (start, end) = request.validate(self.network)?;

        if start.name() == end.name() {
            return Ok(PathOutcome::Found(Vec::new()));
        }

        let mut sink = FewestTransfers::default();
        let expansions = self.explore(start, end.name(), &mut sink)?;

        debug!(
            start = start.name(),
            end = end.name(),
            expansions,
            transfers = ?sink.best.as_deref().map(transfer_count),
            "path search complete"
        );

        Ok(match sink.best {
            Some(lines) => PathOutcome::Found(lines),
            None => PathOutcome::NoPathFound,
        })
    }

    /// Every simple path between the two stops, as raw line sequences.
    ///
    /// Paths come out in the same order the best-path search visits them.
    /// A request from a stop to itself yields one empty path.
    pub fn all_paths(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Vec<String>>, SearchError> {
        let (start, end) = request.validate(self.network)?;

        if start.name() == end.name() {
            return Ok(vec![Vec::new()]);
        }

        let mut sink = AllPaths::default();
        self.explore(start, end.name(), &mut sink)?;
        Ok(sink.paths)
    }

    /// Depth-first walk over simple paths from `start`, reporting each arrival at `end`.
    ///
    /// Returns the number of connections followed.
    fn explore<S: PathSink>(
        &self,
        start: &'a Stop,
        end: &str,
        sink: &mut S,
    ) -> Result<usize, SearchError> {
        let mut frames = vec![Frame {
            stop: start,
            next: 0,
            opened_line: false,
        }];
        let mut on_path: HashSet<&'a str> = HashSet::from([start.name()]);
        // One entry per connection taken
        let mut raw: Vec<&'a str> = Vec::new();
        // Same lines with consecutive repeats merged
        let mut collapsed: Vec<&'a str> = Vec::new();
        let mut expansions = 0;

        while let Some(frame) = frames.last_mut() {
            let stop: &'a Stop = frame.stop;

            let Some(connection) = stop.connections().get(frame.next) else {
                let opened_line = frame.opened_line;
                frames.pop();
                on_path.remove(stop.name());
                raw.pop();
                if opened_line {
                    collapsed.pop();
                }
                continue;
            };
            frame.next += 1;

            let target = connection.stop();
            if on_path.contains(target) {
                continue;
            }
            if self.config.max_depth.is_some_and(|depth| raw.len() >= depth) {
                continue;
            }

            let line = connection.line();
            let opens = collapsed.last() != Some(&line);
            let length = collapsed.len() + usize::from(opens);
            if sink.bound().is_some_and(|bound| length >= bound) {
                continue;
            }

            expansions += 1;
            if expansions > self.config.max_expansions {
                return Err(SearchError::LimitExceeded {
                    expansions: self.config.max_expansions,
                });
            }

            raw.push(line);
            if opens {
                collapsed.push(line);
            }

            let next = if target == end {
                trace!(lines = ?collapsed, "reached destination");
                sink.record(&raw, &collapsed);
                None
            } else {
                self.network.stop(target)
            };

            match next {
                Some(next) => {
                    on_path.insert(next.name());
                    frames.push(Frame {
                        stop: next,
                        next: 0,
                        opened_line: opens,
                    });
                }
                None => {
                    raw.pop();
                    if opens {
                        collapsed.pop();
                    }
                }
            }
        }

        Ok(expansions)
    }
}

/// Find the fewest-transfer path between two named stops.
pub fn find_best_path(
    network: &Network,
    start: &str,
    end: &str,
    config: &SearchConfig,
) -> Result<PathOutcome, SearchError> {
    Planner::new(network, config).best_path(&SearchRequest::new(start, end))
}

/// One stop on the current path and how far through its connections we are.
struct Frame<'a> {
    stop: &'a Stop,
    next: usize,
    /// Whether arriving here started a new line in the collapsed sequence.
    opened_line: bool,
}

/// Receives paths that reach the destination.
trait PathSink {
    /// Branches whose collapsed length reaches this are not worth following.
    fn bound(&self) -> Option<usize>;

    fn record(&mut self, raw: &[&str], collapsed: &[&str]);
}

/// Keeps the first path with the fewest lines.
#[derive(Default)]
struct FewestTransfers {
    best: Option<Vec<String>>,
}

impl PathSink for FewestTransfers {
    fn bound(&self) -> Option<usize> {
        self.best.as_ref().map(Vec::len)
    }

    fn record(&mut self, _raw: &[&str], collapsed: &[&str]) {
        // Anything reaching here beat the bound, so it is strictly better
        self.best = Some(collapsed.iter().map(|l| l.to_string()).collect());
    }
}

/// Keeps every path, uncollapsed.
#[derive(Default)]
struct AllPaths {
    paths: Vec<Vec<String>>,
}

impl PathSink for AllPaths {
    fn bound(&self) -> Option<usize> {
        None
    }

    fn record(&mut self, raw: &[&str], _collapsed: &[&str]) {
        self.paths.push(raw.iter().map(|l| l.to_string()).collect());
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
