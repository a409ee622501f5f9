//! Interactive console front end.
//!
//! Prints network summaries, asks for a start and end stop, and reports the
//! fewest-transfer route. Generic over its input and output so it can be
//! driven from tests.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::network::{Network, summary};
use crate::planner::{PathOutcome, Planner, SearchConfig, SearchError, SearchRequest};

/// Which end of the journey is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopKind {
    Start,
    End,
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopKind::Start => f.write_str("starting"),
            StopKind::End => f.write_str("ending"),
        }
    }
}

/// What the user answered at a stop prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// A stop name known to the network.
    Stop(String),
    /// The user asked to leave, or input ended.
    Quit,
}

/// Console session over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the route list, the longest and shortest routes and the transfer stops.
    pub fn print_summary(&mut self, network: &Network) -> io::Result<()> {
        writeln!(self.output, "\nSubway routes:")?;
        for name in summary::route_names(network) {
            writeln!(self.output, "{name}")?;
        }

        if let Some(extremes) = summary::stop_extremes(network.routes()) {
            writeln!(
                self.output,
                "\nSubway route with the most stops: {} ({} stops)",
                extremes.most.name(),
                extremes.most.stop_count()
            )?;
            writeln!(
                self.output,
                "Subway route with the fewest stops: {} ({} stops)",
                extremes.least.name(),
                extremes.least.stop_count()
            )?;
        }

        writeln!(self.output, "\nStops served by more than one route:")?;
        for stop in summary::transfer_stops(network) {
            writeln!(
                self.output,
                "{} (routes: {})",
                stop.name(),
                stop.lines().join(", ")
            )?;
        }
        Ok(())
    }

    /// List every stop name.
    pub fn print_stop_names(&mut self, network: &Network) -> io::Result<()> {
        writeln!(self.output, "\nSubway stops:")?;
        for name in network.stop_names() {
            writeln!(self.output, "{name}")?;
        }
        Ok(())
    }

    /// Ask for a stop name until a valid one is given.
    ///
    /// `options` lists all stops and asks again; `quit` or end of input
    /// gives up. Both keywords are case-insensitive; stop names are not.
    pub fn prompt_stop_name(&mut self, kind: StopKind, network: &Network) -> io::Result<Prompt> {
        loop {
            write!(
                self.output,
                "\nEnter the {kind} stop name (or 'options' to list all stops, 'quit' to exit): "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Prompt::Quit);
            }
            let answer = line.trim();

            if answer.eq_ignore_ascii_case("quit") {
                return Ok(Prompt::Quit);
            }
            if answer.eq_ignore_ascii_case("options") {
                self.print_stop_names(network)?;
                continue;
            }
            if network.contains_stop(answer) {
                return Ok(Prompt::Stop(answer.to_string()));
            }

            writeln!(
                self.output,
                "Error: '{answer}' is not a stop. Try again (names are case-sensitive)."
            )?;
        }
    }

    /// Report the outcome of a search.
    pub fn print_outcome(
        &mut self,
        request: &SearchRequest,
        outcome: &Result<PathOutcome, SearchError>,
    ) -> io::Result<()> {
        let (start, end) = (&request.start, &request.end);
        match outcome {
            Ok(PathOutcome::Found(lines)) if lines.is_empty() => {
                writeln!(self.output, "\n{start} and {end} are the same stop; no lines needed.")
            }
            Ok(PathOutcome::Found(lines)) => writeln!(
                self.output,
                "\nA route from {start} to {end}: {}",
                lines.join(", ")
            ),
            Ok(PathOutcome::NoPathFound) => writeln!(
                self.output,
                "\nThere exists no route that connects {start} and {end}"
            ),
            Err(e) => writeln!(self.output, "\nCould not plan a route: {e}"),
        }
    }

    /// Prompt for journeys and answer them until the user quits.
    pub fn run(&mut self, network: &Network, config: &SearchConfig) -> io::Result<()> {
        let planner = Planner::new(network, config);
        loop {
            let Prompt::Stop(start) = self.prompt_stop_name(StopKind::Start, network)? else {
                return Ok(());
            };
            let Prompt::Stop(end) = self.prompt_stop_name(StopKind::End, network)? else {
                return Ok(());
            };

            let request = SearchRequest::new(start, end);
            let outcome = planner.best_path(&request);
            self.print_outcome(&request, &outcome)?;
        }
    }
}
