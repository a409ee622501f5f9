//! Subway stops and the connections between them.

/// A directed edge from one stop to a neighbouring stop on a given line.
///
/// Connections live on the stop they leave from; the builder always adds
/// the reverse connection as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    stop: String,
    line: String,
}

impl Connection {
    /// Create a connection to `stop` travelling on `line`.
    pub fn new(stop: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            stop: stop.into(),
            line: line.into(),
        }
    }

    /// Name of the stop this connection leads to.
    pub fn stop(&self) -> &str {
        &self.stop
    }

    /// Name of the line travelled along this connection.
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// A physical station, keyed by its name.
///
/// Lines and connections only ever grow while the network is being built.
/// Both keep first-insertion order: connection order is the order in which
/// the planner explores neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    id: String,
    name: String,
    lines: Vec<String>,
    connections: Vec<Connection>,
}

impl Stop {
    /// Create a stop with no lines and no connections.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lines: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Feed identifier of the first platform seen under this name.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lines serving this stop, in the order they were first seen.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Outgoing connections, in the order they were first added.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Whether more than one line calls here.
    pub fn is_transfer(&self) -> bool {
        self.lines.len() > 1
    }

    /// Record that `line` serves this stop. Returns `false` if it was already known.
    pub fn add_line(&mut self, line: &str) -> bool {
        if self.lines.iter().any(|l| l == line) {
            return false;
        }
        self.lines.push(line.to_string());
        true
    }

    /// Add an outgoing connection. Returns `false` if an identical one exists.
    pub fn add_connection(&mut self, connection: Connection) -> bool {
        if self.connections.contains(&connection) {
            return false;
        }
        self.connections.push(connection);
        true
    }
}
