//! Structured JSON logger
//!
//! One log line = one event. Field keys are emitted in alphabetical order so
//! the same event always produces the same line shape. Writes are
//! synchronous and unbuffered; INFO and WARN go to stdout, ERROR to stderr.

use std::fmt::Display;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues (no-op replaces, deletes of missing records)
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// A single structured log event, built field by field and emitted once
#[derive(Debug)]
pub struct Event {
    severity: Severity,
    name: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl Event {
    /// Start an event with the given severity
    pub fn new(severity: Severity, name: &'static str) -> Self {
        Self {
            severity,
            name,
            fields: Vec::new(),
        }
    }

    /// Start an INFO event
    pub fn info(name: &'static str) -> Self {
        Self::new(Severity::Info, name)
    }

    /// Start a WARN event
    pub fn warn(name: &'static str) -> Self {
        Self::new(Severity::Warn, name)
    }

    /// Start an ERROR event
    pub fn error(name: &'static str) -> Self {
        Self::new(Severity::Error, name)
    }

    /// Attach a field; keys are sorted alphabetically at emit time
    pub fn field(mut self, key: &'static str, value: impl Display) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    /// Write the event to its severity's stream
    pub fn emit(self) {
        match self.severity {
            Severity::Error => self.write_to(&mut io::stderr()),
            _ => self.write_to(&mut io::stdout()),
        }
    }

    /// Internal write implementation; the testing seam
    fn write_to<W: Write>(mut self, writer: &mut W) {
        // Build JSON by hand: deterministic ordering, event name first
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        escape_into(&mut line, self.name);
        line.push_str("\",\"severity\":\"");
        line.push_str(self.severity.as_str());
        line.push('"');

        self.fields.sort_by_key(|(key, _)| *key);
        for (key, value) in &self.fields {
            line.push_str(",\"");
            escape_into(&mut line, key);
            line.push_str("\":\"");
            escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        // One write_all, one flush per event
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Escape special characters for JSON string content
fn escape_into(out: &mut String, raw: &str) {
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}
