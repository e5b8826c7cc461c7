//! Per-invocation parse state threaded through the line fold.

use pn_core::{Real, parse_real};
use pn_graph::{Assembly, Category, GraphError, Inserted, LinkKind, NetworkBuilder, NodeKind};
use tracing::{trace, warn};

use crate::error::{ErrorKind, ParseError};
use crate::options::ParseOptions;
use crate::output::ParseOutcome;
use crate::section::Section;

/// One tokenized data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub tokens: Vec<&'a str>,
    /// 1-based line number.
    pub line: usize,
    pub comment: Option<&'a str>,
}

impl<'a> Record<'a> {
    /// First token: the identifier the record is keyed by.
    pub fn identifier(&self) -> &'a str {
        self.tokens.first().copied().unwrap_or_default()
    }

    pub fn token(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }
}

/// Where an entity was (last) defined.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Origin {
    line: usize,
    section: String,
}

/// Transient state for a single parse. Not shared, not reused.
#[derive(Debug)]
pub struct ParseState {
    section: Section,
    network: NetworkBuilder,
    errors: Vec<ParseError>,
    node_origins: Vec<Origin>,
    link_origins: Vec<Origin>,
    options: ParseOptions,
}

impl ParseState {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            section: Section::default(),
            network: NetworkBuilder::new(),
            errors: Vec::new(),
            node_origins: Vec::new(),
            link_origins: Vec::new(),
            options,
        }
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn enter_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn network(&self) -> &NetworkBuilder {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut NetworkBuilder {
        &mut self.network
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Append an error attributed to the current section.
    pub fn error(&mut self, kind: ErrorKind, line: usize, message: impl Into<String>) {
        self.errors.push(ParseError {
            kind,
            line,
            section: self.section.header.clone(),
            message: message.into(),
        });
    }

    /// Check a record's column count, reporting a shortfall.
    pub fn require_columns(&mut self, record: &Record<'_>, min: usize, what: &str) -> bool {
        if record.tokens.len() >= min {
            return true;
        }
        self.error(
            ErrorKind::Structural,
            record.line,
            format!(
                "{what} requires at least {min} columns, found {}",
                record.tokens.len()
            ),
        );
        false
    }

    /// Parse a required number at `index`; `0` with an error on failure.
    pub fn real(
        &mut self,
        record: &Record<'_>,
        index: usize,
        field: &'static str,
        category: Category,
    ) -> Real {
        self.optional_real(record, index, field, category)
            .unwrap_or(0.0)
    }

    /// Parse an optional number at `index`; absent when the column is
    /// missing, absent with an error when it is malformed.
    pub fn optional_real(
        &mut self,
        record: &Record<'_>,
        index: usize,
        field: &'static str,
        category: Category,
    ) -> Option<Real> {
        let token = record.token(index)?;
        self.number(record, token, field, category)
    }

    /// Parse a number token, reporting a field error on failure.
    pub fn number(
        &mut self,
        record: &Record<'_>,
        token: &str,
        field: &'static str,
        what: impl std::fmt::Display,
    ) -> Option<Real> {
        match parse_real(token, field) {
            Ok(value) => Some(value),
            Err(err) => {
                self.error(
                    ErrorKind::Field,
                    record.line,
                    format!("{err} ({what} '{}')", record.identifier()),
                );
                None
            }
        }
    }

    /// Record a built node keyed by the record's identifier.
    pub fn record_node(&mut self, record: &Record<'_>, kind: NodeKind) {
        let identifier = record.identifier();
        trace!(line = record.line, identifier, "node");
        let inserted =
            self.network
                .add_node(identifier, kind, record.comment.map(str::to_string));
        let origin = self.origin(record.line);
        match inserted {
            Inserted::New { .. } => self.node_origins.push(origin),
            Inserted::Replaced { slot, .. } => {
                self.redefined("Node", identifier, slot, true, &origin);
                if let Some(entry) = self.node_origins.get_mut(slot) {
                    *entry = origin;
                }
            }
        }
    }

    /// Record a built link keyed by the record's identifier.
    pub fn record_link(
        &mut self,
        record: &Record<'_>,
        start_node_id: &str,
        end_node_id: &str,
        kind: LinkKind,
    ) {
        let identifier = record.identifier();
        trace!(line = record.line, identifier, "link");
        let inserted = self.network.add_link(
            identifier,
            start_node_id,
            end_node_id,
            kind,
            record.comment.map(str::to_string),
        );
        let origin = self.origin(record.line);
        match inserted {
            Inserted::New { .. } => self.link_origins.push(origin),
            Inserted::Replaced { slot, .. } => {
                self.redefined("Link", identifier, slot, false, &origin);
                if let Some(entry) = self.link_origins.get_mut(slot) {
                    *entry = origin;
                }
            }
        }
    }

    fn origin(&self, line: usize) -> Origin {
        Origin {
            line,
            section: self.section.header.clone(),
        }
    }

    fn redefined(&mut self, what: &str, identifier: &str, slot: usize, node: bool, at: &Origin) {
        if !self.options.report_redefinitions {
            return;
        }
        let origins = if node {
            &self.node_origins
        } else {
            &self.link_origins
        };
        let previous = origins.get(slot).map_or(0, |o| o.line);
        warn!(line = at.line, identifier, previous, "{what} redefined");
        self.error(
            ErrorKind::Redefinition,
            at.line,
            format!("{what} '{identifier}' redefined; replaces definition on line {previous}"),
        );
    }

    /// Assemble link geometry and extract the outcome.
    pub fn finish(self) -> ParseOutcome {
        let Assembly { graph, unresolved } = self.network.build();
        let mut errors = self.errors;

        for err in unresolved {
            let origin = match &err {
                GraphError::UnresolvedEndpoints { slot, .. } => self.link_origins.get(*slot),
                GraphError::UnknownNode { .. } | GraphError::UnknownLink { .. } => None,
            };
            let (line, section) = origin
                .map(|o| (o.line, o.section.clone()))
                .unwrap_or_default();
            errors.push(ParseError {
                kind: ErrorKind::Reference,
                line,
                section,
                message: err.to_string(),
            });
        }

        ParseOutcome { graph, errors }
    }
}
