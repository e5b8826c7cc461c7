//! Coordinate and vertex records, applied to entities already built.

use pn_core::Point;

use crate::error::ErrorKind;
use crate::state::{ParseState, Record};

/// `NodeID X Y`: overwrite a node's position.
pub fn coordinates(state: &mut ParseState, record: &Record<'_>) {
    let Some(point) = point(state, record, "Coordinates") else {
        return;
    };
    if let Err(err) = state.network_mut().place_node(record.identifier(), point) {
        state.error(
            ErrorKind::Reference,
            record.line,
            format!("{err}; coordinates ignored"),
        );
    }
}

/// `LinkID X Y`: append an intermediate vertex, in file order.
pub fn vertices(state: &mut ParseState, record: &Record<'_>) {
    let Some(point) = point(state, record, "Vertices") else {
        return;
    };
    if let Err(err) = state.network_mut().push_vertex(record.identifier(), point) {
        state.error(
            ErrorKind::Reference,
            record.line,
            format!("{err}; vertex ignored"),
        );
    }
}

/// Both coordinates must parse; a record with either malformed is ignored.
fn point(state: &mut ParseState, record: &Record<'_>, what: &str) -> Option<Point> {
    if !state.require_columns(record, 3, what) {
        return None;
    }
    let x = state.number(record, record.tokens[1], "x", what);
    let y = state.number(record, record.tokens[2], "y", what);
    Some(Point::new(x?, y?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::nodes::junction;
    use crate::builders::links::pipe;
    use crate::options::ParseOptions;
    use crate::section::Section;

    fn record(line: &'static str, number: usize) -> Record<'static> {
        Record {
            tokens: line.split(' ').collect(),
            line: number,
            comment: None,
        }
    }

    fn seeded() -> ParseState {
        let mut state = ParseState::new(ParseOptions::default());
        state.enter_section(Section::enter("[JUNCTIONS]"));
        junction(&mut state, &record("J1 100", 2));
        junction(&mut state, &record("J2 90", 3));
        state.enter_section(Section::enter("[PIPES]"));
        pipe(&mut state, &record("P1 J1 J2 500 200 100", 5));
        state
    }

    #[test]
    fn coordinates_overwrite_position() {
        let mut state = seeded();
        state.enter_section(Section::enter("[COORDINATES]"));
        coordinates(&mut state, &record("J1 10 20", 7));
        coordinates(&mut state, &record("J1 11 21", 8));
        let node = state.network().nodes().get("J1").unwrap();
        assert_eq!(node.geometry, Point::new(11.0, 21.0));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn malformed_coordinates_are_ignored_entirely() {
        let mut state = seeded();
        state.enter_section(Section::enter("[COORDINATES]"));
        coordinates(&mut state, &record("J1 10 north", 7));
        let node = state.network().nodes().get("J1").unwrap();
        assert_eq!(node.geometry, Point::ORIGIN);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].kind, ErrorKind::Field);
        assert_eq!(state.errors()[0].section, "[COORDINATES]");
    }

    #[test]
    fn unknown_node_is_a_reference_error() {
        let mut state = seeded();
        state.enter_section(Section::enter("[COORDINATES]"));
        coordinates(&mut state, &record("J9 1 2", 9));
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].kind, ErrorKind::Reference);
        assert!(state.errors()[0].message.contains("'J9'"));
    }

    #[test]
    fn vertices_accumulate_in_order() {
        let mut state = seeded();
        state.enter_section(Section::enter("[VERTICES]"));
        vertices(&mut state, &record("P1 1 1", 10));
        vertices(&mut state, &record("P1 2 2", 11));
        vertices(&mut state, &record("P9 3 3", 12));
        vertices(&mut state, &record("P1 4", 13));

        let link = state.network().links().get("P1").unwrap();
        assert_eq!(link.geometry, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        let kinds: Vec<_> = state.errors().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ErrorKind::Reference, ErrorKind::Structural]);
    }

    #[test]
    fn malformed_vertex_is_ignored_with_field_error() {
        let mut state = seeded();
        state.enter_section(Section::enter("[VERTICES]"));
        vertices(&mut state, &record("P1 1 north", 10));
        vertices(&mut state, &record("P1 2 2", 11));

        let link = state.network().links().get("P1").unwrap();
        assert_eq!(link.geometry, vec![Point::new(2.0, 2.0)]);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].kind, ErrorKind::Field);
        assert_eq!(state.errors()[0].line, 10);
        assert_eq!(state.errors()[0].section, "[VERTICES]");
    }
}
