//! Junction, reservoir and tank records.

use pn_graph::{Category, Junction, NodeKind, Reservoir, Tank};

use crate::error::ErrorKind;
use crate::state::{ParseState, Record};

/// `ID Elevation [Demand] [Pattern]`
pub fn junction(state: &mut ParseState, record: &Record<'_>) {
    if !state.require_columns(record, 2, "Junction") {
        return;
    }
    let elevation = state.real(record, 1, "elevation", Category::Junction);
    let demand = state.optional_real(record, 2, "demand", Category::Junction);
    let pattern = record.token(3).map(str::to_string);

    state.record_node(
        record,
        NodeKind::Junction(Junction {
            elevation,
            demand,
            pattern,
        }),
    );
}

/// `ID Head [Pattern]`
pub fn reservoir(state: &mut ParseState, record: &Record<'_>) {
    if !state.require_columns(record, 2, "Reservoir") {
        return;
    }
    let head = state.real(record, 1, "head", Category::Reservoir);
    let pattern = record.token(2).map(str::to_string);

    state.record_node(record, NodeKind::Reservoir(Reservoir { head, pattern }));
}

/// `ID Elevation InitLevel MinLevel MaxLevel Diameter MinVolume [VolCurve] [Overflow]`
///
/// A volume curve of `*` is a placeholder for "none".
pub fn tank(state: &mut ParseState, record: &Record<'_>) {
    if !state.require_columns(record, 7, "Tank") {
        return;
    }
    let elevation = state.real(record, 1, "elevation", Category::Tank);
    let init_level = state.real(record, 2, "initial level", Category::Tank);
    let min_level = state.real(record, 3, "minimum level", Category::Tank);
    let max_level = state.real(record, 4, "maximum level", Category::Tank);
    let diameter = state.real(record, 5, "diameter", Category::Tank);
    let min_volume = state.real(record, 6, "minimum volume", Category::Tank);
    let volume_curve_id = record
        .token(7)
        .filter(|t| *t != "*")
        .unwrap_or_default()
        .to_string();
    let overflow = record
        .token(8)
        .and_then(|token| overflow_flag(state, record, token));

    state.record_node(
        record,
        NodeKind::Tank(Tank {
            elevation,
            init_level,
            min_level,
            max_level,
            diameter,
            min_volume,
            volume_curve_id,
            overflow,
        }),
    );
}

fn overflow_flag(state: &mut ParseState, record: &Record<'_>, token: &str) -> Option<bool> {
    match token.to_ascii_uppercase().as_str() {
        "YES" | "TRUE" => Some(true),
        "NO" | "FALSE" => Some(false),
        _ => {
            state.error(
                ErrorKind::Field,
                record.line,
                format!(
                    "Invalid overflow flag '{token}' (Tank '{}'), expected YES or NO",
                    record.identifier()
                ),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::section::Section;
    use pn_graph::NodeEntity;

    fn run(builder: fn(&mut ParseState, &Record<'_>), header: &str, line: &str) -> ParseState {
        let mut state = ParseState::new(ParseOptions::default());
        state.enter_section(Section::enter(header));
        let record = Record {
            tokens: line.split(' ').collect(),
            line: 2,
            comment: Some("note"),
        };
        builder(&mut state, &record);
        state
    }

    fn only_node(state: &ParseState) -> &NodeEntity {
        let nodes = state.network().nodes();
        assert_eq!(nodes.len(), 1);
        nodes.iter().next().unwrap()
    }

    #[test]
    fn junction_full_record() {
        let state = run(junction, "[JUNCTIONS]", "J1 100 2.5 PAT1");
        let node = only_node(&state);
        assert_eq!(node.comment.as_deref(), Some("note"));
        assert_eq!(
            node.kind,
            NodeKind::Junction(Junction {
                elevation: 100.0,
                demand: Some(2.5),
                pattern: Some("PAT1".into()),
            })
        );
        assert!(state.errors().is_empty());
    }

    #[test]
    fn junction_bad_demand_still_builds() {
        let state = run(junction, "[JUNCTIONS]", "J1 100 lots");
        let NodeKind::Junction(j) = &only_node(&state).kind else {
            panic!("expected junction");
        };
        assert_eq!(j.elevation, 100.0);
        assert_eq!(j.demand, None);
        assert_eq!(state.errors().len(), 1);
        assert!(state.errors()[0].message.contains("demand"));
    }

    #[test]
    fn junction_needs_elevation() {
        let state = run(junction, "[JUNCTIONS]", "J1");
        assert!(state.network().nodes().is_empty());
        assert_eq!(state.errors()[0].kind, ErrorKind::Structural);
    }

    #[test]
    fn reservoir_with_pattern() {
        let state = run(reservoir, "[RESERVOIRS]", "R1 250 P1");
        assert_eq!(
            only_node(&state).kind,
            NodeKind::Reservoir(Reservoir {
                head: 250.0,
                pattern: Some("P1".into()),
            })
        );
    }

    #[test]
    fn tank_with_curve_and_overflow() {
        let state = run(tank, "[TANKS]", "T1 10 3 1 6 20 0 VC1 yes");
        let NodeKind::Tank(t) = &only_node(&state).kind else {
            panic!("expected tank");
        };
        assert_eq!(t.max_level, 6.0);
        assert_eq!(t.diameter, 20.0);
        assert_eq!(t.volume_curve_id, "VC1");
        assert_eq!(t.overflow, Some(true));
    }

    #[test]
    fn tank_placeholder_curve_and_bad_flag() {
        let state = run(tank, "[TANKS]", "T1 10 3 1 6 20 0 * maybe");
        let NodeKind::Tank(t) = &only_node(&state).kind else {
            panic!("expected tank");
        };
        assert_eq!(t.volume_curve_id, "");
        assert_eq!(t.overflow, None);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].kind, ErrorKind::Field);
    }

    #[test]
    fn tank_short_record_builds_nothing() {
        let state = run(tank, "[TANKS]", "T1 10 3 1 6 20");
        assert!(state.network().nodes().is_empty());
        assert!(state.errors()[0].message.contains("Tank requires at least 7 columns"));
    }
}
