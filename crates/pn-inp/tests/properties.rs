//! Property tests over generated networks.

use proptest::prelude::*;

use pn_inp::{ErrorKind, parse_network};

/// Render a network with `n` junctions chained by `n - 1` pipes, each pipe
/// carrying `v` vertices.
fn chain(n: usize, v: usize) -> String {
    let mut text = String::from("[JUNCTIONS]\n");
    for i in 0..n {
        text.push_str(&format!("J{i} {}\n", 100 + i));
    }
    text.push_str("[PIPES]\n");
    for i in 1..n {
        text.push_str(&format!("P{i} J{} J{i} 100 12 130\n", i - 1));
    }
    text.push_str("[COORDINATES]\n");
    for i in 0..n {
        text.push_str(&format!("J{i} {i} 0\n"));
    }
    text.push_str("[VERTICES]\n");
    for i in 1..n {
        for k in 0..v {
            text.push_str(&format!("P{i} {i}.5 {k}\n"));
        }
    }
    text
}

proptest! {
    #[test]
    fn parsing_is_deterministic(n in 1usize..12, v in 0usize..4) {
        let text = chain(n, v);
        let first = parse_network(&text);
        let second = parse_network(&text);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn sequence_ids_are_contiguous(n in 1usize..12) {
        let outcome = parse_network(&chain(n, 0));
        let nodes: Vec<u32> = outcome.graph.nodes().map(|x| x.sequence_id.index()).collect();
        let links: Vec<u32> = outcome.graph.links().map(|x| x.sequence_id.index()).collect();
        prop_assert_eq!(nodes, (0..n as u32).collect::<Vec<_>>());
        prop_assert_eq!(links, (0..n.saturating_sub(1) as u32).collect::<Vec<_>>());
    }

    #[test]
    fn polylines_have_vertices_plus_endpoints(n in 2usize..8, v in 0usize..5) {
        let outcome = parse_network(&chain(n, v));
        prop_assert!(outcome.is_clean());
        for link in outcome.graph.links() {
            prop_assert_eq!(link.geometry.len(), v + 2);
        }
    }

    #[test]
    fn bad_elevation_is_reported_once_on_its_line(n in 1usize..10, bad in 0usize..10) {
        let bad = bad % n;
        let mut text = String::from("[JUNCTIONS]\n");
        for i in 0..n {
            if i == bad {
                text.push_str(&format!("J{i} elev?\n"));
            } else {
                text.push_str(&format!("J{i} 10\n"));
            }
        }
        let outcome = parse_network(&text);
        let fields: Vec<_> = outcome.errors_of(ErrorKind::Field).collect();
        prop_assert_eq!(fields.len(), 1);
        prop_assert_eq!(fields[0].line, bad + 2);
        prop_assert_eq!(fields[0].section.as_str(), "[JUNCTIONS]");
        prop_assert_eq!(outcome.graph.nodes().count(), n);
    }
}
