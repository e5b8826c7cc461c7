//! pn-inp: reader for the sectioned network model text format.
//!
//! A single forward pass routes each line by its `[SECTION]` header to a
//! record builder; a post-pass stitches link geometry from node coordinates.
//! Problems never abort a parse: they are collected as [`ParseError`]s next
//! to a best-effort [`pn_graph::FeatureGraph`].
//!
//! ```
//! let outcome = pn_inp::parse_network("[JUNCTIONS]\nJ1 100\n[COORDINATES]\nJ1 10 20\n");
//! assert!(outcome.errors.is_empty());
//! let node = outcome.graph.node("J1").unwrap();
//! assert_eq!((node.geometry.x, node.geometry.y), (10.0, 20.0));
//! ```

pub mod builders;
pub mod error;
pub mod line;
pub mod options;
pub mod output;
pub mod parser;
pub mod section;
pub mod state;
pub mod summary;

pub use error::{ErrorKind, LoadError, LoadResult, ParseError};
pub use options::ParseOptions;
pub use output::ParseOutcome;
pub use parser::{parse_network, parse_network_with};
pub use section::{Section, SectionKind};
pub use summary::Summary;

/// Read a network file and parse it.
pub fn load_file(path: &std::path::Path, options: &ParseOptions) -> LoadResult<ParseOutcome> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_network_with(&content, options))
}

/// Read parser options from a YAML file.
pub fn load_options(path: &std::path::Path) -> LoadResult<ParseOptions> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ParseOptions::from_yaml_str(&content)?)
}
