//! Record builders, one per section kind.
//!
//! Every builder checks its minimum column count first and builds nothing on
//! a shortfall. Field failures are local: the field takes its default and the
//! rest of the record is still built.

pub mod geometry;
pub mod links;
pub mod nodes;

use crate::section::SectionKind;
use crate::state::{ParseState, Record};

/// Builder signature shared by all record kinds.
pub type Builder = fn(&mut ParseState, &Record<'_>);

/// Static dispatch table from section kind to builder.
pub fn builder_for(kind: SectionKind) -> Builder {
    match kind {
        SectionKind::Junctions => nodes::junction,
        SectionKind::Reservoirs => nodes::reservoir,
        SectionKind::Tanks => nodes::tank,
        SectionKind::Pipes => links::pipe,
        SectionKind::Valves => links::valve,
        SectionKind::Pumps => links::pump,
        SectionKind::Coordinates => geometry::coordinates,
        SectionKind::Vertices => geometry::vertices,
    }
}
