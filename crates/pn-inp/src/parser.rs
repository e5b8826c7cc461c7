//! The top-level driver: one forward pass over lines, then assembly.

use tracing::debug;

use crate::builders::builder_for;
use crate::error::ErrorKind;
use crate::line::normalize;
use crate::options::ParseOptions;
use crate::output::ParseOutcome;
use crate::section::{Section, is_header};
use crate::state::{ParseState, Record};

/// Parse network text with default options.
pub fn parse_network(text: &str) -> ParseOutcome {
    parse_network_with(text, &ParseOptions::default())
}

/// Parse network text into a feature graph plus the errors found.
///
/// Never fails: every problem is reported in `ParseOutcome::errors` and the
/// graph holds everything that could be built.
pub fn parse_network_with(text: &str, options: &ParseOptions) -> ParseOutcome {
    let mut state = ParseState::new(options.clone());
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for (index, raw) in text.lines().enumerate() {
        fold_line(&mut state, index + 1, raw);
    }

    let outcome = state.finish();
    debug!(
        features = outcome.graph.len(),
        errors = outcome.errors.len(),
        "network parsed"
    );
    outcome
}

/// Route one raw line: skip blanks, track headers, dispatch data lines.
pub fn fold_line(state: &mut ParseState, line_number: usize, raw: &str) {
    let normalized = normalize(raw);
    if normalized.is_blank() {
        return;
    }

    if is_header(&normalized.content) {
        let section = Section::enter(&normalized.content);
        debug!(line = line_number, header = %section.header, known = section.kind.is_some(), "section");
        state.enter_section(section);
        return;
    }

    let Some(kind) = state.section().kind else {
        let message = if state.section().header.is_empty() {
            format!("Line outside of any section ignored: '{}'", normalized.content)
        } else {
            format!(
                "Unrecognized section '{}', line ignored: '{}'",
                state.section().header,
                normalized.content
            )
        };
        state.error(ErrorKind::Structural, line_number, message);
        return;
    };

    let record = Record {
        tokens: normalized.tokens(),
        line: line_number,
        comment: normalized.comment.as_deref(),
    };
    builder_for(kind)(state, &record);
}
