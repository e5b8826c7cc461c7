//! Line normalization: comment stripping and whitespace collapsing.

/// Comment marker; runs to end of line.
pub const COMMENT_MARKER: char = ';';

/// A raw line split into normalized content and its trailing comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedLine {
    /// Pre-comment text, whitespace runs collapsed to one space, trimmed.
    pub content: String,
    /// Trimmed comment text, `None` when absent or blank.
    pub comment: Option<String>,
}

impl NormalizedLine {
    /// Lines that normalize to empty content are skipped entirely.
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Content split on single spaces.
    pub fn tokens(&self) -> Vec<&str> {
        if self.content.is_empty() {
            Vec::new()
        } else {
            self.content.split(' ').collect()
        }
    }
}

pub fn normalize(raw: &str) -> NormalizedLine {
    let (body, comment) = match raw.split_once(COMMENT_MARKER) {
        Some((body, comment)) => (body, Some(comment.trim())),
        None => (raw, None),
    };

    NormalizedLine {
        content: body.split_whitespace().collect::<Vec<_>>().join(" "),
        comment: comment.filter(|c| !c.is_empty()).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_trims() {
        let line = normalize("  J1 \t 100\t\t25   PAT1  ");
        assert_eq!(line.content, "J1 100 25 PAT1");
        assert_eq!(line.comment, None);
        assert_eq!(line.tokens(), vec!["J1", "100", "25", "PAT1"]);
    }

    #[test]
    fn splits_at_first_comment_marker() {
        let line = normalize("P1 J1 J2 100 ; main ; line  ");
        assert_eq!(line.content, "P1 J1 J2 100");
        assert_eq!(line.comment.as_deref(), Some("main ; line"));
    }

    #[test]
    fn comment_only_line_is_blank() {
        let line = normalize(";ID  Elev  Demand");
        assert!(line.is_blank());
        assert!(line.tokens().is_empty());
        assert!(normalize("   \r").is_blank());
    }

    #[test]
    fn empty_comment_is_dropped() {
        assert_eq!(normalize("J1 10 ;   ").comment, None);
    }
}
