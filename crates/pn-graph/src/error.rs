//! Graph-specific error types.

/// Cross-reference failures between the node and link tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A coordinate record names a node that doesn't exist.
    UnknownNode { node: String },

    /// A vertex record names a link that doesn't exist.
    UnknownLink { link: String },

    /// A link's start and/or end node doesn't exist.
    UnresolvedEndpoints {
        link: String,
        /// Slot of the link in the link table.
        slot: usize,
        missing: Vec<String>,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownNode { node } => {
                write!(f, "Node '{}' is not defined", node)
            }
            GraphError::UnknownLink { link } => {
                write!(f, "Link '{}' is not defined", link)
            }
            GraphError::UnresolvedEndpoints { link, missing, .. } => {
                let names: Vec<String> = missing.iter().map(|id| format!("'{id}'")).collect();
                write!(
                    f,
                    "Link '{}' references undefined node(s) {}",
                    link,
                    names.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}
