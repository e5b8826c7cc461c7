//! Parse results and their serialized forms.

use std::path::Path;

use pn_graph::FeatureGraph;
use serde::Serialize;

use crate::error::{ErrorKind, LoadResult, ParseError};

/// Feature graph plus every error found, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOutcome {
    #[serde(rename = "features")]
    pub graph: FeatureGraph,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors_of(&self, kind: ErrorKind) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    pub fn to_json(&self) -> LoadResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> LoadResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the feature collection alone as GeoJSON-style JSON.
    pub fn write_features_json(&self, path: &Path) -> LoadResult<()> {
        let content = serde_json::to_string_pretty(&self.graph)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
