//! Parser configuration.

use serde::Deserialize;

/// Knobs for [`crate::parse_network_with`]. Missing keys take their defaults
/// when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Report an identifier defined twice in the same namespace. The later
    /// definition wins either way.
    pub report_redefinitions: bool,
    /// Maximum `(key, value)` pairs read from a pump record.
    pub max_pump_pairs: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            report_redefinitions: true,
            max_pump_pairs: 4,
        }
    }
}

impl ParseOptions {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
