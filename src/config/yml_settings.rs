use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ExpandConfig;

/// Settings file contents; every field is optional and overrides the defaults
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct YmlSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_separator: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_separator: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backref_marker: Option<char>,
}

impl YmlSettings {
    pub fn from_yaml(yml: &str) -> Result<Self> {
        serde_yaml::from_str(yml).context("Invalid yaml configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yml = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::from_yaml(&yml)
    }

    /// Overlay these settings on top of `base`
    pub fn apply_to(self, base: ExpandConfig) -> ExpandConfig {
        ExpandConfig {
            delimiter_start: self.delimiter_start.unwrap_or(base.delimiter_start),
            delimiter_end: self.delimiter_end.unwrap_or(base.delimiter_end),
            range_separator: self.range_separator.unwrap_or(base.range_separator),
            choice_separator: self.choice_separator.unwrap_or(base.choice_separator),
            backref_marker: self.backref_marker.unwrap_or(base.backref_marker),
        }
    }
}

impl From<YmlSettings> for ExpandConfig {
    fn from(value: YmlSettings) -> Self {
        value.apply_to(ExpandConfig::default())
    }
}
