//! Configuration for the help dialog module

use serde::Deserialize;

/// Help dialog module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Feature flags for the module (`premium`, `chat`)
    #[serde(default)]
    pub feature_flags: Vec<String>,

    /// Reset repeated tabs across the four position slots on save
    #[serde(default = "default_true")]
    pub enforce_unique_tabs: bool,

    /// Version stored configuration is upgraded to
    #[serde(default = "default_plugin_version")]
    pub plugin_version: String,

    /// Maximum number of widgets per site
    #[serde(default = "default_max_widgets")]
    pub max_widgets: usize,
}

impl Config {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feature_flags: Vec::new(),
            enforce_unique_tabs: true,
            plugin_version: default_plugin_version(),
            max_widgets: default_max_widgets(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_plugin_version() -> String {
    "2.10.0".to_string()
}

fn default_max_widgets() -> usize {
    100
}
