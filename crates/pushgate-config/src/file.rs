use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::settings::PolicySettings;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub(crate) policy: PolicySettings,
    #[serde(default)]
    pub(crate) groups: IndexMap<String, Vec<String>>,
    pub(crate) tracker: Option<TrackerSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct TrackerSection {
    pub(crate) linked: bool,
    pub(crate) authorization_url: Option<String>,
    pub(crate) projects: Vec<String>,
    pub(crate) issues: Vec<String>,
    pub(crate) queries: IndexMap<String, Vec<String>>,
}

pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
