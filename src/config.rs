use crate::definitions::{FilterCategory, FilterComponent, FilterDefinition, get_filter_definitions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

const DEFAULT_PROFILE: &str = include_str!("../config/default.json5");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: json5::Error,
    },
}

/// One filterable field as declared by the console plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub id: String,
    pub name: String,
    pub component: FilterComponent,
    #[serde(default)]
    pub category: FilterCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub auto_complete_adds_quotes: bool,
}

/// Table column, carrying the backend field name of the filter it maps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Quick filter before its keys are resolved against the definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuickFilter {
    pub name: String,
    #[serde(default)]
    pub default: bool,
    /// Filter key (`id`, `id!`, `id>`) to comma separated values
    #[serde(default)]
    pub filter: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub filters: Vec<FieldConfig>,
    pub columns: Vec<ColumnConfig>,
    pub quick_filters: Vec<RawQuickFilter>,
}

impl ConsoleConfig {
    pub fn definitions(&self) -> Vec<Arc<FilterDefinition>> {
        get_filter_definitions(&self.filters, &self.columns)
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ConsoleConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    json5::from_str::<ConsoleConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static ConsoleConfig {
    static DEFAULT_CONFIG: LazyLock<ConsoleConfig> = LazyLock::new(|| {
        json5::from_str(DEFAULT_PROFILE).expect("valid built-in console profile")
    });
    &DEFAULT_CONFIG
}

/// Definitions of the built-in profile
pub fn default_definitions() -> Vec<Arc<FilterDefinition>> {
    default_config().definitions()
}
