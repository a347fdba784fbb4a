//! Active filters: values, filters, filter sets
//!
//! A [`Filter`] is one definition plus its comparator flags and values. It is
//! identified by its [`FilterKey`]: filters sharing a key are merged, never
//! duplicated. Operations here never mutate their input; they return a new
//! snapshot for the caller to swap in.

mod compare;
mod filter;

pub use compare::filters_equal;
pub use filter::{
    Filter, FilterKey, Filters, create_filter_value, filter_key_equal, find_from_filters,
    get_enabled_filters, has_enabled_filter_values, merge_filter_value, remove_filter_value,
    remove_from_filters, toggle_filter_value,
};

use serde::{Deserialize, Serialize};

/// One autocomplete option: a label and the value it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub name: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        FilterOption {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single value of a filter, shown as one chip
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterValue {
    /// Value sent to the backend
    pub v: String,
    /// Human label, e.g. "TCP" for protocol 6
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Kept on the chip but left out of queries
    #[serde(default)]
    pub disabled: bool,
}

impl FilterValue {
    pub fn new(v: impl Into<String>) -> Self {
        FilterValue {
            v: v.into(),
            ..Default::default()
        }
    }

    pub fn with_display(v: impl Into<String>, display: impl Into<String>) -> Self {
        FilterValue {
            v: v.into(),
            display: Some(display.into()),
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.v)
    }
}
