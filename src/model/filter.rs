use super::FilterValue;
use crate::autocomplete::{AutocompleteSource, OptionsCache};
use crate::definitions::FilterDefinition;
use std::fmt;
use std::sync::Arc;

/// Identity of a filter within a set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterKey {
    pub id: String,
    pub not: bool,
    pub more_than: bool,
}

impl FilterKey {
    pub fn new(id: impl Into<String>, not: bool, more_than: bool) -> Self {
        FilterKey {
            id: id.into(),
            not,
            more_than,
        }
    }

    /// Parse the string form: `id`, `id!` (not) or `id>` (more than)
    pub fn from_filter_key(key: &str) -> Self {
        if let Some(id) = key.strip_suffix('!') {
            FilterKey::new(id, true, false)
        } else if let Some(id) = key.strip_suffix('>') {
            FilterKey::new(id, false, true)
        } else {
            FilterKey::new(key, false, false)
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.not {
            "!"
        } else if self.more_than {
            ">"
        } else {
            ""
        };
        write!(f, "{}{}", self.id, suffix)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub def: Arc<FilterDefinition>,
    pub not: bool,
    pub more_than: bool,
    pub values: Vec<FilterValue>,
}

impl Filter {
    pub fn new(def: Arc<FilterDefinition>, values: Vec<FilterValue>) -> Self {
        Filter {
            def,
            not: false,
            more_than: false,
            values,
        }
    }

    pub fn negated(mut self) -> Self {
        self.not = true;
        self
    }

    pub fn at_least(mut self) -> Self {
        self.more_than = true;
        self
    }

    pub fn key(&self) -> FilterKey {
        FilterKey::new(self.def.id.clone(), self.not, self.more_than)
    }

    pub fn has_key(&self, key: &FilterKey) -> bool {
        self.def.id == key.id && self.not == key.not && self.more_than == key.more_than
    }

    pub fn contains_value(&self, v: &str) -> bool {
        self.values.iter().any(|value| value.v == v)
    }
}

/// The active filter set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filters {
    pub list: Vec<Filter>,
    /// Also match the traffic going the other way
    pub back_and_forth: bool,
}

impl Filters {
    pub fn new(list: Vec<Filter>) -> Self {
        Filters {
            list,
            back_and_forth: false,
        }
    }

    pub fn with_list(&self, list: Vec<Filter>) -> Self {
        Filters {
            list,
            back_and_forth: self.back_and_forth,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

pub fn filter_key_equal(a: &Filter, b: &Filter) -> bool {
    a.def.id == b.def.id && a.not == b.not && a.more_than == b.more_than
}

pub fn find_from_filters<'a>(filters: &'a [Filter], key: &FilterKey) -> Option<&'a Filter> {
    filters.iter().find(|f| f.has_key(key))
}

pub fn remove_from_filters(filters: &[Filter], key: &FilterKey) -> Vec<Filter> {
    filters.iter().filter(|f| !f.has_key(key)).cloned().collect()
}

pub fn has_enabled_filter_values(filter: &Filter) -> bool {
    filter.values.iter().any(|v| !v.disabled)
}

/// Copy of `filters` without disabled values nor filters left empty
pub fn get_enabled_filters(filters: &Filters) -> Filters {
    let list = filters
        .list
        .iter()
        .filter_map(|f| {
            let values: Vec<FilterValue> = f.values.iter().filter(|v| !v.disabled).cloned().collect();
            (!values.is_empty()).then(|| Filter {
                values,
                ..f.clone()
            })
        })
        .collect();
    filters.with_list(list)
}

/// Append `value` under the filter keyed by `(def, not, more_than)`
///
/// The filter is created when missing. Returns the new list and whether the
/// value was added; a value already present leaves the list unchanged.
pub fn merge_filter_value(
    filters: &[Filter],
    def: &Arc<FilterDefinition>,
    not: bool,
    more_than: bool,
    value: FilterValue,
) -> (Vec<Filter>, bool) {
    let key = FilterKey::new(def.id.clone(), not, more_than);
    let mut list = filters.to_vec();
    match list.iter_mut().find(|f| f.has_key(&key)) {
        Some(existing) if existing.contains_value(&value.v) => (list, false),
        Some(existing) => {
            existing.values.push(value);
            (list, true)
        }
        None => {
            list.push(Filter {
                def: Arc::clone(def),
                not,
                more_than,
                values: vec![value],
            });
            (list, true)
        }
    }
}

/// Remove one value, dropping the filter when it has no value left
pub fn remove_filter_value(filters: &[Filter], key: &FilterKey, v: &str) -> Vec<Filter> {
    filters
        .iter()
        .filter_map(|f| {
            if !f.has_key(key) {
                return Some(f.clone());
            }
            let values: Vec<FilterValue> = f.values.iter().filter(|value| value.v != v).cloned().collect();
            (!values.is_empty()).then(|| Filter {
                values,
                ..f.clone()
            })
        })
        .collect()
}

/// Flip the disabled flag of one chip
pub fn toggle_filter_value(filters: &[Filter], key: &FilterKey, v: &str) -> Vec<Filter> {
    let mut list = filters.to_vec();
    if let Some(filter) = list.iter_mut().find(|f| f.has_key(key)) {
        for value in filter.values.iter_mut().filter(|value| value.v == v) {
            value.disabled = !value.disabled;
        }
    }
    list
}

/// Resolve a raw value against the definition options to get a display label
///
/// An option matching by name or value gives `{v: option.value, display:
/// option.name}`; otherwise the raw value is kept without label.
pub fn create_filter_value(
    def: &FilterDefinition,
    value: &str,
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> FilterValue {
    let options = def.get_options(value, source, cache).unwrap_or_else(|err| {
        log::debug!("options for '{}' unavailable: {err}", def.id);
        Vec::new()
    });
    options
        .into_iter()
        .find(|o| o.name == value || o.value == value)
        .map(|o| FilterValue::with_display(o.value, o.name))
        .unwrap_or_else(|| FilterValue::new(value))
}
