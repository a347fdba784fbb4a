//! Named filter presets toggled as a unit

use crate::autocomplete::{NoSource, OptionsCache};
use crate::config::RawQuickFilter;
use crate::definitions::{FilterDefinition, find_filter_definition};
use crate::model::{
    Filter, FilterKey, Filters, create_filter_value, find_from_filters, merge_filter_value,
    remove_filter_value,
};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct QuickFilter {
    pub name: String,
    /// Applied when the filters are reset
    pub default: bool,
    pub filters: Vec<Filter>,
}

/// Resolve raw quick filters against the definitions
///
/// A quick filter naming an unknown filter id is dropped whole.
pub fn parse_quick_filters(
    defs: &[Arc<FilterDefinition>],
    raw: &[RawQuickFilter],
) -> Vec<QuickFilter> {
    let mut cache = OptionsCache::new();
    raw.iter()
        .filter_map(|qf| {
            let mut filters = Vec::new();
            for (key, values) in &qf.filter {
                let key = FilterKey::from_filter_key(key);
                let Some(def) = find_filter_definition(defs, &key.id) else {
                    log::warn!("quick filter '{}' dropped: unknown filter '{}'", qf.name, key.id);
                    return None;
                };
                let values = values
                    .split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| create_filter_value(def, v, &NoSource, &mut cache))
                    .collect();
                filters.push(Filter {
                    def: Arc::clone(def),
                    not: key.not,
                    more_than: key.more_than,
                    values,
                });
            }
            Some(QuickFilter {
                name: qf.name.clone(),
                default: qf.default,
                filters,
            })
        })
        .collect()
}

/// Every value of the quick filter is present under the same key
pub fn is_quick_filter_active(quick: &QuickFilter, active: &[Filter]) -> bool {
    quick.filters.iter().all(|qf| {
        find_from_filters(active, &qf.key())
            .is_some_and(|f| qf.values.iter().all(|v| f.contains_value(&v.v)))
    })
}

pub fn apply_quick_filter(
    filters: &Filters,
    quick: &QuickFilter,
    cache: &mut OptionsCache,
) -> Filters {
    cache.clear();
    filters.with_list(merge_all(filters.list.clone(), &quick.filters))
}

pub fn remove_quick_filter(
    filters: &Filters,
    quick: &QuickFilter,
    cache: &mut OptionsCache,
) -> Filters {
    cache.clear();
    let mut list = filters.list.clone();
    for qf in &quick.filters {
        for value in &qf.values {
            list = remove_filter_value(&list, &qf.key(), &value.v);
        }
    }
    filters.with_list(list)
}

/// Filters of every default quick filter, merged
pub fn default_quick_filters(quick: &[QuickFilter]) -> Vec<Filter> {
    quick
        .iter()
        .filter(|qf| qf.default)
        .fold(Vec::new(), |list, qf| merge_all(list, &qf.filters))
}

/// Replace the active filters by the default quick filters
pub fn reset_filters(filters: &Filters, quick: &[QuickFilter], cache: &mut OptionsCache) -> Filters {
    cache.clear();
    filters.with_list(default_quick_filters(quick))
}

fn merge_all(mut list: Vec<Filter>, filters: &[Filter]) -> Vec<Filter> {
    for f in filters {
        for value in &f.values {
            list = merge_filter_value(&list, &f.def, f.not, f.more_than, value.clone()).0;
        }
    }
    list
}
