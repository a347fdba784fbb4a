//! Source/destination swapping and back-and-forth collapsing of filters

use crate::autocomplete::OptionsCache;
use crate::definitions::{FilterDefinition, find_filter_definition};
use crate::model::{Filter, FilterKey, Filters, find_from_filters, merge_filter_value, remove_filter_value};
use std::sync::Arc;

/// Side of the flow a filter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    Source,
    Destination,
}

impl FilterTarget {
    pub fn prefix(self) -> &'static str {
        match self {
            FilterTarget::Source => "src_",
            FilterTarget::Destination => "dst_",
        }
    }
}

/// Id without its `src_`/`dst_` prefix
pub fn endpoint_id(id: &str) -> &str {
    id.strip_prefix("src_")
        .or_else(|| id.strip_prefix("dst_"))
        .unwrap_or(id)
}

/// Definition for the other side of `def`, or for `target` when given
///
/// Endpoint definitions only move when a target is given. Returns `def`
/// itself when there is nothing to swap to.
pub fn swap_filter_definition(
    defs: &[Arc<FilterDefinition>],
    def: &Arc<FilterDefinition>,
    target: Option<FilterTarget>,
) -> Arc<FilterDefinition> {
    let id = if let Some(rest) = def.id.strip_prefix("src_") {
        let prefix = target.map_or("dst_", FilterTarget::prefix);
        format!("{prefix}{rest}")
    } else if let Some(rest) = def.id.strip_prefix("dst_") {
        let prefix = target.map_or("src_", FilterTarget::prefix);
        format!("{prefix}{rest}")
    } else if let Some(target) = target.filter(|_| def.is_endpoint()) {
        format!("{}{}", target.prefix(), def.id)
    } else {
        return Arc::clone(def);
    };
    match find_filter_definition(defs, &id) {
        Some(found) => Arc::clone(found),
        None => {
            log::warn!("can't swap filter '{}': no definition for '{id}'", def.id);
            Arc::clone(def)
        }
    }
}

pub fn swap_filter(defs: &[Arc<FilterDefinition>], filter: &Filter) -> Filter {
    Filter {
        def: swap_filter_definition(defs, &filter.def, None),
        ..filter.clone()
    }
}

pub(crate) fn swap_filter_list(defs: &[Arc<FilterDefinition>], list: &[Filter]) -> Vec<Filter> {
    list.iter().map(|f| swap_filter(defs, f)).collect()
}

/// Swap every filter between source and destination
///
/// Cached options are cleared since the active set changed shape.
pub fn swap_filters(
    defs: &[Arc<FilterDefinition>],
    filters: &Filters,
    cache: &mut OptionsCache,
) -> Filters {
    cache.clear();
    filters.with_list(swap_filter_list(defs, &filters.list))
}

/// Move one value to the swapped definition of its filter
///
/// The value is appended even when the target filter already holds it.
pub fn swap_filter_value(
    defs: &[Arc<FilterDefinition>],
    filters: &[Filter],
    key: &FilterKey,
    value: &str,
    target: Option<FilterTarget>,
) -> Vec<Filter> {
    let Some(filter) = find_from_filters(filters, key) else {
        log::warn!("can't swap value '{value}': filter '{key}' not found");
        return filters.to_vec();
    };
    let Some(moved) = filter.values.iter().find(|v| v.v == value).cloned() else {
        return filters.to_vec();
    };
    let swapped = swap_filter_definition(defs, &filter.def, target);
    if swapped.id == filter.def.id {
        return filters.to_vec();
    }
    let target_key = FilterKey::new(swapped.id.clone(), filter.not, filter.more_than);
    let mut list = remove_filter_value(filters, key, value);
    match list.iter_mut().find(|f| f.has_key(&target_key)) {
        Some(existing) => existing.values.push(moved),
        None => list.push(Filter {
            def: swapped,
            not: filter.not,
            more_than: filter.more_than,
            values: vec![moved],
        }),
    }
    list
}

/// Move one value from a directional filter to its endpoint filter
///
/// Nothing changes for filters without direction or when the endpoint
/// definition doesn't exist. A value already
/// present on the endpoint filter is not duplicated.
pub fn bnf_filter_value(
    defs: &[Arc<FilterDefinition>],
    filters: &[Filter],
    key: &FilterKey,
    value: &str,
) -> Vec<Filter> {
    let Some(filter) = find_from_filters(filters, key) else {
        log::warn!("can't merge value '{value}': filter '{key}' not found");
        return filters.to_vec();
    };
    let Some(moved) = filter.values.iter().find(|v| v.v == value).cloned() else {
        return filters.to_vec();
    };
    let base_id = endpoint_id(&filter.def.id);
    if base_id == filter.def.id {
        return filters.to_vec();
    }
    let Some(endpoint) = find_filter_definition(defs, base_id) else {
        log::warn!("can't merge '{}' both ways: no definition for '{base_id}'", filter.def.id);
        return filters.to_vec();
    };
    let endpoint = Arc::clone(endpoint);
    let (not, more_than) = (filter.not, filter.more_than);
    let list = remove_filter_value(filters, key, value);
    merge_filter_value(&list, &endpoint, not, more_than, moved).0
}

/// Collapse every directional value into its endpoint filter when one exists
pub fn bnf_filters(
    defs: &[Arc<FilterDefinition>],
    filters: &Filters,
    cache: &mut OptionsCache,
) -> Filters {
    cache.clear();
    let mut list = filters.list.clone();
    for filter in &filters.list {
        if filter.def.is_endpoint() {
            continue;
        }
        for value in &filter.values {
            list = bnf_filter_value(defs, &list, &filter.key(), &value.v);
        }
    }
    filters.with_list(list)
}

/// Empty filter set, keeping the back-and-forth flag
pub fn clear_filters(filters: &Filters, cache: &mut OptionsCache) -> Filters {
    cache.clear();
    filters.with_list(Vec::new())
}
