//! Filters as URL query parameters
//!
//! The `filters` parameter holds one segment per filter, separated by `;`.
//! A segment is the filter key followed by `=` and the comma separated raw
//! values, so `src_port!=80,443` is the negated `src_port` filter. `match`
//! and `bnf` carry the match mode and the back-and-forth flag.

use crate::autocomplete::{AutocompleteSource, OptionsCache};
use crate::definitions::{FilterDefinition, find_filter_definition};
use crate::error::UrlError;
use crate::model::{Filter, FilterKey, Filters, create_filter_value, merge_filter_value};
use crate::query::MatchMode;
use std::sync::Arc;

pub const FILTERS_PARAM: &str = "filters";
pub const MATCH_PARAM: &str = "match";
pub const BNF_PARAM: &str = "bnf";

/// Browser history, owned by the host application
pub trait Navigator {
    fn set_query_params(&mut self, params: &[(&str, String)]);
}

pub fn filters_to_url(filters: &[Filter]) -> String {
    filters
        .iter()
        .map(|f| {
            let values: Vec<&str> = f.values.iter().map(|v| v.v.as_str()).collect();
            format!("{}={}", f.key(), values.join(","))
        })
        .collect::<Vec<_>>()
        .join(";")
}

pub fn filters_from_url(
    defs: &[Arc<FilterDefinition>],
    s: &str,
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> Result<Vec<Filter>, UrlError> {
    let mut list = Vec::new();
    for segment in s.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, values) = segment
            .split_once('=')
            .ok_or_else(|| UrlError::MalformedSegment(segment.to_string()))?;
        let key = FilterKey::from_filter_key(key.trim());
        let def = find_filter_definition(defs, &key.id)
            .ok_or_else(|| UrlError::UnknownField(key.id.clone()))?;
        for value in values.split(',').map(str::trim).filter(|v| !v.is_empty()) {
            let value = create_filter_value(def, value, source, cache);
            list = merge_filter_value(&list, def, key.not, key.more_than, value).0;
        }
    }
    Ok(list)
}

/// Write the filter state to the URL through the navigator
pub fn push_filters_to_url(navigator: &mut dyn Navigator, filters: &Filters, mode: MatchMode) {
    navigator.set_query_params(&[
        (FILTERS_PARAM, filters_to_url(&filters.list)),
        (MATCH_PARAM, mode.to_string()),
        (BNF_PARAM, filters.back_and_forth.to_string()),
    ]);
}

/// Read back what [`push_filters_to_url`] wrote
///
/// Missing parameters give the defaults: no filter, match all, no
/// back-and-forth.
pub fn filters_from_params(
    defs: &[Arc<FilterDefinition>],
    params: &[(String, String)],
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> Result<(Filters, MatchMode), UrlError> {
    let param = |name: &str| params.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str());
    let list = match param(FILTERS_PARAM) {
        Some(s) => filters_from_url(defs, s, source, cache)?,
        None => Vec::new(),
    };
    let mode = param(MATCH_PARAM).and_then(MatchMode::parse).unwrap_or_default();
    let back_and_forth = param(BNF_PARAM) == Some("true");
    Ok((
        Filters {
            list,
            back_and_forth,
        },
        mode,
    ))
}
