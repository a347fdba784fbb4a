//! Render active filters into the backend query string
//!
//! Directional and common filters render through their own encoder. Endpoint
//! filters have no backend field of their own: they render once per side, and
//! the two renditions are combined according to the match mode.

use crate::definitions::{FieldKind, FilterDefinition};
use crate::model::{Filter, FilterValue, Filters, get_enabled_filters};
use crate::transform::{endpoint_id, swap_filter_list};
use clap::ValueEnum;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Characters `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every filter must match
    #[default]
    All,
    /// Any filter may match
    Any,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::All => write!(f, "all"),
            MatchMode::Any => write!(f, "any"),
        }
    }
}

impl MatchMode {
    pub fn parse(s: &str) -> Option<MatchMode> {
        match s {
            "all" => Some(MatchMode::All),
            "any" => Some(MatchMode::Any),
            _ => None,
        }
    }
}

pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Reverse of the percent-encoding applied to queries, for display and tests
pub fn decode_query(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

fn enabled_values(filter: &Filter) -> Vec<FilterValue> {
    filter.values.iter().filter(|v| !v.disabled).cloned().collect()
}

/// AND-combination of every filter
///
/// Without endpoint filters this is a plain `&` join. With endpoint filters
/// two groups are built, one where every endpoint renders on its source side
/// and one where it renders on its destination side, joined with `|`. A
/// namespace endpoint also carries the negated source match on the
/// destination group so flows inside the namespace are counted once.
fn raw_match_all(filters: &[Filter]) -> String {
    let mut src_group = Vec::new();
    let mut dst_group = Vec::new();
    let mut has_endpoint = false;

    for filter in filters {
        let values = enabled_values(filter);
        if values.is_empty() {
            continue;
        }
        match filter.def.encode_sides(&values, false, filter.not, filter.more_than) {
            Some((src, dst)) => {
                has_endpoint = true;
                src_group.push(src);
                dst_group.push(dst);
                if filter.def.kind == FieldKind::Namespace && !filter.not {
                    if let Some((negated, _)) = filter.def.encode_sides(&values, false, true, false) {
                        dst_group.push(negated);
                    }
                }
            }
            None => {
                let clause = filter.def.encode(&values, false, filter.not, filter.more_than);
                src_group.push(clause.clone());
                dst_group.push(clause);
            }
        }
    }

    if has_endpoint {
        format!("{}|{}", src_group.join("&"), dst_group.join("&"))
    } else {
        src_group.join("&")
    }
}

/// OR-combination: one branch per filter, two for endpoint filters
fn raw_match_any(filters: &[Filter]) -> String {
    let mut branches = Vec::new();
    for filter in filters {
        let values = enabled_values(filter);
        if values.is_empty() {
            continue;
        }
        match filter.def.encode_sides(&values, true, filter.not, filter.more_than) {
            Some((src, dst)) => {
                branches.push(src);
                branches.push(dst);
            }
            None => branches.push(filter.def.encode(&values, true, filter.not, filter.more_than)),
        }
    }
    branches.join("|")
}

fn raw_query(filters: &[Filter], mode: MatchMode) -> String {
    match mode {
        MatchMode::All => raw_match_all(filters),
        MatchMode::Any => raw_match_any(filters),
    }
}

pub fn group_filters_match_all(filters: &[Filter]) -> String {
    encode_uri_component(&raw_match_all(filters))
}

pub fn group_filters_match_any(filters: &[Filter]) -> String {
    encode_uri_component(&raw_match_any(filters))
}

/// Backend query for the enabled part of a filter set
///
/// With back-and-forth on and at least one directional filter, the query of
/// the swapped list is OR'ed in to also match the return traffic.
pub fn filters_to_query(
    defs: &[Arc<FilterDefinition>],
    filters: &Filters,
    mode: MatchMode,
) -> String {
    let enabled = get_enabled_filters(filters);
    let mut raw = raw_query(&enabled.list, mode);
    let directional = enabled.list.iter().any(|f| endpoint_id(&f.def.id) != f.def.id);
    if enabled.back_and_forth && directional {
        let swapped = swap_filter_list(defs, &enabled.list);
        raw = format!("{raw}|{}", raw_query(&swapped, mode));
    }
    log::debug!("query ({mode}): {raw}");
    encode_uri_component(&raw)
}
