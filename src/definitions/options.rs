use super::FieldKind;
use crate::autocomplete::{AutocompleteSource, OptionsCache};
use crate::error::FetchError;
use crate::model::FilterOption;
use crate::registry::{
    DIRECTIONS, DNS_RCODES, DROP_CAUSES, DROP_STATES, DSCP, ICMP_TYPES, ICMPV6_TYPES, PORTS,
    PROTOCOLS, Registry, TCP_FLAGS, all_code_tables,
};
use crate::resource::{KNOWN_KINDS, ResourceStage, is_node_kind, split_resource};

/// Options for kinds backed by a static table, `None` for the others
pub(super) fn static_options(kind: FieldKind, partial: &str) -> Option<Vec<FilterOption>> {
    let options = match kind {
        FieldKind::Protocol => PROTOCOLS.search(partial),
        FieldKind::Direction => DIRECTIONS.search(partial),
        FieldKind::Port => PORTS.search(partial),
        FieldKind::Dscp => DSCP.search(partial),
        FieldKind::TcpFlags => TCP_FLAGS.search(partial),
        FieldKind::IcmpType => merged(&[&ICMP_TYPES, &ICMPV6_TYPES], partial),
        FieldKind::IcmpCode => merged(&all_code_tables(), partial),
        // the backend stores these by name
        FieldKind::DropState => by_name(&DROP_STATES, partial),
        FieldKind::DropCause => by_name(&DROP_CAUSES, partial),
        FieldKind::DnsResponseCode => by_name(&DNS_RCODES, partial),
        FieldKind::Kind => matching(KNOWN_KINDS.iter().copied(), partial),
        _ => return None,
    };
    Some(options)
}

pub(super) fn get_options(
    kind: FieldKind,
    partial: &str,
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> Result<Vec<FilterOption>, FetchError> {
    if let Some(options) = static_options(kind, partial) {
        return Ok(options);
    }
    let options = match kind {
        FieldKind::Namespace => {
            let namespaces = cache.get_or_fetch("namespaces", || source.get_namespaces())?;
            matching(namespaces.iter().map(String::as_str), partial)
        }
        FieldKind::Cluster => {
            let clusters = cache.get_or_fetch("clusters", || source.get_clusters())?;
            matching(clusters.iter().map(String::as_str), partial)
        }
        FieldKind::Zone => {
            let zones = cache.get_or_fetch("zones", || source.get_zones())?;
            matching(zones.iter().map(String::as_str), partial)
        }
        FieldKind::Udn => {
            let udns = cache.get_or_fetch("udns", || source.get_udns())?;
            matching(udns.iter().map(String::as_str), partial)
        }
        FieldKind::Resource => resource_options(partial, source, cache)?,
        _ => Vec::new(),
    };
    Ok(options)
}

/// Options for the segment being typed: kinds, then namespaces, then names
fn resource_options(
    partial: &str,
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> Result<Vec<FilterOption>, FetchError> {
    let split = split_resource(partial);
    match split.stage {
        ResourceStage::PartialKind => Ok(matching(KNOWN_KINDS.iter().copied(), &split.kind)),
        ResourceStage::PartialNamespace => {
            let namespaces = cache.get_or_fetch("namespaces", || source.get_namespaces())?;
            Ok(matching(namespaces.iter().map(String::as_str), &split.namespace))
        }
        ResourceStage::Completed => {
            let kind = if is_node_kind(&split.kind) {
                "Node"
            } else {
                split.kind.as_str()
            };
            let key = format!("{kind}.{}", split.namespace);
            let names =
                cache.get_or_fetch(&key, || source.get_resources(kind, &split.namespace))?;
            Ok(matching(names.iter().map(String::as_str), &split.name))
        }
    }
}

fn matching<'a>(values: impl Iterator<Item = &'a str>, partial: &str) -> Vec<FilterOption> {
    let needle = partial.to_lowercase();
    values
        .filter(|v| v.to_lowercase().contains(&needle))
        .map(|v| FilterOption::new(v, v))
        .collect()
}

fn by_name(registry: &Registry, partial: &str) -> Vec<FilterOption> {
    registry
        .search(partial)
        .into_iter()
        .map(|o| FilterOption::new(o.name.clone(), o.name))
        .collect()
}

fn merged(registries: &[&'static Registry], partial: &str) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = Vec::new();
    for option in registries.iter().flat_map(|r| r.search(partial)) {
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}
