//! Splitting and joining of `Kind.Namespace.Name` resource strings
//!
//! Resource filters are typed in three steps (kind, then namespace, then
//! name), so a split also reports how far the input got. Nodes are not
//! namespaced and are written `Node.Name`.

/// How much of a resource string has been typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStage {
    PartialKind,
    PartialNamespace,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResource {
    pub kind: String,
    pub namespace: String,
    pub name: String,
    pub stage: ResourceStage,
}

/// Kinds that are not owners: everything else is matched on owner fields
const BASE_KINDS: [&str; 3] = ["Pod", "Service", "Node"];

/// Known kinds with their canonical spelling
pub const KNOWN_KINDS: [&str; 12] = [
    "Pod",
    "Service",
    "Node",
    "Deployment",
    "StatefulSet",
    "DaemonSet",
    "ReplicaSet",
    "Job",
    "CronJob",
    "DeploymentConfig",
    "ReplicationController",
    "Gateway",
];

pub fn is_node_kind(kind: &str) -> bool {
    kind.eq_ignore_ascii_case("node")
}

pub fn split_resource(s: &str) -> SplitResource {
    let parts: Vec<&str> = s.split('.').collect();
    match parts.as_slice() {
        [kind] => SplitResource {
            kind: kind.to_string(),
            namespace: String::new(),
            name: String::new(),
            stage: ResourceStage::PartialKind,
        },
        // "Node." lands here as well and counts as completed with an empty name
        [kind, name] if is_node_kind(kind) => SplitResource {
            kind: kind.to_string(),
            namespace: String::new(),
            name: name.to_string(),
            stage: ResourceStage::Completed,
        },
        [kind, namespace] => SplitResource {
            kind: kind.to_string(),
            namespace: namespace.to_string(),
            name: String::new(),
            stage: ResourceStage::PartialNamespace,
        },
        [kind, rest @ ..] if is_node_kind(kind) => SplitResource {
            kind: kind.to_string(),
            namespace: String::new(),
            name: rest.join("."),
            stage: ResourceStage::Completed,
        },
        [kind, namespace, rest @ ..] => SplitResource {
            kind: kind.to_string(),
            namespace: namespace.to_string(),
            name: rest.join("."),
            stage: ResourceStage::Completed,
        },
        [] => SplitResource {
            kind: String::new(),
            namespace: String::new(),
            name: String::new(),
            stage: ResourceStage::PartialKind,
        },
    }
}

pub fn join_resource(r: &SplitResource) -> String {
    if is_node_kind(&r.kind) {
        format!("{}.{}", r.kind, r.name)
    } else {
        format!("{}.{}.{}", r.kind, r.namespace, r.name)
    }
}

/// Strip one pair of surrounding double quotes, if any
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Anything but Pod, Service and Node is an owner kind
pub fn is_owner_kind(kind: &str) -> bool {
    let kind = unquote(kind);
    !BASE_KINDS.iter().any(|k| k.eq_ignore_ascii_case(kind))
}

/// Canonical TitleCase spelling of a kind
pub fn canonical_kind(kind: &str) -> String {
    if let Some(known) = KNOWN_KINDS.iter().find(|k| k.eq_ignore_ascii_case(kind)) {
        return known.to_string();
    }
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
