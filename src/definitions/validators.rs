use super::{EMPTY_MARKER, FieldKind};
use crate::error::ValidationError;
use crate::registry::{
    DIRECTIONS, DNS_RCODES, DROP_CAUSES, DROP_STATES, DSCP, ICMP_TYPES, ICMPV6_TYPES, PORTS,
    PROTOCOLS, Registry, TCP_FLAGS, all_code_tables,
};
use crate::resource::{ResourceStage, canonical_kind, join_resource, split_resource};
use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;

static K8S_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"?[a-zA-Z0-9*._-]+"?$"#).expect("valid k8s name regex"));
static STRICT_K8S_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9.]*[a-z0-9])?$").expect("valid strict k8s name regex")
});
static KIND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"?[a-zA-Z][a-zA-Z0-9]*"?$"#).expect("valid kind regex"));
static MAC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$").expect("valid mac regex")
});
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("valid number regex"));

/// Loose name check used for name-like filters
///
/// Surrounding double quotes request an exact match, so a value may carry
/// none or exactly two of them.
pub fn validate_k8s_name(label: &str) -> bool {
    let quotes = label.matches('"').count();
    (quotes == 0 || quotes == 2) && K8S_NAME_RE.is_match(label)
}

/// DNS-1123 style check for the namespace and name parts of a resource
pub fn validate_strict_k8s_name(label: &str) -> bool {
    STRICT_K8S_NAME_RE.is_match(label)
}

fn empty_error() -> ValidationError {
    ValidationError::new("Value is empty")
}

pub(super) fn validate(kind: FieldKind, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    match kind {
        FieldKind::Namespace | FieldKind::K8sName | FieldKind::OwnerName => validate_name(value),
        FieldKind::Cluster | FieldKind::Zone | FieldKind::Udn => validate_name(value),
        FieldKind::Resource => validate_resource(value),
        FieldKind::Kind => validate_kind(value),
        _ if value.is_empty() => Err(empty_error()),
        _ if value == EMPTY_MARKER => Ok(value.to_string()),
        FieldKind::Address => validate_address(value),
        FieldKind::Mac => validate_mac(value),
        FieldKind::Port => validate_port(value),
        FieldKind::Protocol => validate_protocol(value),
        FieldKind::Direction => {
            by_canonical_name(&DIRECTIONS, value, "Unknown direction, use Ingress, Egress or Inner")
        }
        FieldKind::Dscp => numeric_or_name(&DSCP, value, "Unknown DSCP value"),
        FieldKind::IcmpType => validate_icmp(value, &[&ICMP_TYPES, &ICMPV6_TYPES], "Unknown ICMP type"),
        FieldKind::IcmpCode => validate_icmp(value, &all_code_tables(), "Unknown ICMP code"),
        FieldKind::TcpFlags => numeric_or_name(&TCP_FLAGS, value, "Unknown TCP flag"),
        FieldKind::DropState => by_canonical_name(&DROP_STATES, value, "Unknown drop state"),
        FieldKind::DropCause => by_canonical_name(&DROP_CAUSES, value, "Unknown drop cause"),
        FieldKind::DnsResponseCode => {
            by_canonical_name(&DNS_RCODES, value, "Unknown DNS response code")
        }
        FieldKind::Numeric => validate_number(value),
        FieldKind::Text => Ok(value.to_string()),
    }
}

fn validate_name(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Ok(EMPTY_MARKER.to_string());
    }
    if validate_k8s_name(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::new("Not a valid Kubernetes name"))
    }
}

fn validate_resource(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(empty_error());
    }
    let mut split = split_resource(value);
    if split.stage != ResourceStage::Completed {
        return Err(ValidationError::new(
            "Incomplete resource name, either kind, namespace or name is missing",
        ));
    }
    if split.kind.is_empty() {
        return Err(ValidationError::new("Kind is empty"));
    }
    if !split.namespace.is_empty() && !validate_strict_k8s_name(&split.namespace) {
        return Err(ValidationError::new(format!(
            "Namespace: {} not a valid Kubernetes name",
            split.namespace
        )));
    }
    if !validate_strict_k8s_name(&split.name) {
        return Err(ValidationError::new(format!(
            "Name: {} not a valid Kubernetes name",
            split.name
        )));
    }
    split.kind = canonical_kind(&split.kind);
    Ok(join_resource(&split))
}

fn validate_kind(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(empty_error());
    }
    if !KIND_RE.is_match(value) || !matches!(value.matches('"').count(), 0 | 2) {
        return Err(ValidationError::new("Not a valid Kubernetes kind"));
    }
    let unquoted = crate::resource::unquote(value);
    let canonical = canonical_kind(unquoted);
    if unquoted.len() == value.len() {
        Ok(canonical)
    } else {
        Ok(format!("\"{canonical}\""))
    }
}

fn validate_address(value: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::new("Not a valid IPv4 or IPv6, nor a CIDR");
    let (ip, prefix) = match value.split_once('/') {
        Some((ip, prefix)) => (ip, Some(prefix)),
        None => (value, None),
    };
    let ip: IpAddr = ip.parse().map_err(|_| invalid())?;
    if let Some(prefix) = prefix {
        let bits: u8 = prefix.parse().map_err(|_| invalid())?;
        let max = if ip.is_ipv4() { 32 } else { 128 };
        if bits > max {
            return Err(invalid());
        }
    }
    Ok(value.to_string())
}

fn validate_mac(value: &str) -> Result<String, ValidationError> {
    if MAC_RE.is_match(value) {
        Ok(value.to_uppercase().replace('-', ":"))
    } else {
        Err(ValidationError::new("Not a valid MAC address"))
    }
}

fn validate_port(value: &str) -> Result<String, ValidationError> {
    if let Ok(port) = value.parse::<u32>() {
        return if port <= u32::from(u16::MAX) {
            Ok(port.to_string())
        } else {
            Err(ValidationError::new("Port must be between 0 and 65535"))
        };
    }
    PORTS
        .find_by_name(value)
        .map(|p| p.value.to_string())
        .ok_or_else(|| ValidationError::new("Unknown port"))
}

fn validate_protocol(value: &str) -> Result<String, ValidationError> {
    if let Ok(proto) = value.parse::<u32>() {
        return if proto <= 255 {
            Ok(proto.to_string())
        } else {
            Err(ValidationError::new("Protocol number must be between 0 and 255"))
        };
    }
    PROTOCOLS
        .find_by_name(value)
        .map(|p| p.name.to_string())
        .ok_or_else(|| ValidationError::new("Unknown protocol"))
}

fn validate_number(value: &str) -> Result<String, ValidationError> {
    if NUMBER_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::new("Not a number"))
    }
}

/// Any number is accepted as a literal; names must be in the table
fn numeric_or_name(
    registry: &Registry,
    value: &str,
    message: &str,
) -> Result<String, ValidationError> {
    if value.parse::<u32>().is_ok() {
        return Ok(value.to_string());
    }
    registry
        .find_by_name(value)
        .map(|e| e.name.to_string())
        .ok_or_else(|| ValidationError::new(message))
}

fn by_canonical_name(
    registry: &Registry,
    value: &str,
    message: &str,
) -> Result<String, ValidationError> {
    registry
        .lookup(value)
        .map(|e| e.name.to_string())
        .ok_or_else(|| ValidationError::new(message))
}

fn validate_icmp(
    value: &str,
    registries: &[&'static Registry],
    message: &str,
) -> Result<String, ValidationError> {
    if value.parse::<u32>().is_ok() {
        return Ok(value.to_string());
    }
    registries
        .iter()
        .find_map(|r| r.find_by_name(value))
        .map(|e| e.name.to_string())
        .ok_or_else(|| ValidationError::new(message))
}
