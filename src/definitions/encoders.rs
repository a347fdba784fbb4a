use super::Encoder;
use crate::model::FilterValue;
use crate::resource::{is_owner_kind, split_resource, unquote};

/// `!=` for negated filters, `>=` for lower bounds, `=` otherwise
pub fn comparator_symbol(not: bool, more_than: bool) -> &'static str {
    if not {
        "!="
    } else if more_than {
        ">="
    } else {
        "="
    }
}

fn joiner(match_any: bool) -> &'static str {
    if match_any { "|" } else { "&" }
}

pub(super) fn encode(
    encoder: &Encoder,
    values: &[FilterValue],
    match_any: bool,
    not: bool,
    more_than: bool,
) -> String {
    let symbol = comparator_symbol(not, more_than);
    match encoder {
        Encoder::Simple { field } => simple(field, symbol, values.iter().map(|v| v.v.as_str())),
        Encoder::Kind { field, owner_field } => {
            let (owners, bases): (Vec<&FilterValue>, Vec<&FilterValue>) =
                values.iter().partition(|v| is_owner_kind(&v.v));
            let mut clauses = Vec::new();
            if !bases.is_empty() {
                clauses.push(simple(field, symbol, bases.iter().map(|v| v.v.as_str())));
            }
            if !owners.is_empty() {
                clauses.push(simple(owner_field, symbol, owners.iter().map(|v| v.v.as_str())));
            }
            clauses.join(joiner(match_any))
        }
        Encoder::Resource { prefix } => values
            .iter()
            .map(|v| resource_clauses(prefix, symbol, &v.v))
            .collect::<Vec<_>>()
            .join(joiner(match_any)),
        Encoder::Endpoint { src, dst } => format!(
            "{}|{}",
            encode(src, values, match_any, not, more_than),
            encode(dst, values, match_any, not, more_than)
        ),
    }
}

fn simple<'a>(field: &str, symbol: &str, values: impl Iterator<Item = &'a str>) -> String {
    format!("{field}{symbol}{}", values.collect::<Vec<_>>().join(","))
}

/// Type, namespace and name of one resource, always exact matches
fn resource_clauses(prefix: &str, symbol: &str, value: &str) -> String {
    let split = split_resource(value);
    let kind = unquote(&split.kind);
    let (type_field, name_field) = if is_owner_kind(kind) {
        ("OwnerType", "OwnerName")
    } else {
        ("Type", "Name")
    };
    format!(
        "{prefix}K8S_{type_field}{symbol}\"{kind}\"&{prefix}K8S_Namespace{symbol}\"{}\"&{prefix}K8S_{name_field}{symbol}\"{}\"",
        split.namespace, split.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(vs: &[&str]) -> Vec<FilterValue> {
        vs.iter().map(|v| FilterValue::new(*v)).collect()
    }

    #[test]
    fn test_simple_encoder() {
        let enc = Encoder::Simple {
            field: "SrcPort".to_string(),
        };
        assert_eq!(encode(&enc, &values(&["80", "443"]), false, false, false), "SrcPort=80,443");
        assert_eq!(encode(&enc, &values(&["80"]), false, true, false), "SrcPort!=80");
        assert_eq!(encode(&enc, &values(&["80"]), false, false, true), "SrcPort>=80");
    }

    #[test]
    fn test_kind_encoder_splits_owner_kinds() {
        let enc = Encoder::Kind {
            field: "SrcK8S_Type".to_string(),
            owner_field: "SrcK8S_OwnerType".to_string(),
        };
        let vs = values(&["Pod", "Deployment", "\"Service\""]);
        assert_eq!(
            encode(&enc, &vs, false, false, false),
            "SrcK8S_Type=Pod,\"Service\"&SrcK8S_OwnerType=Deployment"
        );
        assert_eq!(
            encode(&enc, &vs, true, false, false),
            "SrcK8S_Type=Pod,\"Service\"|SrcK8S_OwnerType=Deployment"
        );
        assert_eq!(
            encode(&enc, &values(&["StatefulSet"]), false, false, false),
            "SrcK8S_OwnerType=StatefulSet"
        );
    }

    #[test]
    fn test_resource_encoder() {
        let enc = Encoder::Resource {
            prefix: "Dst".to_string(),
        };
        assert_eq!(
            encode(&enc, &values(&["Deployment.ns.app"]), false, false, false),
            "DstK8S_OwnerType=\"Deployment\"&DstK8S_Namespace=\"ns\"&DstK8S_OwnerName=\"app\""
        );
        assert_eq!(
            encode(&enc, &values(&["Pod.a.b", "Node.n1"]), true, false, false),
            "DstK8S_Type=\"Pod\"&DstK8S_Namespace=\"a\"&DstK8S_Name=\"b\"|DstK8S_Type=\"Node\"&DstK8S_Namespace=\"\"&DstK8S_Name=\"n1\""
        );
    }
}
