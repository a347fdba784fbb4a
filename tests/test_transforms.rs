use flow_filter::autocomplete::OptionsCache;
use flow_filter::config::default_definitions;
use flow_filter::definitions::{FilterDefinition, find_filter_definition, validate_k8s_name};
use flow_filter::model::{Filter, FilterKey, FilterValue, Filters, filters_equal};
use flow_filter::registry::decompose_tcp_flags_bitfield;
use flow_filter::resource::{ResourceStage, split_resource};
use flow_filter::transform::{
    FilterTarget, bnf_filters, clear_filters, swap_filter_value, swap_filters,
};
use std::sync::Arc;

fn filter(defs: &[Arc<FilterDefinition>], id: &str, values: &[&str]) -> Filter {
    let def = find_filter_definition(defs, id).expect("known filter id");
    Filter::new(
        Arc::clone(def),
        values.iter().map(|v| FilterValue::new(*v)).collect(),
    )
}

#[test]
fn test_resource_validation_normalizes_kind() {
    let defs = default_definitions();
    let resource = find_filter_definition(&defs, "src_resource").unwrap();
    assert_eq!(resource.validate("Pod.ns.name"), Ok("Pod.ns.name".to_string()));
    assert_eq!(resource.validate("poD.ns.name"), Ok("Pod.ns.name".to_string()));
    assert!(resource.validate("Pod.ns").is_err());

    let encoded = resource.encode(&[FilterValue::new("Pod.ns.name")], false, false, false);
    assert!(encoded.contains("SrcK8S_Name=\"name\""));
}

#[test]
fn test_validated_values_encode_with_backend_field() {
    let defs = default_definitions();
    for (id, raw, field, canonical) in [
        ("src_port", "https", "SrcPort", "443"),
        ("protocol", "udp", "Proto", "UDP"),
        ("dst_mac", "aa-bb-cc-dd-ee-ff", "DstMac", "AA:BB:CC:DD:EE:FF"),
        ("src_address", "10.0.0.0/8", "SrcAddr", "10.0.0.0/8"),
        ("direction", "0", "FlowDirection", "Ingress"),
    ] {
        let def = find_filter_definition(&defs, id).unwrap();
        let value = def.validate(raw).unwrap();
        assert_eq!(value, canonical);
        let encoded = def.encode(&[FilterValue::new(value.clone())], false, false, false);
        assert_eq!(encoded, format!("{field}={value}"));
    }
}

#[test]
fn test_empty_value_handling_per_field() {
    let defs = default_definitions();
    let ns = find_filter_definition(&defs, "src_namespace").unwrap();
    assert_eq!(ns.validate(""), Ok("\"\"".to_string()));
    let port = find_filter_definition(&defs, "src_port").unwrap();
    assert!(port.validate("").is_err());
    assert_eq!(port.validate("\"\""), Ok("\"\"".to_string()));
}

#[test]
fn test_k8s_name_validation() {
    assert!(validate_k8s_name("-123-abc-"));
    assert!(!validate_k8s_name("\"\""));
    assert!(!validate_k8s_name("\"ab&c\""));
    assert!(validate_k8s_name("\"exact\""));
}

#[test]
fn test_split_resource_cases() {
    let split = split_resource("Pod.default.test");
    assert_eq!(
        (split.kind.as_str(), split.namespace.as_str(), split.name.as_str()),
        ("Pod", "default", "test")
    );
    assert_eq!(split.stage, ResourceStage::Completed);

    let split = split_resource("Node.my-node.ec2.internal");
    assert_eq!(split.namespace, "");
    assert_eq!(split.name, "my-node.ec2.internal");
    assert_eq!(split.stage, ResourceStage::Completed);
}

#[test]
fn test_tcp_flags_decomposition() {
    let names: Vec<&str> = decompose_tcp_flags_bitfield(666)
        .iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["SYN", "PSH", "ACK", "CWR", "FIN_ACK"]);
}

#[test]
fn test_filters_equal_properties() {
    let defs = default_definitions();
    let a = vec![filter(&defs, "src_name", &["abc"])];
    let b = vec![filter(&defs, "src_name", &["abc", "def"])];
    assert!(filters_equal(&a, &a));
    assert!(!filters_equal(&a, &b));
    assert!(!filters_equal(&b, &a));

    let mut c = vec![filter(&defs, "src_name", &["def", "abc"])];
    c[0].values[0].display = Some("DEF".to_string());
    assert!(filters_equal(&b, &c));
}

#[test]
fn test_swap_then_swap_back_is_identity() {
    let defs = default_definitions();
    let mut cache = OptionsCache::new();
    let filters = Filters::new(vec![
        filter(&defs, "src_namespace", &["a"]),
        filter(&defs, "dst_port", &["80"]).negated(),
        filter(&defs, "name", &["x"]),
    ]);
    let swapped = swap_filters(&defs, &filters, &mut cache);
    assert_eq!(swapped.list[0].def.id, "dst_namespace");
    assert!(swapped.list[1].not);
    assert_eq!(swapped.list[2].def.id, "name");
    assert_eq!(swap_filters(&defs, &swapped, &mut cache), filters);
}

#[test]
fn test_swap_endpoint_value_to_target() {
    let defs = default_definitions();
    let list = vec![filter(&defs, "port", &["80", "443"])];
    let key = FilterKey::new("port", false, false);
    let list = swap_filter_value(&defs, &list, &key, "443", Some(FilterTarget::Destination));
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].values, vec![FilterValue::new("80")]);
    assert_eq!(list[1].def.id, "dst_port");
    assert_eq!(list[1].values, vec![FilterValue::new("443")]);
}

#[test]
fn test_swap_value_appends_even_when_target_has_it() {
    let defs = default_definitions();
    let list = vec![
        filter(&defs, "src_port", &["80"]),
        filter(&defs, "dst_port", &["80"]),
    ];
    let key = FilterKey::new("src_port", false, false);
    let list = swap_filter_value(&defs, &list, &key, "80", None);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].def.id, "dst_port");
    assert_eq!(list[0].values, vec![FilterValue::new("80"), FilterValue::new("80")]);
}

#[test]
fn test_bnf_collapses_directional_filters() {
    let defs = default_definitions();
    let mut cache = OptionsCache::new();
    cache.set("namespaces", vec!["a".to_string()]);
    let mut filters = Filters::new(vec![
        filter(&defs, "src_namespace", &["a"]),
        filter(&defs, "dst_namespace", &["a", "b"]),
        filter(&defs, "src_host_name", &["node-1"]),
        filter(&defs, "protocol", &["6"]),
    ]);
    filters.back_and_forth = true;

    let merged = bnf_filters(&defs, &filters, &mut cache);
    assert!(cache.is_empty());
    assert!(merged.back_and_forth);
    let ids: Vec<&str> = merged.list.iter().map(|f| f.def.id.as_str()).collect();
    assert_eq!(ids, vec!["src_host_name", "protocol", "namespace"]);
    assert_eq!(
        merged.list[2].values,
        vec![FilterValue::new("a"), FilterValue::new("b")]
    );
}

#[test]
fn test_clear_keeps_back_and_forth() {
    let defs = default_definitions();
    let mut cache = OptionsCache::new();
    let mut filters = Filters::new(vec![filter(&defs, "protocol", &["6"])]);
    filters.back_and_forth = true;
    let cleared = clear_filters(&filters, &mut cache);
    assert!(cleared.is_empty());
    assert!(cleared.back_and_forth);
}
