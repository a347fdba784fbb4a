use flow_filter::config::default_definitions;
use flow_filter::definitions::{FilterDefinition, find_filter_definition};
use flow_filter::model::{Filter, FilterValue, Filters};
use flow_filter::query::{
    MatchMode, decode_query, filters_to_query, group_filters_match_all, group_filters_match_any,
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
fn test_match_all_single_directional_filter() {
    let defs = default_definitions();
    let list = vec![filter(&defs, "src_name", &["test1", "test2"])];
    assert_eq!(
        decode_query(&group_filters_match_all(&list)),
        "SrcK8S_Name=test1,test2"
    );
}

#[test]
fn test_match_all_endpoint_filters_split_in_two_groups() {
    let defs = default_definitions();
    let list = vec![
        filter(&defs, "name", &["test1", "test2"]),
        filter(&defs, "port", &["443"]),
    ];
    assert_eq!(
        decode_query(&group_filters_match_all(&list)),
        "SrcK8S_Name=test1,test2&SrcPort=443|DstK8S_Name=test1,test2&DstPort=443"
    );
}

#[test]
fn test_match_all_namespace_endpoint_negates_source_on_destination_group() {
    let defs = default_definitions();
    let list = vec![
        filter(&defs, "namespace", &["test1", "test2"]),
        filter(&defs, "port", &["443"]),
    ];
    assert_eq!(
        decode_query(&group_filters_match_all(&list)),
        "SrcK8S_Namespace=test1,test2&SrcPort=443|DstK8S_Namespace=test1,test2&SrcK8S_Namespace!=test1,test2&DstPort=443"
    );
}

#[test]
fn test_match_all_resource() {
    let defs = default_definitions();
    let list = vec![filter(&defs, "src_resource", &["Pod.ns.test"])];
    assert_eq!(
        decode_query(&group_filters_match_all(&list)),
        "SrcK8S_Type=\"Pod\"&SrcK8S_Namespace=\"ns\"&SrcK8S_Name=\"test\""
    );
}

#[test]
fn test_match_any_expands_endpoints_into_branches() {
    let defs = default_definitions();
    let list = vec![
        filter(&defs, "name", &["test1", "test2"]),
        filter(&defs, "port", &["443"]),
    ];
    assert_eq!(
        decode_query(&group_filters_match_any(&list)),
        "SrcK8S_Name=test1,test2|DstK8S_Name=test1,test2|SrcPort=443|DstPort=443"
    );
}

#[test]
fn test_match_all_keeps_fixed_filters_in_both_groups() {
    let defs = default_definitions();
    let list = vec![
        filter(&defs, "protocol", &["6"]),
        filter(&defs, "port", &["443"]),
    ];
    assert_eq!(
        decode_query(&group_filters_match_all(&list)),
        "Proto=6&SrcPort=443|Proto=6&DstPort=443"
    );
}

#[test]
fn test_endpoint_resource_is_ored_across_sides() {
    let defs = default_definitions();
    let list = vec![filter(&defs, "resource", &["Deployment.ns.app"])];
    assert_eq!(
        decode_query(&group_filters_match_all(&list)),
        "SrcK8S_OwnerType=\"Deployment\"&SrcK8S_Namespace=\"ns\"&SrcK8S_OwnerName=\"app\"|DstK8S_OwnerType=\"Deployment\"&DstK8S_Namespace=\"ns\"&DstK8S_OwnerName=\"app\""
    );
}

#[test]
fn test_negated_filters_render_not_equal() {
    let defs = default_definitions();
    let list = vec![
        filter(&defs, "dst_port", &["53"]).negated(),
        filter(&defs, "dns_latency", &["10"]).at_least(),
    ];
    assert_eq!(
        decode_query(&group_filters_match_all(&list)),
        "DstPort!=53&DnsLatencyMs>=10"
    );
}

#[test]
fn test_output_is_percent_encoded() {
    let defs = default_definitions();
    let list = vec![filter(&defs, "src_port", &["80", "443"])];
    assert_eq!(group_filters_match_all(&list), "SrcPort%3D80%2C443");
}

#[test]
fn test_back_and_forth_adds_swapped_query() {
    let defs = default_definitions();
    let mut filters = Filters::new(vec![
        filter(&defs, "src_port", &["80"]),
        filter(&defs, "protocol", &["6"]),
    ]);
    assert_eq!(
        decode_query(&filters_to_query(&defs, &filters, MatchMode::All)),
        "SrcPort=80&Proto=6"
    );

    filters.back_and_forth = true;
    assert_eq!(
        decode_query(&filters_to_query(&defs, &filters, MatchMode::All)),
        "SrcPort=80&Proto=6|DstPort=80&Proto=6"
    );

    let common_only = Filters {
        list: vec![filter(&defs, "protocol", &["6"])],
        back_and_forth: true,
    };
    assert_eq!(
        decode_query(&filters_to_query(&defs, &common_only, MatchMode::Any)),
        "Proto=6"
    );
}

#[test]
fn test_disabled_values_left_out_of_query() {
    let defs = default_definitions();
    let mut f = filter(&defs, "src_port", &["80", "443"]);
    f.values[1].disabled = true;
    let filters = Filters::new(vec![f]);
    assert_eq!(
        decode_query(&filters_to_query(&defs, &filters, MatchMode::All)),
        "SrcPort=80"
    );
}
