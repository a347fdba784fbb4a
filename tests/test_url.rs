use flow_filter::autocomplete::{NoSource, OptionsCache};
use flow_filter::config::default_definitions;
use flow_filter::model::{Filters, filters_equal};
use flow_filter::query::MatchMode;
use flow_filter::url::{Navigator, filters_from_params, filters_from_url, filters_to_url, push_filters_to_url};

#[derive(Default)]
struct History {
    pushes: Vec<Vec<(String, String)>>,
}

impl Navigator for History {
    fn set_query_params(&mut self, params: &[(&str, String)]) {
        self.pushes
            .push(params.iter().map(|(k, v)| (k.to_string(), v.clone())).collect());
    }
}

#[test]
fn test_url_keeps_filter_keys_and_values() {
    let defs = default_definitions();
    let mut cache = OptionsCache::new();
    let encoded = "src_namespace=\"netobserv\";dst_port!=53,443;protocol=6;dns_latency>=10";
    let list = filters_from_url(&defs, encoded, &NoSource, &mut cache).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[2].values[0].label(), "TCP");
    assert_eq!(filters_to_url(&list), encoded);

    let reordered = filters_from_url(
        &defs,
        "protocol=6;dns_latency>=10;dst_port!=443,53;src_namespace=\"netobserv\"",
        &NoSource,
        &mut cache,
    )
    .unwrap();
    assert!(filters_equal(&list, &reordered));
}

#[test]
fn test_repeated_values_are_merged() {
    let defs = default_definitions();
    let mut cache = OptionsCache::new();
    let list = filters_from_url(&defs, "src_port=80;src_port=80,443", &NoSource, &mut cache).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(filters_to_url(&list), "src_port=80,443");
}

#[test]
fn test_push_writes_filters_match_and_bnf() {
    let defs = default_definitions();
    let mut cache = OptionsCache::new();
    let list = filters_from_url(&defs, "src_port=80", &NoSource, &mut cache).unwrap();
    let mut history = History::default();
    push_filters_to_url(&mut history, &Filters::new(list), MatchMode::All);

    let params = &history.pushes[0];
    let names: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["filters", "match", "bnf"]);
    assert_eq!(params[1].1, "all");
    assert_eq!(params[2].1, "false");

    let (filters, mode) = filters_from_params(&defs, params, &NoSource, &mut cache).unwrap();
    assert_eq!(filters_to_url(&filters.list), "src_port=80");
    assert_eq!(mode, MatchMode::All);
    assert!(!filters.back_and_forth);
}

#[test]
fn test_missing_params_give_defaults() {
    let defs = default_definitions();
    let mut cache = OptionsCache::new();
    let (filters, mode) = filters_from_params(&defs, &[], &NoSource, &mut cache).unwrap();
    assert!(filters.is_empty());
    assert_eq!(mode, MatchMode::All);
}
