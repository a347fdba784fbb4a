use super::Filter;

/// Comparable form of a filter: its key and its sorted raw values
fn comparable(filters: &[Filter]) -> Vec<(String, Vec<&str>)> {
    let mut items: Vec<(String, Vec<&str>)> = filters
        .iter()
        .map(|f| {
            let mut values: Vec<&str> = f.values.iter().map(|v| v.v.as_str()).collect();
            values.sort_unstable();
            (f.key().to_string(), values)
        })
        .collect();
    items.sort();
    items
}

/// Order-independent equality of two filter lists
///
/// Display labels and disabled flags are ignored, only keys and value sets
/// count.
pub fn filters_equal(a: &[Filter], b: &[Filter]) -> bool {
    comparable(a) == comparable(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{FilterCategory, FilterComponent, FilterDefinition};
    use crate::model::FilterValue;
    use std::sync::Arc;

    fn filter(id: &str, values: &[&str]) -> Filter {
        let def = Arc::new(FilterDefinition::new(
            id,
            id,
            FilterComponent::Text,
            FilterCategory::Common,
            Some(id),
        ));
        Filter::new(def, values.iter().map(|v| FilterValue::new(*v)).collect())
    }

    #[test]
    fn test_equal_regardless_of_order_and_display() {
        let a = vec![filter("src_name", &["abc", "def"]), filter("dst_port", &["80"])];
        let mut b = vec![filter("dst_port", &["80"]), filter("src_name", &["def", "abc"])];
        b[1].values[0].display = Some("DEF".to_string());
        assert!(filters_equal(&a, &a));
        assert!(filters_equal(&a, &b));
        assert!(filters_equal(&b, &a));
    }

    #[test]
    fn test_not_and_value_sets_matter() {
        let a = vec![filter("src_name", &["abc"])];
        let b = vec![filter("src_name", &["abc", "def"])];
        assert!(!filters_equal(&a, &b));
        assert!(!filters_equal(&b, &a));

        let c = vec![filter("src_name", &["abc"]).negated()];
        assert!(!filters_equal(&a, &c));
    }

    #[test]
    fn test_lower_bound_is_part_of_the_key() {
        let exact = vec![filter("dns_latency", &["10"])];
        let mut bound = vec![filter("dns_latency", &["10"])];
        bound[0].more_than = true;
        assert!(!filters_equal(&exact, &bound));
        assert!(!filters_equal(&bound, &exact));
        assert!(filters_equal(&bound, &bound.clone()));
    }
}
