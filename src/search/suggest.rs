use super::parser::{Comparator, SearchState};
use crate::autocomplete::{AutocompleteSource, OptionsCache};
use crate::definitions::FilterDefinition;
use crate::error::FetchError;
use crate::model::FilterOption;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    Field(Arc<FilterDefinition>),
    Comparator(Comparator),
    Value(FilterOption),
}

impl Suggestion {
    pub fn label(&self) -> String {
        match self {
            Suggestion::Field(def) => format!("{} ({})", def.id, def.full_name()),
            Suggestion::Comparator(c) => format!("{} {}", c.symbol(), c.description()),
            Suggestion::Value(option) if option.name == option.value => option.name.clone(),
            Suggestion::Value(option) => format!("{} ({})", option.name, option.value),
        }
    }
}

/// Next state after picking a suggestion, and whether it should be submitted
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SearchState,
    pub submit: bool,
}

impl Transition {
    fn stay(state: SearchState) -> Self {
        Transition {
            state,
            submit: false,
        }
    }
}

fn fields_containing(defs: &[Arc<FilterDefinition>], text: &str) -> Vec<Suggestion> {
    let needle = text.trim().to_lowercase();
    defs.iter()
        .filter(|d| d.id.contains(&needle))
        .map(|d| Suggestion::Field(Arc::clone(d)))
        .collect()
}

fn values(options: Vec<FilterOption>) -> Vec<Suggestion> {
    options.into_iter().map(Suggestion::Value).collect()
}

/// Suggestions for the current input
///
/// Free text gets matching field ids plus the options of the current field,
/// a lone field gets its comparators plus the longer ids that contain it, and
/// a field with a comparator gets its options for the typed value.
pub fn suggestions(
    defs: &[Arc<FilterDefinition>],
    state: &SearchState,
    current: Option<&Arc<FilterDefinition>>,
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> Result<Vec<Suggestion>, FetchError> {
    let found = match state {
        SearchState::Empty => Vec::new(),
        SearchState::Value { text } => {
            let mut found = fields_containing(defs, text);
            if let Some(def) = current {
                found.extend(values(def.get_options(text, source, cache)?));
            }
            found
        }
        SearchState::FieldOnly { def } => Comparator::allowed(def.component)
            .iter()
            .map(|c| Suggestion::Comparator(*c))
            .chain(
                fields_containing(defs, &def.id)
                    .into_iter()
                    .filter(|s| !matches!(s, Suggestion::Field(d) if d.id == def.id)),
            )
            .collect(),
        SearchState::FieldAndComparator { def, .. } => values(def.get_options("", source, cache)?),
        SearchState::Complete { def, value, .. } => values(def.get_options(value, source, cache)?),
    };
    Ok(found)
}

/// Apply a picked suggestion to the state
///
/// A value only completes the input once its field is complete: a resource
/// goes kind, then namespace, then name.
pub fn apply_suggestion(
    state: &SearchState,
    current: Option<&Arc<FilterDefinition>>,
    suggestion: &Suggestion,
) -> Transition {
    match (suggestion, state) {
        (Suggestion::Field(def), _) => Transition::stay(SearchState::FieldOnly {
            def: Arc::clone(def),
        }),
        (Suggestion::Comparator(comparator), _) => match state.field().or(current) {
            Some(def) => Transition::stay(SearchState::FieldAndComparator {
                def: Arc::clone(def),
                comparator: *comparator,
            }),
            None => Transition::stay(state.clone()),
        },
        (Suggestion::Value(option), SearchState::FieldAndComparator { def, comparator }) => {
            complete_with(def, *comparator, "", option)
        }
        (
            Suggestion::Value(option),
            SearchState::Complete {
                def,
                comparator,
                value,
            },
        ) => complete_with(def, *comparator, value, option),
        (Suggestion::Value(option), SearchState::Value { text }) => match current {
            Some(def) => complete_with(def, Comparator::default_for(def.component), text, option),
            None => Transition::stay(state.clone()),
        },
        (Suggestion::Value(option), SearchState::FieldOnly { def }) => {
            complete_with(def, Comparator::default_for(def.component), "", option)
        }
        (Suggestion::Value(_), SearchState::Empty) => Transition::stay(SearchState::Empty),
    }
}

fn complete_with(
    def: &Arc<FilterDefinition>,
    comparator: Comparator,
    typed: &str,
    option: &FilterOption,
) -> Transition {
    let (value, submit) = match def.check_completion(typed, &option.value) {
        Some(step) => (step.value, step.completed),
        None => (option.value.clone(), true),
    };
    Transition {
        state: SearchState::Complete {
            def: Arc::clone(def),
            comparator,
            value,
        },
        submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::NoSource;
    use crate::config::default_definitions;
    use crate::definitions::find_filter_definition;
    use crate::search::parse_search;

    #[test]
    fn test_field_only_offers_comparators_and_longer_ids() {
        let defs = default_definitions();
        let mut cache = OptionsCache::new();
        let state = parse_search(&defs, "port").unwrap();
        let found = suggestions(&defs, &state, None, &NoSource, &mut cache).unwrap();
        assert_eq!(found[0], Suggestion::Comparator(Comparator::Equal));
        assert_eq!(found.len(), 4 + 2);
        let ids: Vec<&str> = found
            .iter()
            .filter_map(|s| match s {
                Suggestion::Field(d) => Some(d.id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["src_port", "dst_port"]);
    }

    #[test]
    fn test_value_state_mixes_fields_and_current_options() {
        let defs = default_definitions();
        let mut cache = OptionsCache::new();
        let proto = find_filter_definition(&defs, "protocol").unwrap();
        let state = parse_search(&defs, "tcp").unwrap();
        let found = suggestions(&defs, &state, Some(proto), &NoSource, &mut cache).unwrap();
        assert!(found.iter().any(|s| matches!(s, Suggestion::Field(d) if d.id == "tcp_flags")));
        assert!(found.contains(&Suggestion::Value(FilterOption::new("TCP", "6"))));
    }

    #[test]
    fn test_resource_value_suggestions_step_through_segments() {
        let defs = default_definitions();
        let state = parse_search(&defs, "src_resource=").unwrap();
        let step = apply_suggestion(&state, None, &Suggestion::Value(FilterOption::new("Pod", "Pod")));
        assert!(!step.submit);
        assert_eq!(step.state.to_text(), "src_resource=Pod.");

        let option = FilterOption::new("default", "default");
        let step = apply_suggestion(&step.state, None, &Suggestion::Value(option));
        assert_eq!(step.state.to_text(), "src_resource=Pod.default.");

        let option = FilterOption::new("my-pod", "my-pod");
        let step = apply_suggestion(&step.state, None, &Suggestion::Value(option));
        assert!(step.submit);
        assert_eq!(step.state.to_text(), "src_resource=Pod.default.my-pod");
    }

    #[test]
    fn test_comparator_suggestion_binds_field() {
        let defs = default_definitions();
        let state = parse_search(&defs, "dns_latency").unwrap();
        let step = apply_suggestion(&state, None, &Suggestion::Comparator(Comparator::MoreThanOrEqual));
        assert_eq!(step.state.to_text(), "dns_latency>=");
        assert!(!step.submit);
    }
}
