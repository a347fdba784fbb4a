use crate::definitions::{FilterComponent, FilterDefinition, find_filter_definition};
use crate::error::SearchError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

/// Longer symbols first so `!=` is never read as `=`
static COMPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!=|!~|>=|=|~").expect("valid comparator regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `=`, exact match when the value is quoted
    Equal,
    /// `!=`
    NotEqual,
    /// `~`, contains
    Match,
    /// `!~`, does not contain
    NotMatch,
    /// `>=`, numeric fields only
    MoreThanOrEqual,
}

const NUMBER_COMPARATORS: &[Comparator] = &[
    Comparator::Equal,
    Comparator::NotEqual,
    Comparator::MoreThanOrEqual,
];

const TEXT_COMPARATORS: &[Comparator] = &[
    Comparator::Equal,
    Comparator::NotEqual,
    Comparator::Match,
    Comparator::NotMatch,
];

impl Comparator {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Equal => "=",
            Comparator::NotEqual => "!=",
            Comparator::Match => "~",
            Comparator::NotMatch => "!~",
            Comparator::MoreThanOrEqual => ">=",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Comparator::Equal => "equals",
            Comparator::NotEqual => "not equals",
            Comparator::Match => "contains",
            Comparator::NotMatch => "not contains",
            Comparator::MoreThanOrEqual => "more than or equal",
        }
    }

    /// Comparators offered for a given input widget
    pub fn allowed(component: FilterComponent) -> &'static [Comparator] {
        match component {
            FilterComponent::Number => NUMBER_COMPARATORS,
            FilterComponent::Autocomplete | FilterComponent::Text => TEXT_COMPARATORS,
        }
    }

    /// Comparator used when only a field or a bare value is typed
    pub fn default_for(component: FilterComponent) -> Comparator {
        match component {
            FilterComponent::Number => Comparator::Equal,
            FilterComponent::Autocomplete | FilterComponent::Text => Comparator::Match,
        }
    }

    pub fn is_not(self) -> bool {
        matches!(self, Comparator::NotEqual | Comparator::NotMatch)
    }

    pub fn is_more_than(self) -> bool {
        self == Comparator::MoreThanOrEqual
    }

    pub fn is_exact(self) -> bool {
        matches!(self, Comparator::Equal | Comparator::NotEqual)
    }
}

impl FromStr for Comparator {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Comparator::Equal),
            "!=" => Ok(Comparator::NotEqual),
            "~" => Ok(Comparator::Match),
            "!~" => Ok(Comparator::NotMatch),
            ">=" => Ok(Comparator::MoreThanOrEqual),
            _ => Err(SearchError::InvalidFormat),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parsed content of the search input
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Empty,
    /// Free text: a partial field id, or a value for the current field
    Value { text: String },
    /// A known field id, nothing else
    FieldOnly { def: Arc<FilterDefinition> },
    /// Field and comparator, value still empty
    FieldAndComparator {
        def: Arc<FilterDefinition>,
        comparator: Comparator,
    },
    Complete {
        def: Arc<FilterDefinition>,
        comparator: Comparator,
        value: String,
    },
}

impl SearchState {
    /// Field this state is bound to, if any
    pub fn field(&self) -> Option<&Arc<FilterDefinition>> {
        match self {
            SearchState::Empty | SearchState::Value { .. } => None,
            SearchState::FieldOnly { def }
            | SearchState::FieldAndComparator { def, .. }
            | SearchState::Complete { def, .. } => Some(def),
        }
    }

    /// Text the input shows for this state
    pub fn to_text(&self) -> String {
        match self {
            SearchState::Empty => String::new(),
            SearchState::Value { text } => text.clone(),
            SearchState::FieldOnly { def } => def.id.clone(),
            SearchState::FieldAndComparator { def, comparator } => format!("{}{comparator}", def.id),
            SearchState::Complete {
                def,
                comparator,
                value,
            } => format!("{}{comparator}{value}", def.id),
        }
    }
}

fn check_comparator(def: &FilterDefinition, comparator: Comparator) -> Result<(), SearchError> {
    if Comparator::allowed(def.component).contains(&comparator) {
        return Ok(());
    }
    if comparator.is_more_than() {
        Err(SearchError::MoreThanOnNonNumeric(def.id.clone()))
    } else {
        Err(SearchError::MatchOnNumeric(def.id.clone()))
    }
}

/// Parse `<field><comparator><value>` input
///
/// One segment is either an exact field id or free text; two segments must
/// name a known field. Anything else is rejected.
pub fn parse_search(
    defs: &[Arc<FilterDefinition>],
    text: &str,
) -> Result<SearchState, SearchError> {
    let text = text.trim_start();
    if text.is_empty() {
        return Ok(SearchState::Empty);
    }

    let parts: Vec<&str> = COMPARATOR_RE.split(text).collect();
    match parts.as_slice() {
        [single] => Ok(match find_filter_definition(defs, single.trim()) {
            Some(def) => SearchState::FieldOnly {
                def: Arc::clone(def),
            },
            None => SearchState::Value {
                text: single.to_string(),
            },
        }),
        [field, value] => {
            let field = field.trim();
            if field.is_empty() {
                return Err(SearchError::InvalidFormat);
            }
            let def = find_filter_definition(defs, field)
                .ok_or_else(|| SearchError::UnknownField(field.to_string()))?;
            let comparator: Comparator = COMPARATOR_RE
                .find(text)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .parse()?;
            check_comparator(def, comparator)?;
            let def = Arc::clone(def);
            let value = value.trim();
            if value.is_empty() {
                Ok(SearchState::FieldAndComparator { def, comparator })
            } else {
                Ok(SearchState::Complete {
                    def,
                    comparator,
                    value: value.to_string(),
                })
            }
        }
        _ => Err(SearchError::InvalidFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_definitions;

    #[test]
    fn test_comparator_round_trip_symbols() {
        for c in TEXT_COMPARATORS.iter().chain(NUMBER_COMPARATORS) {
            assert_eq!(c.symbol().parse::<Comparator>().unwrap(), *c);
        }
        assert!("<".parse::<Comparator>().is_err());
    }

    #[test]
    fn test_parse_field_and_value() {
        let defs = default_definitions();
        match parse_search(&defs, "src_port!=80").unwrap() {
            SearchState::Complete {
                def,
                comparator,
                value,
            } => {
                assert_eq!(def.id, "src_port");
                assert_eq!(comparator, Comparator::NotEqual);
                assert_eq!(value, "80");
            }
            other => panic!("unexpected state {other:?}"),
        }
        let state = parse_search(&defs, "namespace~").unwrap();
        assert!(matches!(
            state,
            SearchState::FieldAndComparator {
                comparator: Comparator::Match,
                ..
            }
        ));
        assert_eq!(state.to_text(), "namespace~");
    }

    #[test]
    fn test_parse_single_segment() {
        let defs = default_definitions();
        assert_eq!(parse_search(&defs, "").unwrap(), SearchState::Empty);
        assert!(matches!(parse_search(&defs, "port").unwrap(), SearchState::FieldOnly { .. }));
        assert_eq!(
            parse_search(&defs, "netobs").unwrap(),
            SearchState::Value {
                text: "netobs".to_string()
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        let defs = default_definitions();
        assert_eq!(parse_search(&defs, "a=b=c"), Err(SearchError::InvalidFormat));
        assert_eq!(parse_search(&defs, "=b"), Err(SearchError::InvalidFormat));
        assert_eq!(
            parse_search(&defs, "nope=1"),
            Err(SearchError::UnknownField("nope".to_string()))
        );
        assert_eq!(
            parse_search(&defs, "src_port>=80"),
            Err(SearchError::MoreThanOnNonNumeric("src_port".to_string()))
        );
        assert_eq!(
            parse_search(&defs, "dns_latency~10"),
            Err(SearchError::MatchOnNumeric("dns_latency".to_string()))
        );
        assert!(parse_search(&defs, "dns_latency>=10").is_ok());
    }
}
