use super::parser::{Comparator, SearchState, parse_search};
use super::suggest::{Suggestion, apply_suggestion, suggestions};
use crate::autocomplete::{AutocompleteSource, OptionsCache};
use crate::definitions::{EMPTY_MARKER, FieldKind, FilterCategory, FilterDefinition};
use crate::error::{FetchError, SearchError};
use crate::model::{Filter, create_filter_value, merge_filter_value};
use std::sync::Arc;

/// Visual state of the search input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    #[default]
    Default,
    Success,
    Warning,
    Error,
}

/// Handle of one option request; only the latest one is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsTicket(u64);

/// Add the value held by `state` to `filters`
///
/// A lone value goes to `current` with its default comparator. When the
/// value was typed rather than picked and exactly one option matches it,
/// that option is taken. Returns the new list; nothing is added on error.
pub fn submit_search(
    state: &SearchState,
    current: Option<&Arc<FilterDefinition>>,
    filters: &[Filter],
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> Result<Vec<Filter>, SearchError> {
    let (def, comparator, value) = resolve_target(state, current)?;
    let value = match single_option(def, value, source, cache) {
        Some(accepted) => accepted,
        None => value.to_string(),
    };
    add_value(def, comparator, &value, filters, source, cache)
}

fn resolve_target<'a>(
    state: &'a SearchState,
    current: Option<&'a Arc<FilterDefinition>>,
) -> Result<(&'a Arc<FilterDefinition>, Comparator, &'a str), SearchError> {
    match state {
        SearchState::Complete {
            def,
            comparator,
            value,
        } => Ok((def, *comparator, value)),
        SearchState::Value { text } => {
            let def = current.ok_or(SearchError::NoField)?;
            Ok((def, Comparator::default_for(def.component), text))
        }
        SearchState::Empty | SearchState::FieldOnly { .. } | SearchState::FieldAndComparator { .. } => {
            Err(SearchError::EmptyValue)
        }
    }
}

fn single_option(
    def: &FilterDefinition,
    value: &str,
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> Option<String> {
    if def.has_completion() {
        return None;
    }
    match def.get_options(value, source, cache) {
        Ok(options) if options.len() == 1 => options.into_iter().next().map(|o| o.value),
        Ok(_) => None,
        Err(err) => {
            log::debug!("options for '{}' unavailable: {err}", def.id);
            None
        }
    }
}

/// Name-class fields tell exact from contains matches by quoting
fn quotes_exact_match(kind: FieldKind) -> bool {
    matches!(kind, FieldKind::Namespace | FieldKind::K8sName | FieldKind::OwnerName)
}

fn add_value(
    def: &Arc<FilterDefinition>,
    comparator: Comparator,
    value: &str,
    filters: &[Filter],
    source: &dyn AutocompleteSource,
    cache: &mut OptionsCache,
) -> Result<Vec<Filter>, SearchError> {
    let mut validated = def.validate(value)?;
    if comparator.is_exact()
        && (def.auto_complete_adds_quotes || quotes_exact_match(def.kind))
        && validated != EMPTY_MARKER
        && !validated.starts_with('"')
    {
        validated = format!("\"{validated}\"");
    }
    let filter_value = create_filter_value(def, &validated, source, cache);
    let (list, added) = merge_filter_value(
        filters,
        def,
        comparator.is_not(),
        comparator.is_more_than(),
        filter_value,
    );
    if added {
        Ok(list)
    } else {
        Err(SearchError::AlreadyExists)
    }
}

/// State of the free-text filter input
///
/// Typing re-parses the whole text. Option lists are fetched against a
/// ticket: each keystroke issues a new generation and results carrying an
/// older ticket are dropped.
#[derive(Debug, Clone)]
pub struct SearchBar {
    defs: Vec<Arc<FilterDefinition>>,
    current: Option<Arc<FilterDefinition>>,
    state: SearchState,
    text: String,
    indicator: Indicator,
    message: Option<String>,
    /// Parse error of the current text; blocks submission
    parse_error: Option<String>,
    suggestions: Vec<Suggestion>,
    generation: u64,
}

impl SearchBar {
    pub fn new(defs: Vec<Arc<FilterDefinition>>) -> Self {
        SearchBar {
            defs,
            current: None,
            state: SearchState::Empty,
            text: String::new(),
            indicator: Indicator::Default,
            message: None,
            parse_error: None,
            suggestions: Vec::new(),
            generation: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Field a bare value is added to
    pub fn current(&self) -> Option<&Arc<FilterDefinition>> {
        self.current.as_ref()
    }

    /// Direction of the current field
    pub fn direction(&self) -> FilterCategory {
        self.current.as_ref().map_or(FilterCategory::Common, |d| d.category)
    }

    pub fn set_current(&mut self, def: Option<Arc<FilterDefinition>>) {
        self.current = def;
    }

    /// Handle a keystroke
    ///
    /// A parse error empties the state and shows the message until the text
    /// parses again. Pending option requests become stale.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.generation += 1;
        match parse_search(&self.defs, text) {
            Ok(state) => {
                if let Some(def) = state.field() {
                    self.current = Some(Arc::clone(def));
                }
                self.state = state;
                self.indicator = Indicator::Default;
                self.message = None;
                self.parse_error = None;
            }
            Err(err) => {
                self.state = SearchState::Empty;
                self.indicator = Indicator::Error;
                self.message = Some(err.to_string());
                self.parse_error = Some(err.to_string());
                self.suggestions.clear();
            }
        }
    }

    /// Issue a new option request; earlier tickets become stale
    pub fn request_options(&mut self) -> OptionsTicket {
        self.generation += 1;
        OptionsTicket(self.generation)
    }

    pub fn fetch_suggestions(
        &self,
        source: &dyn AutocompleteSource,
        cache: &mut OptionsCache,
    ) -> Result<Vec<Suggestion>, FetchError> {
        suggestions(&self.defs, &self.state, self.current.as_ref(), source, cache)
    }

    /// Apply option results if `ticket` is still the latest request
    ///
    /// A fetch error is shown as the message and empties the suggestions.
    /// Returns whether the results were applied.
    pub fn receive_options(
        &mut self,
        ticket: OptionsTicket,
        result: Result<Vec<Suggestion>, FetchError>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::debug!("dropping stale options (ticket {}, latest {})", ticket.0, self.generation);
            return false;
        }
        match result {
            Ok(found) => self.suggestions = found,
            Err(err) => {
                self.suggestions.clear();
                self.indicator = Indicator::Warning;
                self.message = Some(err.to_string());
            }
        }
        true
    }

    /// Request, fetch and apply suggestions in one go
    pub fn refresh(&mut self, source: &dyn AutocompleteSource, cache: &mut OptionsCache) {
        let ticket = self.request_options();
        let result = self.fetch_suggestions(source, cache);
        self.receive_options(ticket, result);
    }

    /// Pick a suggestion, adding the filter once the value is complete
    ///
    /// Returns the new filter list when something was added.
    pub fn select_suggestion(
        &mut self,
        suggestion: &Suggestion,
        filters: &[Filter],
        source: &dyn AutocompleteSource,
        cache: &mut OptionsCache,
    ) -> Option<Vec<Filter>> {
        let transition = apply_suggestion(&self.state, self.current.as_ref(), suggestion);
        if let Some(def) = transition.state.field() {
            self.current = Some(Arc::clone(def));
        }
        self.text = transition.state.to_text();
        self.state = transition.state;
        self.parse_error = None;
        self.generation += 1;
        if !transition.submit {
            return None;
        }
        let result = match resolve_target(&self.state, self.current.as_ref()) {
            Ok((def, comparator, value)) => add_value(def, comparator, value, filters, source, cache),
            Err(err) => Err(err),
        };
        self.finish(result)
    }

    /// Add the typed value
    ///
    /// On success the input is reset and the new filter list returned. On
    /// error the input is kept and the message shown.
    pub fn submit(
        &mut self,
        filters: &[Filter],
        source: &dyn AutocompleteSource,
        cache: &mut OptionsCache,
    ) -> Option<Vec<Filter>> {
        if let Some(error) = &self.parse_error {
            self.indicator = Indicator::Error;
            self.message = Some(error.clone());
            return None;
        }
        let result = submit_search(&self.state, self.current.as_ref(), filters, source, cache);
        self.finish(result)
    }

    fn finish(&mut self, result: Result<Vec<Filter>, SearchError>) -> Option<Vec<Filter>> {
        match result {
            Ok(list) => {
                self.state = SearchState::Empty;
                self.parse_error = None;
                self.text.clear();
                self.suggestions.clear();
                self.indicator = Indicator::Success;
                self.message = None;
                self.generation += 1;
                Some(list)
            }
            Err(err) => {
                self.indicator = Indicator::Error;
                self.message = Some(err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::NoSource;
    use crate::config::default_definitions;
    use crate::definitions::find_filter_definition;
    use crate::model::{FilterOption, FilterValue};

    #[test]
    fn test_submit_adds_and_resets() {
        let mut bar = SearchBar::new(default_definitions());
        let mut cache = OptionsCache::new();
        bar.set_text("src_port=443");
        let list = bar.submit(&[], &NoSource, &mut cache).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].values, vec![FilterValue::with_display("443", "https")]);
        assert_eq!(bar.state(), &SearchState::Empty);
        assert_eq!(bar.text(), "");
        assert_eq!(bar.indicator(), Indicator::Success);
    }

    #[test]
    fn test_submit_validation_error_keeps_state() {
        let mut bar = SearchBar::new(default_definitions());
        let mut cache = OptionsCache::new();
        bar.set_text("src_port=99999");
        assert!(bar.submit(&[], &NoSource, &mut cache).is_none());
        assert_eq!(bar.indicator(), Indicator::Error);
        assert_eq!(bar.message(), Some("Port must be between 0 and 65535"));
        assert_eq!(bar.text(), "src_port=99999");
    }

    #[test]
    fn test_exact_comparator_quotes_value() {
        let defs = default_definitions();
        let mut cache = OptionsCache::new();
        let state = parse_search(&defs, "src_namespace=netobserv").unwrap();
        let list = submit_search(&state, None, &[], &NoSource, &mut cache).unwrap();
        assert_eq!(list[0].values[0].v, "\"netobserv\"");

        let state = parse_search(&defs, "src_namespace~netobserv").unwrap();
        let list = submit_search(&state, None, &[], &NoSource, &mut cache).unwrap();
        assert_eq!(list[0].values[0].v, "netobserv");
    }

    #[test]
    fn test_bare_value_goes_to_current_field() {
        let defs = default_definitions();
        let mut bar = SearchBar::new(defs.clone());
        let mut cache = OptionsCache::new();
        bar.set_text("bogus");
        assert!(bar.submit(&[], &NoSource, &mut cache).is_none());
        assert_eq!(bar.message(), Some("Select a filter first"));

        bar.set_current(find_filter_definition(&defs, "protocol").cloned());
        bar.set_text("udp");
        let list = bar.submit(&[], &NoSource, &mut cache).unwrap();
        assert_eq!(list[0].def.id, "protocol");
        assert_eq!(list[0].values, vec![FilterValue::with_display("17", "UDP")]);
    }

    #[test]
    fn test_stale_options_are_dropped() {
        let mut bar = SearchBar::new(default_definitions());
        let mut cache = OptionsCache::new();
        bar.set_text("protocol=");
        let old = bar.request_options();
        let stale = bar.fetch_suggestions(&NoSource, &mut cache);

        bar.set_text("protocol=ud");
        let latest = bar.request_options();
        let fresh = bar.fetch_suggestions(&NoSource, &mut cache);

        assert!(bar.receive_options(latest, fresh));
        assert!(!bar.receive_options(old, stale));
        assert_eq!(
            bar.suggestions(),
            &[Suggestion::Value(FilterOption::new("UDP", "17"))]
        );
    }

    #[test]
    fn test_fetch_error_resets_options() {
        let mut bar = SearchBar::new(default_definitions());
        bar.set_text("src_namespace=");
        let ticket = bar.request_options();
        let err = FetchError::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
            details: Some("loki is not ready".to_string()),
        };
        assert!(bar.receive_options(ticket, Err(err)));
        assert!(bar.suggestions().is_empty());
        assert_eq!(bar.message(), Some("503\nService Unavailable\nloki is not ready"));
    }

    #[test]
    fn test_select_value_submits() {
        let mut bar = SearchBar::new(default_definitions());
        let mut cache = OptionsCache::new();
        bar.set_text("direction=");
        let option = Suggestion::Value(FilterOption::new("Egress", "1"));
        let list = bar.select_suggestion(&option, &[], &NoSource, &mut cache).unwrap();
        assert_eq!(list[0].values, vec![FilterValue::with_display("1", "Egress")]);
    }
}
