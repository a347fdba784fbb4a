//! Autocomplete sources and the option cache
//!
//! Cluster, namespace and resource lists come from the console backend. The
//! crate only sees them through [`AutocompleteSource`]; fetched lists are
//! kept in an [`OptionsCache`] owned by the caller, which must be cleared
//! whenever the active filters change in a way that can stale them.

use crate::error::FetchError;
use std::collections::HashMap;

pub trait AutocompleteSource {
    fn get_clusters(&self) -> Result<Vec<String>, FetchError>;

    fn get_zones(&self) -> Result<Vec<String>, FetchError>;

    fn get_udns(&self) -> Result<Vec<String>, FetchError>;

    fn get_namespaces(&self) -> Result<Vec<String>, FetchError>;

    /// Names of resources of `kind` in `namespace` (empty for nodes)
    fn get_resources(&self, kind: &str, namespace: &str) -> Result<Vec<String>, FetchError>;
}

/// A source with nothing to offer, for callers without a backend
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSource;

impl AutocompleteSource for NoSource {
    fn get_clusters(&self) -> Result<Vec<String>, FetchError> {
        Ok(Vec::new())
    }

    fn get_zones(&self) -> Result<Vec<String>, FetchError> {
        Ok(Vec::new())
    }

    fn get_udns(&self) -> Result<Vec<String>, FetchError> {
        Ok(Vec::new())
    }

    fn get_namespaces(&self) -> Result<Vec<String>, FetchError> {
        Ok(Vec::new())
    }

    fn get_resources(&self, _kind: &str, _namespace: &str) -> Result<Vec<String>, FetchError> {
        Ok(Vec::new())
    }
}

#[derive(Debug, Default, Clone)]
pub struct OptionsCache {
    entries: HashMap<String, Vec<String>>,
}

impl OptionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn set(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.entries.insert(key.into(), values);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached list for `key`, fetched and stored on a miss
    ///
    /// Failed fetches are not cached.
    pub fn get_or_fetch<F>(&mut self, key: &str, fetch: F) -> Result<Vec<String>, FetchError>
    where
        F: FnOnce() -> Result<Vec<String>, FetchError>,
    {
        if let Some(values) = self.entries.get(key) {
            return Ok(values.clone());
        }
        let values = fetch()?;
        self.entries.insert(key.to_string(), values.clone());
        Ok(values)
    }
}
