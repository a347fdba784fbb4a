//! Filter definitions: one immutable descriptor per filterable field
//!
//! Definitions are built once from the field and column configuration. The
//! behavior of a field (how it validates, autocompletes and encodes) is
//! resolved at build time from its id through [`FIELD_KIND_RULES`], an
//! ordered list of `(id substring, kind)` pairs where the first match wins.

mod encoders;
mod options;
mod validators;

pub use encoders::comparator_symbol;
pub use validators::{validate_k8s_name, validate_strict_k8s_name};

use crate::autocomplete::{AutocompleteSource, OptionsCache};
use crate::config::{ColumnConfig, FieldConfig};
use crate::error::{FetchError, ValidationError};
use crate::model::{FilterOption, FilterValue};
use crate::resource::{ResourceStage, join_resource, split_resource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Literal used to filter on an empty value
pub const EMPTY_MARKER: &str = "\"\"";

/// Input widget, which also decides the allowed comparators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterComponent {
    Autocomplete,
    Text,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Source,
    Destination,
    /// Direction-agnostic endpoint field, expanded to source and destination
    Targeteable,
    #[default]
    #[serde(other)]
    Common,
}

/// Field behavior, resolved once from the definition id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Resource,
    OwnerName,
    Kind,
    Namespace,
    K8sName,
    Address,
    Mac,
    Port,
    Protocol,
    Direction,
    Dscp,
    IcmpType,
    IcmpCode,
    TcpFlags,
    DropState,
    DropCause,
    DnsResponseCode,
    Cluster,
    Zone,
    Udn,
    Numeric,
    Text,
}

/// Ordered dispatch table; `namespace` must come before `name`, `owner_name`
/// before `name`, `cluster` before `name`.
pub const FIELD_KIND_RULES: &[(&str, FieldKind)] = &[
    ("resource", FieldKind::Resource),
    ("owner_name", FieldKind::OwnerName),
    ("kind", FieldKind::Kind),
    ("namespace", FieldKind::Namespace),
    ("address", FieldKind::Address),
    ("mac", FieldKind::Mac),
    ("port", FieldKind::Port),
    ("proto", FieldKind::Protocol),
    ("direction", FieldKind::Direction),
    ("dscp", FieldKind::Dscp),
    ("icmp_type", FieldKind::IcmpType),
    ("icmp_code", FieldKind::IcmpCode),
    ("tcp_flags", FieldKind::TcpFlags),
    ("drop_state", FieldKind::DropState),
    ("drop_cause", FieldKind::DropCause),
    ("dns_flag_response_code", FieldKind::DnsResponseCode),
    ("cluster", FieldKind::Cluster),
    ("zone", FieldKind::Zone),
    ("udn", FieldKind::Udn),
    ("name", FieldKind::K8sName),
];

impl FieldKind {
    pub fn resolve(id: &str, component: FilterComponent) -> FieldKind {
        FIELD_KIND_RULES
            .iter()
            .find(|(pattern, _)| id.contains(pattern))
            .map(|(_, kind)| *kind)
            .unwrap_or(match component {
                FilterComponent::Number => FieldKind::Numeric,
                _ => FieldKind::Text,
            })
    }
}

/// How values of a definition are rendered into the backend query language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoder {
    /// `<field><cmp><v1,v2>`
    Simple { field: String },
    /// Base kinds on `field`, owner kinds on `owner_field`
    Kind { field: String, owner_field: String },
    /// Type, namespace and name clauses on `<prefix>K8S_*` fields
    Resource { prefix: String },
    /// Direction-agnostic: rendered once per side
    Endpoint { src: Box<Encoder>, dst: Box<Encoder> },
}

/// Result of composing a multi-step autocomplete value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub completed: bool,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct FilterDefinition {
    pub id: String,
    pub name: String,
    pub component: FilterComponent,
    pub category: FilterCategory,
    pub kind: FieldKind,
    pub encoder: Encoder,
    pub hint: Option<String>,
    pub examples: Option<String>,
    pub doc_url: Option<String>,
    pub placeholder: Option<String>,
    pub auto_complete_adds_quotes: bool,
}

impl PartialEq for FilterDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FilterDefinition {}

impl FilterDefinition {
    /// Build a definition with the encoder derived from its id and category
    ///
    /// `backend_field` is the field for this id only; endpoint definitions
    /// need per-side fields and should be built by [`get_filter_definitions`].
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component: FilterComponent,
        category: FilterCategory,
        backend_field: Option<&str>,
    ) -> Self {
        let id = id.into();
        let own_id = id.clone();
        Self::build(id, name.into(), component, category, |key| {
            backend_field.filter(|_| key == own_id).map(str::to_string)
        })
    }

    fn build(
        id: String,
        name: String,
        component: FilterComponent,
        category: FilterCategory,
        backend_field: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let kind = FieldKind::resolve(&id, component);
        let encoder = if category == FilterCategory::Targeteable {
            let src_id = format!("src_{id}");
            let dst_id = format!("dst_{id}");
            Encoder::Endpoint {
                src: Box::new(derive_encoder(&src_id, kind, backend_field(&src_id))),
                dst: Box::new(derive_encoder(&dst_id, kind, backend_field(&dst_id))),
            }
        } else {
            derive_encoder(&id, kind, backend_field(&id))
        };
        FilterDefinition {
            id,
            name,
            component,
            category,
            kind,
            encoder,
            hint: None,
            examples: None,
            doc_url: None,
            placeholder: None,
            auto_complete_adds_quotes: false,
        }
    }

    pub fn is_endpoint(&self) -> bool {
        self.category == FilterCategory::Targeteable
    }

    /// Name including the direction, as shown on chips
    pub fn full_name(&self) -> String {
        match self.category {
            FilterCategory::Source => format!("Source {}", self.name),
            FilterCategory::Destination => format!("Destination {}", self.name),
            _ => self.name.clone(),
        }
    }

    pub fn validate(&self, value: &str) -> Result<String, ValidationError> {
        validators::validate(self.kind, value)
    }

    /// Autocomplete options for `partial`, unordered unless the backing table is
    pub fn get_options(
        &self,
        partial: &str,
        source: &dyn AutocompleteSource,
        cache: &mut OptionsCache,
    ) -> Result<Vec<FilterOption>, FetchError> {
        options::get_options(self.kind, partial, source, cache)
    }

    /// Options that do not need an autocomplete source (static tables)
    pub fn static_options(&self, partial: &str) -> Vec<FilterOption> {
        options::static_options(self.kind, partial).unwrap_or_default()
    }

    pub fn has_completion(&self) -> bool {
        self.kind == FieldKind::Resource
    }

    /// Compose the typed text with a selected option, one segment at a time
    pub fn check_completion(&self, typed: &str, selected: &str) -> Option<Completion> {
        if !self.has_completion() {
            return None;
        }
        let mut split = split_resource(typed);
        let completion = match split.stage {
            ResourceStage::PartialKind => Completion {
                completed: false,
                value: format!("{selected}."),
            },
            ResourceStage::PartialNamespace => Completion {
                completed: false,
                value: format!("{}.{selected}.", split.kind),
            },
            ResourceStage::Completed => {
                split.name = selected.to_string();
                Completion {
                    completed: true,
                    value: join_resource(&split),
                }
            }
        };
        Some(completion)
    }

    /// Render values into the backend query language
    ///
    /// Endpoint definitions render both sides joined with `|`; use
    /// [`FilterDefinition::encode_sides`] to combine them with other clauses.
    pub fn encode(&self, values: &[FilterValue], match_any: bool, not: bool, more_than: bool) -> String {
        encoders::encode(&self.encoder, values, match_any, not, more_than)
    }

    /// Source and destination renditions of an endpoint definition
    pub fn encode_sides(
        &self,
        values: &[FilterValue],
        match_any: bool,
        not: bool,
        more_than: bool,
    ) -> Option<(String, String)> {
        match &self.encoder {
            Encoder::Endpoint { src, dst } => Some((
                encoders::encode(src, values, match_any, not, more_than),
                encoders::encode(dst, values, match_any, not, more_than),
            )),
            _ => None,
        }
    }
}

fn direction_prefix(id: &str) -> &'static str {
    if id.starts_with("src_") {
        "Src"
    } else if id.starts_with("dst_") {
        "Dst"
    } else {
        ""
    }
}

fn derive_encoder(id: &str, kind: FieldKind, backend_field: Option<String>) -> Encoder {
    let prefix = direction_prefix(id);
    match kind {
        FieldKind::Resource => Encoder::Resource {
            prefix: prefix.to_string(),
        },
        FieldKind::Kind => Encoder::Kind {
            field: backend_field.unwrap_or_else(|| format!("{prefix}K8S_Type")),
            owner_field: format!("{prefix}K8S_OwnerType"),
        },
        _ => Encoder::Simple {
            field: backend_field.unwrap_or_else(|| {
                log::warn!("no column maps filter '{id}', using the id as backend field");
                id.to_string()
            }),
        },
    }
}

/// Build every definition named in `fields`, mapping backend names from `columns`
pub fn get_filter_definitions(
    fields: &[FieldConfig],
    columns: &[ColumnConfig],
) -> Vec<Arc<FilterDefinition>> {
    fields
        .iter()
        .map(|field| {
            let backend = |id: &str| {
                columns
                    .iter()
                    .find(|c| c.filter.as_deref() == Some(id))
                    .or_else(|| columns.iter().find(|c| c.id == id))
                    .and_then(|c| c.field.clone())
            };
            let mut def = FilterDefinition::build(
                field.id.clone(),
                field.name.clone(),
                field.component,
                field.category,
                backend,
            );
            def.hint = field.hint.clone();
            def.examples = field.examples.clone();
            def.doc_url = field.doc_url.clone();
            def.placeholder = field.placeholder.clone();
            def.auto_complete_adds_quotes = field.auto_complete_adds_quotes;
            Arc::new(def)
        })
        .collect()
}

pub fn find_filter_definition<'a>(
    defs: &'a [Arc<FilterDefinition>],
    id: &str,
) -> Option<&'a Arc<FilterDefinition>> {
    defs.iter().find(|d| d.id == id)
}
