use thiserror::Error;

/// A value rejected by a filter definition's validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError(message.into())
    }
}

/// Errors surfaced by the search bar while parsing or submitting input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Invalid format. The input should be <filter><comparator><value> such as 'namespace=netobserv'")]
    InvalidFormat,

    #[error("Unknown filter: '{0}'")]
    UnknownField(String),

    #[error("Comparator '>=' is only valid on numeric filters, '{0}' is not numeric")]
    MoreThanOnNonNumeric(String),

    #[error("Comparators '~' and '!~' are not valid on numeric filter '{0}'")]
    MatchOnNumeric(String),

    #[error("Select a filter first")]
    NoField,

    #[error("Type a value first")]
    EmptyValue,

    #[error("Filter already exists")]
    AlreadyExists,

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// Errors returned by an autocomplete source
///
/// Display flattens the structured fields into one newline-separated string,
/// ready to be shown as a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{}", flatten_http(.status, .message, .details))]
    Http {
        status: u16,
        message: String,
        details: Option<String>,
    },

    #[error("{0}")]
    Other(String),
}

fn flatten_http(status: &u16, message: &str, details: &Option<String>) -> String {
    let mut parts = vec![status.to_string(), message.to_string()];
    if let Some(details) = details.as_ref().filter(|d| !d.is_empty()) {
        parts.push(details.clone());
    }
    parts.join("\n")
}

/// Errors decoding filters from a URL parameter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Malformed filter segment: '{0}'")]
    MalformedSegment(String),

    #[error("Unknown filter: '{0}'")]
    UnknownField(String),
}
