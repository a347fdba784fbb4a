//! Free-text filter input
//!
//! # Syntax
//!
//! ```text
//! <field><comparator><value>
//! src_namespace=netobserv     exact match (quoted on name fields)
//! src_namespace~netobs        contains
//! dst_port!=53                negation
//! dns_latency>=10             lower bound, numeric fields only
//! ```
//!
//! A field id alone selects the field; any other lone text is a value for
//! the current field. Suggestions depend on how far the input went: field
//! ids first, then comparators, then the field options.

pub mod bar;
pub mod parser;
pub mod suggest;

pub use bar::{Indicator, OptionsTicket, SearchBar, submit_search};
pub use parser::{Comparator, SearchState, parse_search};
pub use suggest::{Suggestion, Transition, apply_suggestion, suggestions};
