//! Static lookup tables for numeric flow fields
//!
//! Each table is an ordered list of [`RegistryEntry`]. Order matters: it is
//! the order options are listed in and the order bitfields are decomposed in.

mod drops;
mod dscp;
mod icmp;
mod network;
mod tcp_flags;

pub use drops::{DROP_CAUSES, DROP_STATES};
pub use dscp::DSCP;
pub(crate) use icmp::all_code_tables;
pub use icmp::{
    ICMP_PROTOCOL, ICMP_TYPES, ICMPV6_PROTOCOL, ICMPV6_TYPES, icmp_codes, icmp_types_for_protocol,
};
pub use network::{DIRECTIONS, DNS_RCODES, PORTS, PROTOCOLS};
pub use tcp_flags::{TCP_FLAGS, decompose_tcp_flags_bitfield};

use crate::model::FilterOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub value: u32,
    pub name: &'static str,
    pub description: &'static str,
}

pub(crate) const fn e(value: u32, name: &'static str, description: &'static str) -> RegistryEntry {
    RegistryEntry {
        value,
        name,
        description,
    }
}

/// A named table of entries
#[derive(Debug)]
pub struct Registry {
    pub name: &'static str,
    pub entries: &'static [RegistryEntry],
}

impl Registry {
    pub fn find_by_value(&self, value: u32) -> Option<&'static RegistryEntry> {
        self.entries.iter().find(|e| e.value == value)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static RegistryEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a number or a name to an entry
    pub fn lookup(&self, value: &str) -> Option<&'static RegistryEntry> {
        match value.trim().parse::<u32>() {
            Ok(n) => self.find_by_value(n),
            Err(_) => self.find_by_name(value.trim()),
        }
    }

    /// Options whose name, value or description match `partial`, best first
    ///
    /// Ranking: exact name or value, name prefix, name substring, then
    /// description substring. Ties keep table order.
    pub fn search(&self, partial: &str) -> Vec<FilterOption> {
        let needle = partial.trim().to_lowercase();
        let mut ranked: Vec<(u8, &RegistryEntry)> = self
            .entries
            .iter()
            .filter_map(|e| rank(e, &needle).map(|r| (r, e)))
            .collect();
        ranked.sort_by_key(|(r, _)| *r);
        ranked
            .into_iter()
            .map(|(_, e)| FilterOption::new(e.name, e.value.to_string()))
            .collect()
    }

    pub fn options(&self) -> Vec<FilterOption> {
        self.search("")
    }
}

fn rank(e: &RegistryEntry, needle: &str) -> Option<u8> {
    if needle.is_empty() {
        return Some(0);
    }
    let name = e.name.to_lowercase();
    if name == needle || e.value.to_string() == needle {
        Some(0)
    } else if name.starts_with(needle) {
        Some(1)
    } else if name.contains(needle) {
        Some(2)
    } else if e.description.to_lowercase().contains(needle) {
        Some(3)
    } else {
        None
    }
}
