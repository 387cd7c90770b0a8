//! Splitting IP list lines into single addresses and networks.

use ipnet::IpNet;
use std::net::IpAddr;

use crate::Diagnostics;

/// Addresses and networks parsed from an IP list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet {
    /// Single hosts, including CIDRs written with a full-width mask
    pub addresses: Vec<IpAddr>,
    /// Subnets with a prefix shorter than the family width
    pub networks: Vec<IpNet>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.addresses.len() + self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse every line, warning about and dropping the ones that are
    /// neither a CIDR block nor an IP literal.
    ///
    /// No merging or deduplication happens here.
    ///
    /// # Examples
    /// ```
    /// use geolist::{address::AddressSet, MemoryDiagnostics};
    ///
    /// let diag = MemoryDiagnostics::new();
    /// let lines: Vec<String> = ["1.2.3.0/24", "8.8.8.8", "10.0.0.1/32"]
    ///     .iter().map(|s| s.to_string()).collect();
    /// let set = AddressSet::partition(&lines, &diag);
    /// assert_eq!(set.networks.len(), 1);
    /// assert_eq!(set.addresses.len(), 2);
    /// ```
    pub fn partition<D: Diagnostics + ?Sized>(lines: &[String], diag: &D) -> Self {
        let mut set = Self::new();

        for line in lines {
            if !set.push(line) {
                diag.warn(&format!("invalid IP address or subnet: {}", line));
            }
        }

        set
    }

    /// Classify a single entry. Returns `false` if it is not an address.
    pub fn push(&mut self, entry: &str) -> bool {
        match classify(entry) {
            Some(Entry::Address(addr)) => self.addresses.push(addr),
            Some(Entry::Network(net)) => self.networks.push(net),
            None => return false,
        }
        true
    }
}

/// One parsed IP list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Address(IpAddr),
    Network(IpNet),
}

/// Parse an entry as CIDR first, then as a bare IP literal.
///
/// A CIDR whose prefix equals the family width (`/32`, `/128`) is a single
/// address. Other networks are reported with host bits cleared.
pub fn classify(entry: &str) -> Option<Entry> {
    if let Ok(net) = entry.parse::<IpNet>() {
        if net.prefix_len() == net.max_prefix_len() {
            return Some(Entry::Address(net.addr()));
        }
        return Some(Entry::Network(net.trunc()));
    }

    entry.parse::<IpAddr>().ok().map(Entry::Address)
}
