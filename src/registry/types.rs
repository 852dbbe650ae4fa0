// src/registry/types.rs

use std::collections::HashMap;

use crate::process::utils::normalize_mac;

/// Marker written when an address has no registry entry.
pub const UNKNOWN_ORG: &str = "Unknown";

/// OUI prefix (6 uppercase hex chars) → organization name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OuiTable {
    entries: HashMap<String, String>,
}

impl OuiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the organization previously stored under `oui`.
    pub fn insert(&mut self, oui: impl Into<String>, org: impl Into<String>) -> Option<String> {
        self.entries.insert(oui.into(), org.into())
    }

    /// Exact, case-sensitive lookup on a canonical prefix.
    pub fn get(&self, oui: &str) -> Option<&str> {
        self.entries.get(oui).map(String::as_str)
    }

    /// Organization for a raw MAC address, if its prefix is registered.
    pub fn resolve(&self, mac: &str) -> Option<&str> {
        self.get(&normalize_mac(mac))
    }

    /// Organization for a raw MAC address, or [`UNKNOWN_ORG`].
    pub fn lookup(&self, mac: &str) -> &str {
        self.resolve(mac).unwrap_or(UNKNOWN_ORG)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for OuiTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = OuiTable::new();
        for (oui, org) in iter {
            table.insert(oui, org);
        }
        table
    }
}
