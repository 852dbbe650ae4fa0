// src/registry/mod.rs

pub mod types;

pub use types::{OuiTable, UNKNOWN_ORG};

use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, instrument, trace};

use crate::error::{OuiError, Result};

/// `XXXXXX<ws>(base 16)<ws><organization>`
static BASE16_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{6})\s+\(base 16\)\s+(.*)").expect("valid registry line regex")
});

/// Parse one registry line into `(OUI, organization)`.
///
/// The OUI is upper-cased and the organization trimmed. Lines of any other
/// shape yield `None`.
pub fn parse_registry_line(line: &str) -> Option<(String, String)> {
    let caps = BASE16_LINE.captures(line)?;
    let oui = caps.get(1)?.as_str().to_uppercase();
    let org = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
    Some((oui, org))
}

/// Build an [`OuiTable`] from registry text.
///
/// Bytes that are not valid UTF-8 are dropped rather than rejected; only a
/// failing read aborts the load.
pub fn read_oui_table<R: BufRead>(mut reader: R, source: &Path) -> Result<OuiTable> {
    let mut table = OuiTable::new();
    let mut buf = Vec::new();
    let mut lines = 0usize;
    let mut overwritten = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| OuiError::file_access(source, e))?;
        if n == 0 {
            break;
        }
        lines += 1;

        // keep the terminator: the pattern's trailing \s+ may consume it
        let line: String = buf.utf8_chunks().map(|chunk| chunk.valid()).collect();
        match parse_registry_line(&line) {
            Some((oui, org)) => {
                if let Some(prev) = table.insert(oui.clone(), org) {
                    trace!(oui = %oui, previous = %prev, "Duplicate OUI, keeping later entry");
                    overwritten += 1;
                }
            }
            None => trace!(line = lines, "Skipping non-entry line"),
        }
    }

    debug!(lines, entries = table.len(), overwritten, "Finished registry parsing");
    Ok(table)
}

/// Load the registry file at `path`.
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_oui_table<P: AsRef<Path>>(path: P) -> Result<OuiTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| OuiError::file_access(path, e))?;
    read_oui_table(BufReader::new(file), path)
}
