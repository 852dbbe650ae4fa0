// src/config.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The three files a run touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IEEE registry text, one `XXXXXX (base 16) Org` entry per line.
    pub registry_path: PathBuf,
    /// CSV whose first column holds MAC addresses.
    pub input_path: PathBuf,
    /// Annotated copy of the input.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from("oui.txt"),
            input_path: PathBuf::from("input.csv"),
            output_path: PathBuf::from("output_with_oui.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.registry_path, PathBuf::from("oui.txt"));
        assert_eq!(cfg.input_path, PathBuf::from("input.csv"));
        assert_eq!(cfg.output_path, PathBuf::from("output_with_oui.csv"));
    }

    #[test]
    fn partial_document_keeps_defaults() -> Result<()> {
        let cfg: Config = serde_json::from_str(r#"{"input_path": "macs.csv"}"#)?;
        assert_eq!(cfg.input_path, PathBuf::from("macs.csv"));
        assert_eq!(cfg.registry_path, PathBuf::from("oui.txt"));
        assert_eq!(cfg.output_path, PathBuf::from("output_with_oui.csv"));
        Ok(())
    }
}
