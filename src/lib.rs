//! Tag a CSV of MAC addresses with manufacturer names from the IEEE OUI registry.

pub mod config;
pub mod error;
pub mod process;
pub mod registry;

pub use config::Config;
pub use error::{OuiError, Result};
pub use process::{annotate_csv, AnnotateStats};
pub use registry::{load_oui_table, OuiTable};

use tracing::info;

/// Load the registry once, then annotate the input into the output.
pub fn run(config: &Config) -> Result<AnnotateStats> {
    let table = load_oui_table(&config.registry_path)?;
    info!(
        entries = table.len(),
        registry = %config.registry_path.display(),
        "Loaded OUI registry"
    );
    annotate_csv(&config.input_path, &config.output_path, &table)
}
