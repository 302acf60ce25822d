//! Catalog command implementation.

use anyhow::Result;
use salmon_core::{CatalogKind, DataPaths, MatchMode};

use super::load_catalogs;

/// Run the catalog command
pub fn run(paths: &DataPaths, mode: MatchMode, kind: CatalogKind) -> Result<()> {
    let catalogs = load_catalogs(paths, mode)?;
    let catalog = catalogs.get(kind);

    println!("{} ({} entries)", kind, catalog.len());
    for (code, label) in catalog.iter() {
        println!("  [{:>3}] {}", code.index(), label);
    }

    Ok(())
}
