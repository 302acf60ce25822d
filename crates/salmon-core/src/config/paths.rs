use std::path::{Path, PathBuf};

use crate::catalog::CatalogKind;

/// Default name of the shift export.
pub const DEFAULT_DATA_FILE: &str = "salmon.csv";

/// Locations of the shift export and its lookup tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_file: PathBuf,
    pub catalog_dir: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            catalog_dir: PathBuf::from("."),
        }
    }
}

impl DataPaths {
    pub fn new(data_file: impl Into<PathBuf>, catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            catalog_dir: catalog_dir.into(),
        }
    }

    /// Everything (export and tables) lives in one directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            data_file: dir.join(DEFAULT_DATA_FILE),
            catalog_dir: dir.to_path_buf(),
        }
    }

    /// Path of the lookup table for `kind`
    pub fn catalog_path(&self, kind: CatalogKind) -> PathBuf {
        self.catalog_dir.join(kind.file_name())
    }
}
