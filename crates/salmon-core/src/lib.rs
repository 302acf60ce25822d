//! # salmon-core
//!
//! Core library for the Salmon Run shift analyzer.
//!
//! This crate provides:
//! - Lookup catalogs mapping labels (stages, weapons, ...) to stable codes
//! - Positional decoding of the stat.ink shift CSV export
//! - An in-memory shift store loaded once per run
//! - Filters and pass-rate / stat aggregations over shift collections

pub mod catalog;
pub mod config;
pub mod decode;
pub mod error;
pub mod query;
pub mod shift;
pub mod store;

// Re-export from catalog module
pub use catalog::{Catalog, CatalogKind, Catalogs, Code};

// Re-export from config module
pub use config::{DataPaths, MatchMode};

// Re-export from decode module
pub use decode::{DecodeReport, RowDecoder, hazard_tenths};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from query module
pub use query::{
    Comparison, Filter, Stat, StatSummary, apply, clear_percent, stat_summary, wave_percent,
    wave_percent_with_weapon,
};

// Re-export from shift module
pub use shift::{Player, Shift, Title, Wave};

// Re-export from store module
pub use store::ShiftStore;
