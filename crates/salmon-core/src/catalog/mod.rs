//! Lookup catalogs.
//!
//! Each catalog is an ordered, deduplicated list of labels read from a flat
//! file. A label's position is its stable integer [`Code`]; a label that is
//! not in the catalog resolves to `None`, never to code 0.

mod kind;

pub use kind::CatalogKind;

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, info, warn};

use crate::config::{DataPaths, MatchMode};
use crate::error::{Error, Result};

/// Position of a label inside its catalog (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(pub u16);

impl Code {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Most labels one catalog holds; every position must fit a [`Code`].
pub const MAX_LABELS: usize = u16::MAX as usize + 1;

/// One lookup table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    labels: Vec<String>,
    mode: MatchMode,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a file with one label per line.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the load.
    pub fn load<P: AsRef<Path>>(path: P, mode: MatchMode) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::file_open(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            warn!("{:?} is not valid UTF-8, replaced invalid bytes", path);
        }
        Ok(Self::parse(&content).with_mode(mode))
    }

    /// Parse catalog content: blank lines are skipped and repeated labels
    /// keep their first position.
    pub fn parse(content: &str) -> Self {
        Self::from_labels(content.lines())
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut catalog = Self::new();
        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() || !seen.insert(label.to_string()) {
                continue;
            }
            if catalog.labels.len() == MAX_LABELS {
                warn!("Catalog exceeds {} labels, ignoring the rest", MAX_LABELS);
                break;
            }
            catalog.labels.push(label.to_string());
        }
        catalog
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Resolve a label to its code, first match in catalog order.
    ///
    /// Empty input never matches.
    pub fn index_of(&self, label: &str) -> Option<Code> {
        let position = match self.mode {
            MatchMode::Exact => {
                let needle = label.trim();
                if needle.is_empty() {
                    return None;
                }
                self.labels.iter().position(|l| l == needle)
            }
            MatchMode::Prefix => {
                let needle = without_last_char(label.trim_start());
                if needle.is_empty() {
                    return None;
                }
                self.labels.iter().position(|l| l.starts_with(needle))
            }
        };
        position.and_then(|i| u16::try_from(i).ok()).map(Code)
    }

    /// Label for a code; `None` and unknown codes give an empty string.
    pub fn label_of(&self, code: Option<Code>) -> &str {
        code.and_then(|c| self.labels.get(c.index()))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Code, &str)> {
        self.labels
            .iter()
            .enumerate()
            // len <= MAX_LABELS, so every index fits
            .map(|(i, label)| (Code(i as u16), label.as_str()))
    }
}

fn without_last_char(s: &str) -> &str {
    s.char_indices()
        .next_back()
        .map(|(i, _)| &s[..i])
        .unwrap_or("")
}

/// All lookup tables needed to decode a shift row
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    tables: [Catalog; CatalogKind::COUNT],
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every table from `paths.catalog_dir`. Fails on the first
    /// table that cannot be read.
    pub fn load(paths: &DataPaths, mode: MatchMode) -> Result<Self> {
        let mut catalogs = Self::new();
        for kind in CatalogKind::iter() {
            let catalog = Catalog::load(paths.catalog_path(kind), mode)?;
            info!("Loaded {} {}", catalog.len(), kind);
            catalogs.set(kind, catalog);
        }
        Ok(catalogs)
    }

    pub fn set(&mut self, kind: CatalogKind, catalog: Catalog) {
        self.tables[kind.index()] = catalog;
    }

    pub fn with(mut self, kind: CatalogKind, catalog: Catalog) -> Self {
        self.set(kind, catalog);
        self
    }

    pub fn get(&self, kind: CatalogKind) -> &Catalog {
        &self.tables[kind.index()]
    }

    pub fn index_of(&self, kind: CatalogKind, label: &str) -> Option<Code> {
        let code = self.get(kind).index_of(label);
        if code.is_none() && !label.trim().is_empty() {
            debug!("No {} entry for {:?}", kind, label);
        }
        code
    }

    pub fn label_of(&self, kind: CatalogKind, code: Option<Code>) -> &str {
        self.get(kind).label_of(code)
    }

    /// Resolve a user supplied label, treating a miss as an error.
    pub fn resolve(&self, kind: CatalogKind, label: &str) -> Result<Code> {
        self.get(kind)
            .index_of(label)
            .ok_or_else(|| Error::UnknownLabel {
                kind,
                label: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages() -> Catalog {
        Catalog::parse("Spawning Grounds\nMarooner's Bay\nLost Outpost\nSalmonid Smokeyard\n")
    }

    #[test]
    fn test_parse_skips_blank_and_duplicate_lines() {
        let catalog = Catalog::parse("Rush\r\n\nFog\nRush\n  \nGoldie Seeking\n");
        let labels: Vec<&str> = catalog.iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["Rush", "Fog", "Goldie Seeking"]);
    }

    #[test]
    fn test_round_trip() {
        let catalog = stages();
        for (code, label) in catalog.iter() {
            assert_eq!(catalog.index_of(label), Some(code));
            assert_eq!(catalog.label_of(Some(code)), label);
        }
    }

    #[test]
    fn test_index_of_tolerates_line_terminator() {
        let catalog = stages();
        assert_eq!(catalog.index_of("Lost Outpost\n"), Some(Code(2)));
        assert_eq!(catalog.index_of("Lost Outpost\r\n"), Some(Code(2)));
    }

    #[test]
    fn test_empty_label_is_not_found() {
        let catalog = stages();
        assert_eq!(catalog.index_of(""), None);
        assert_eq!(catalog.index_of("\n"), None);
        assert_ne!(catalog.index_of(""), Some(Code(0)));
    }

    #[test]
    fn test_unknown_label() {
        let catalog = stages();
        assert_eq!(catalog.index_of("Ruins of Ark Polaris"), None);
        assert_eq!(catalog.label_of(None), "");
        assert_eq!(catalog.label_of(Some(Code(99))), "");
    }

    #[test]
    fn test_exact_mode_rejects_prefix() {
        let catalog = Catalog::from_labels(["Hydra Splatling", "Hydra"]);
        assert_eq!(catalog.index_of("Hydra"), Some(Code(1)));
        assert_eq!(catalog.index_of("Hydr"), None);
    }

    #[test]
    fn test_prefix_mode_ignores_last_char() {
        let catalog =
            Catalog::from_labels(["Hydra Splatling", "Hydra"]).with_mode(MatchMode::Prefix);
        // Legacy laxity: "Hydra" minus its last char is a prefix of the first label.
        assert_eq!(catalog.index_of("Hydra"), Some(Code(0)));
        assert_eq!(catalog.index_of("Hydra Splatling\n"), Some(Code(0)));
        assert_eq!(catalog.index_of("Splat"), None);
        assert_eq!(catalog.index_of("H"), None);
    }

    #[test]
    fn test_labels_capped_at_code_range() {
        let catalog = Catalog::from_labels((0..MAX_LABELS + 10).map(|i| i.to_string()));
        assert_eq!(catalog.len(), MAX_LABELS);
        assert_eq!(catalog.iter().last().map(|(code, _)| code), Some(Code(u16::MAX)));
        assert_eq!(catalog.index_of("65535"), Some(Code(u16::MAX)));
        assert_eq!(catalog.index_of("65536"), None);
    }

    #[test]
    fn test_load_replaces_invalid_utf8() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("events.txt");
        fs::write(&path, b"Rush\n\xffFog\nGoldie Seeking\n").unwrap();

        let catalog = Catalog::load(&path, MatchMode::Exact).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index_of("Rush"), Some(Code(0)));
        assert_eq!(catalog.index_of("Goldie Seeking"), Some(Code(2)));
        assert_eq!(catalog.label_of(Some(Code(1))), "\u{FFFD}Fog");
    }

    #[test]
    fn test_catalogs_resolve() {
        let catalogs = Catalogs::new().with(CatalogKind::Stages, stages());
        assert_eq!(
            catalogs.resolve(CatalogKind::Stages, "Marooner's Bay").unwrap(),
            Code(1)
        );
        let err = catalogs.resolve(CatalogKind::Weapons, "Splattershot").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownLabel {
                kind: CatalogKind::Weapons,
                ..
            }
        ));
        assert_eq!(catalogs.label_of(CatalogKind::Stages, Some(Code(3))), "Salmonid Smokeyard");
    }
}
