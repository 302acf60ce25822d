//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod catalog;
pub mod show;
pub mod stats;
pub mod summary;

use anyhow::{Context as _, Result, bail};
use salmon_core::{
    CatalogKind, Catalogs, DataPaths, Filter, MatchMode, Shift, ShiftStore, hazard_tenths,
};
use tracing::warn;

use crate::cli::FilterArgs;

/// Catalogs and shifts loaded for one run
pub struct Context {
    pub catalogs: Catalogs,
    pub store: ShiftStore,
}

impl Context {
    pub fn load(paths: &DataPaths, mode: MatchMode) -> Result<Self> {
        let catalogs = load_catalogs(paths, mode)?;
        let store = ShiftStore::load(&paths.data_file, &catalogs)
            .with_context(|| format!("Failed to load shifts from {}", paths.data_file.display()))?;
        if store.is_empty() {
            warn!("{} holds no shifts", paths.data_file.display());
        }
        Ok(Self { catalogs, store })
    }

    /// Shifts selected by `filters`, in export order
    pub fn select(&self, filters: &FilterArgs) -> Result<Vec<Shift>> {
        let filter = build_filter(filters, &self.catalogs)?;
        Ok(salmon_core::apply(self.store.as_slice(), &filter)?)
    }
}

pub fn load_catalogs(paths: &DataPaths, mode: MatchMode) -> Result<Catalogs> {
    Catalogs::load(paths, mode).with_context(|| {
        format!(
            "Failed to load lookup tables from {}",
            paths.catalog_dir.display()
        )
    })
}

/// Turn command-line filter options into one conjunctive [`Filter`]
pub fn build_filter(args: &FilterArgs, catalogs: &Catalogs) -> Result<Filter> {
    let mut filters = Vec::new();

    if let Some(stage) = &args.stage {
        filters.push(Filter::Stage(catalogs.resolve(CatalogKind::Stages, stage)?));
    }
    if let Some(special) = &args.special {
        let special = catalogs.resolve(CatalogKind::Specials, special)?;
        filters.push(match args.slot {
            Some(slot) => Filter::PlayerSpecial { special, slot },
            None => Filter::AnySpecial(special),
        });
    }
    if let Some(weapon) = &args.weapon {
        let weapon = catalogs.resolve(CatalogKind::Weapons, weapon)?;
        filters.push(match args.slot {
            Some(slot) => Filter::PlayerWeapon { weapon, slot },
            None => Filter::AnyWeapon(weapon),
        });
    }
    if args.slot.is_some() && args.special.is_none() && args.weapon.is_none() {
        bail!("--slot needs --special or --weapon");
    }
    if let Some(event) = &args.event {
        filters.push(Filter::Event(catalogs.resolve(CatalogKind::Events, event)?));
    }
    if let Some(tide) = &args.tide {
        filters.push(Filter::WaterLevel(
            catalogs.resolve(CatalogKind::WaterLevels, tide)?,
        ));
    }
    if let Some(reason) = &args.fail_reason {
        filters.push(Filter::FailReason(
            catalogs.resolve(CatalogKind::FailReasons, reason)?,
        ));
    }
    if args.hazard_min.is_some() || args.hazard_max.is_some() {
        filters.push(Filter::HazardLevel {
            lower: args.hazard_min.map(hazard_tenths).unwrap_or(0),
            upper: args.hazard_max.map(hazard_tenths).unwrap_or(u32::MAX),
        });
    }
    if let Some(wave) = args.clear_wave {
        filters.push(Filter::ClearWave {
            wave,
            comparison: args.clear_wave_cmp,
        });
    }
    if let Some(rotation) = args.rotation {
        filters.push(Filter::Rotation(rotation));
    }
    if let Some(player) = &args.player {
        filters.push(Filter::Player(player.clone()));
    }

    Ok(Filter::All(filters))
}
