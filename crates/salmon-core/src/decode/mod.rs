//! CSV row decoding.
//!
//! A row of the shift export is split on commas once and read by fixed
//! column position (see [`columns`]). Text labels resolve through the
//! [`Catalogs`]; numeric columns that fail to parse become 0 and are counted
//! in a [`DecodeReport`] instead of failing the row.

pub mod columns;
mod fields;

pub use fields::hazard_tenths;

use std::array;

use serde::Serialize;

use crate::catalog::{CatalogKind, Catalogs};
use crate::config::schema::{MAX_CLEAR_WAVE, WEAPONS_PER_PLAYER};
use crate::shift::{Player, Shift, Title, Wave};
use fields::RowFields;

/// Counters for recoverable problems seen while decoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub rows: usize,
    /// Numeric columns that were not empty but did not parse (or were out of range)
    pub parse_fallbacks: usize,
    /// Non-empty labels without a catalog entry
    pub lookup_misses: usize,
}

impl DecodeReport {
    pub fn merge(&mut self, other: &DecodeReport) {
        self.rows += other.rows;
        self.parse_fallbacks += other.parse_fallbacks;
        self.lookup_misses += other.lookup_misses;
    }

    pub fn is_clean(&self) -> bool {
        self.parse_fallbacks == 0 && self.lookup_misses == 0
    }
}

/// Decodes export rows into [`Shift`]s
#[derive(Debug, Clone, Copy)]
pub struct RowDecoder<'a> {
    catalogs: &'a Catalogs,
}

impl<'a> RowDecoder<'a> {
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self { catalogs }
    }

    pub fn decode(&self, row: &str) -> Shift {
        let mut report = DecodeReport::default();
        self.decode_with_report(row, &mut report)
    }

    /// Decode one data row (not the header), adding to `report`.
    pub fn decode_with_report(&self, row: &str, report: &mut DecodeReport) -> Shift {
        report.rows += 1;
        let mut f = RowFields::new(row, self.catalogs, report);

        Shift {
            statink_id: f.int(columns::STATINK_ID),
            rotation_period: f.int(columns::ROTATION_PERIOD),
            shift_start: f.long(columns::SHIFT_START),
            splatnet_number: f.int(columns::SPLATNET_NUMBER),
            stage: f.label(columns::STAGE, CatalogKind::Stages),
            clear_wave: f.clear_wave(columns::CLEAR_WAVE, MAX_CLEAR_WAVE),
            fail_reason: f.label(columns::FAIL_REASON, CatalogKind::FailReasons),
            hazard_level: f.hazard(columns::HAZARD_LEVEL),
            title_before: Title {
                name: f.label(columns::TITLE_BEFORE, CatalogKind::Titles),
                rank: f.int(columns::TITLE_BEFORE_RANK),
            },
            title_after: Title {
                name: f.label(columns::TITLE_AFTER, CatalogKind::Titles),
                rank: f.int(columns::TITLE_AFTER_RANK),
            },
            waves: array::from_fn(|i| decode_wave(&mut f, i)),
            players: array::from_fn(|i| decode_player(&mut f, i)),
            boss_appearances: array::from_fn(|i| f.int(columns::boss::column(i))),
        }
    }
}

fn decode_wave(f: &mut RowFields<'_, '_>, wave: usize) -> Wave {
    use columns::wave::*;

    Wave {
        event: f.label(column(wave, EVENT), CatalogKind::Events),
        water: f.label(column(wave, WATER), CatalogKind::WaterLevels),
        quota: f.int(column(wave, QUOTA)),
        delivers: f.int(column(wave, DELIVERS)),
        appearances: f.int(column(wave, APPEARANCES)),
        power_eggs: f.int(column(wave, POWER_EGGS)),
    }
}

fn decode_player(f: &mut RowFields<'_, '_>, slot: usize) -> Player {
    use columns::player::*;

    let weapons: [_; WEAPONS_PER_PLAYER] = array::from_fn(|j| {
        f.label(column(slot, WEAPON + j * WEAPON_STRIDE), CatalogKind::Weapons)
    });

    Player {
        id: f.string(column(slot, ID)),
        name: f.string(column(slot, NAME)),
        weapons,
        special: f.label(column(slot, SPECIAL), CatalogKind::Specials),
        special_use: array::from_fn(|j| f.int(column(slot, SPECIAL_USE + j))),
        player_rescues: f.int(column(slot, PLAYER_RESCUES)),
        players_rescued: f.int(column(slot, PLAYERS_RESCUED)),
        golden_eggs: f.int(column(slot, GOLDEN_EGGS)),
        power_eggs: f.int(column(slot, POWER_EGGS)),
    }
}
