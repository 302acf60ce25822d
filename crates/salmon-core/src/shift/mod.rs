//! Decoded shift records.

mod player;
mod wave;

pub use player::*;
pub use wave::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Code;
use crate::config::schema::{BOSS_COUNT, PLAYER_COUNT, WAVE_COUNT};
use crate::error::{Error, Result};

/// Grizzco title with its numeric rank (e.g. Profreshional 400)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub name: Option<Code>,
    pub rank: i32,
}

/// One recorded Salmon Run match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub statink_id: i32,
    pub rotation_period: i32,
    /// Unix seconds
    pub shift_start: i64,
    pub splatnet_number: i32,
    pub stage: Option<Code>,
    /// Waves cleared, 0..=3
    pub clear_wave: u8,
    pub fail_reason: Option<Code>,
    /// Hazard level in tenths of a percent (155 = 15.5%)
    pub hazard_level: u32,
    pub title_before: Title,
    pub title_after: Title,
    pub waves: [Wave; WAVE_COUNT],
    pub players: [Player; PLAYER_COUNT],
    pub boss_appearances: [i32; BOSS_COUNT],
}

impl Shift {
    /// Player in `slot`, failing for slots outside the roster
    pub fn player(&self, slot: usize) -> Result<&Player> {
        self.players
            .get(slot)
            .ok_or(Error::PlayerSlotOutOfRange { slot })
    }

    pub fn present_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_present())
    }

    pub fn is_clear(&self) -> bool {
        self.clear_wave as usize == WAVE_COUNT
    }

    pub fn hazard_percent(&self) -> f64 {
        f64::from(self.hazard_level) / 10.0
    }

    pub fn shift_start_time(&self) -> Option<DateTime<Utc>> {
        if self.shift_start == 0 {
            return None;
        }
        DateTime::from_timestamp(self.shift_start, 0)
    }

    /// Waves that were actually played (cleared ones plus the failed one)
    pub fn played_waves(&self) -> &[Wave] {
        let played = (self.clear_wave as usize + 1).min(WAVE_COUNT);
        &self.waves[..played]
    }

    // Four i32 counts can exceed i32::MAX, so team totals are i64.
    pub fn team_golden_eggs(&self) -> i64 {
        self.players.iter().map(|p| i64::from(p.golden_eggs)).sum()
    }

    pub fn team_power_eggs(&self) -> i64 {
        self.players.iter().map(|p| i64::from(p.power_eggs)).sum()
    }

    pub fn team_rescues(&self) -> i64 {
        self.players.iter().map(|p| i64::from(p.player_rescues)).sum()
    }

    pub fn team_deaths(&self) -> i64 {
        self.players.iter().map(|p| i64::from(p.players_rescued)).sum()
    }
}
