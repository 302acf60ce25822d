use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::catalog::Code;
use crate::config::schema::{MAX_CLEAR_WAVE, PLAYER_COUNT};
use crate::error::{Error, Result};
use crate::shift::Shift;

/// Fraction of shifts that cleared at least `wave` waves.
///
/// Fails with [`Error::EmptyCollection`] when `source` is empty.
pub fn wave_percent(source: &[Shift], wave: u8) -> Result<f64> {
    if source.is_empty() {
        return Err(Error::EmptyCollection);
    }
    let passed = source.iter().filter(|s| s.clear_wave >= wave).count();
    Ok(passed as f64 / source.len() as f64)
}

/// Fraction of shifts that cleared every wave
pub fn clear_percent(source: &[Shift]) -> Result<f64> {
    wave_percent(source, MAX_CLEAR_WAVE)
}

/// Clear rate of the waves in which `weapon` was held.
///
/// Only shifts where the weapon was handed out count. Such a shift passes
/// when the weapon was held in some wave `j` with `clear_wave > j`. `slot`
/// restricts this to one player; `None` looks at every player.
///
/// Fails with [`Error::PlayerSlotOutOfRange`] for a bad slot and with
/// [`Error::EmptyCollection`] when no shift carries the weapon.
pub fn wave_percent_with_weapon(
    source: &[Shift],
    weapon: Code,
    slot: Option<usize>,
) -> Result<f64> {
    if let Some(slot) = slot {
        if slot >= PLAYER_COUNT {
            return Err(Error::PlayerSlotOutOfRange { slot });
        }
    }

    let mut held = 0usize;
    let mut passed = 0usize;
    for shift in source {
        let waves: Vec<usize> = shift
            .players
            .iter()
            .enumerate()
            .filter(|(i, _)| slot.is_none_or(|s| s == *i))
            .flat_map(|(_, p)| {
                p.weapons
                    .iter()
                    .enumerate()
                    .filter(move |(_, w)| **w == Some(weapon))
                    .map(|(j, _)| j)
            })
            .collect();
        if waves.is_empty() {
            continue;
        }
        held += 1;
        if waves.iter().any(|&j| usize::from(shift.clear_wave) > j) {
            passed += 1;
        }
    }

    if held == 0 {
        return Err(Error::EmptyCollection);
    }
    Ok(passed as f64 / held as f64)
}

/// Per-shift numeric statistic that can be summarized
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Hazard level in percent
    HazardLevel,
    ClearWave,
    /// Team golden eggs
    GoldenEggs,
    /// Team power eggs
    PowerEggs,
    /// Team rescues of other players
    Rescues,
    /// Team times rescued
    Deaths,
    /// Golden eggs delivered over all waves
    Delivers,
    /// Boss salmonids that appeared over the shift
    BossAppearances,
}

impl Stat {
    pub fn value(&self, shift: &Shift) -> f64 {
        match self {
            Self::HazardLevel => shift.hazard_percent(),
            Self::ClearWave => f64::from(shift.clear_wave),
            Self::GoldenEggs => shift.team_golden_eggs() as f64,
            Self::PowerEggs => shift.team_power_eggs() as f64,
            Self::Rescues => shift.team_rescues() as f64,
            Self::Deaths => shift.team_deaths() as f64,
            Self::Delivers => shift
                .waves
                .iter()
                .map(|w| i64::from(w.delivers))
                .sum::<i64>() as f64,
            Self::BossAppearances => shift
                .boss_appearances
                .iter()
                .map(|&n| i64::from(n))
                .sum::<i64>() as f64,
        }
    }
}

/// Mean with (min, median, max) of a statistic
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl std::fmt::Display for StatSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} ({:.2}, {:.2}, {:.2})",
            self.mean, self.min, self.median, self.max
        )
    }
}

/// Summarize `stat` over `source`.
///
/// Fails with [`Error::EmptyCollection`] when `source` is empty.
pub fn stat_summary(source: &[Shift], stat: Stat) -> Result<StatSummary> {
    let mut values: Vec<f64> = source.iter().map(|s| stat.value(s)).collect();
    if values.is_empty() {
        return Err(Error::EmptyCollection);
    }
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };

    Ok(StatSummary {
        count,
        mean,
        min: values[0],
        median,
        max: values[count - 1],
    })
}
