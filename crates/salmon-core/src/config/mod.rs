//! Run configuration and schema constants.
//!
//! This module contains:
//! - `DataPaths` - where the shift export and lookup tables live
//! - `MatchMode` - how catalog labels are compared against decoded fields
//! - Fixed roster/wave/boss sizes of the export schema

mod paths;

pub use paths::*;

use serde::{Deserialize, Serialize};

/// Fixed sizes of the shift export schema.
///
/// These are positional: the decoder reads a fixed number of column groups
/// for each of them, so they never grow at runtime.
pub mod schema {
    /// Waves played in one shift.
    pub const WAVE_COUNT: usize = 3;

    /// Player slots in one shift (absent players decode from empty columns).
    pub const PLAYER_COUNT: usize = 4;

    /// Boss species tracked per shift.
    pub const BOSS_COUNT: usize = 9;

    /// Weapons handed to each player across the waves.
    pub const WEAPONS_PER_PLAYER: usize = 3;

    /// Highest value `clear_wave` can hold.
    pub const MAX_CLEAR_WAVE: u8 = WAVE_COUNT as u8;
}

/// Catalog label comparison rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// Surrounding whitespace is ignored, the rest must be equal.
    #[default]
    Exact,
    /// Stored label must start with the candidate minus its last character.
    ///
    /// Matches the legacy tool, which compared `len - 1` bytes to skip a
    /// trailing newline. A candidate that is a prefix of a longer label
    /// therefore matches the first such label.
    Prefix,
}
