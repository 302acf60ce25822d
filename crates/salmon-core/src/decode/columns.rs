//! 1-based column positions of the shift export.
//!
//! Rows are decoded by position, not by header name. Repeated groups (waves,
//! players, bosses) start at a base column and repeat with a fixed stride.

pub const STATINK_ID: usize = 1;
pub const ROTATION_PERIOD: usize = 2;
pub const SHIFT_START: usize = 3;
pub const SPLATNET_NUMBER: usize = 5;
pub const STAGE: usize = 7;
pub const CLEAR_WAVE: usize = 8;
pub const FAIL_REASON: usize = 10;
pub const HAZARD_LEVEL: usize = 11;
pub const TITLE_BEFORE: usize = 13;
pub const TITLE_BEFORE_RANK: usize = 14;
pub const TITLE_AFTER: usize = 16;
pub const TITLE_AFTER_RANK: usize = 17;

/// Wave columns, offsets relative to [`wave::BASE`] + `wave * wave::STRIDE`
pub mod wave {
    pub const BASE: usize = 19;
    pub const STRIDE: usize = 8;

    pub const EVENT: usize = 0;
    // offset 1 carries the event key, unused
    pub const WATER: usize = 2;
    pub const QUOTA: usize = 3;
    pub const DELIVERS: usize = 4;
    pub const APPEARANCES: usize = 5;
    pub const POWER_EGGS: usize = 6;

    pub const fn column(wave: usize, offset: usize) -> usize {
        BASE + wave * STRIDE + offset
    }
}

/// Player columns, offsets relative to [`player::BASE`] + `slot * player::STRIDE`
pub mod player {
    pub const BASE: usize = 42;
    pub const STRIDE: usize = 17;

    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    /// First weapon label; the others follow every [`WEAPON_STRIDE`] columns
    pub const WEAPON: usize = 3;
    pub const WEAPON_STRIDE: usize = 2;
    pub const SPECIAL: usize = 9;
    /// First special-use count; the other two follow directly
    pub const SPECIAL_USE: usize = 10;
    pub const PLAYER_RESCUES: usize = 13;
    pub const PLAYERS_RESCUED: usize = 14;
    pub const GOLDEN_EGGS: usize = 15;
    pub const POWER_EGGS: usize = 16;

    pub const fn column(slot: usize, offset: usize) -> usize {
        BASE + slot * STRIDE + offset
    }
}

/// Boss appearance columns
pub mod boss {
    pub const BASE: usize = 110;
    pub const STRIDE: usize = 5;

    pub const fn column(boss: usize) -> usize {
        BASE + boss * STRIDE
    }
}
