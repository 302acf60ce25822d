use serde::{Deserialize, Serialize};

use crate::catalog::Code;
use crate::config::schema::WEAPONS_PER_PLAYER;

/// One player slot of a shift
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// SplatNet player id, empty for a missing slot
    pub id: String,
    pub name: String,
    /// Weapon for each wave
    pub weapons: [Option<Code>; WEAPONS_PER_PLAYER],
    pub special: Option<Code>,
    /// Special uses for each wave
    pub special_use: [i32; WEAPONS_PER_PLAYER],
    pub player_rescues: i32,
    pub players_rescued: i32,
    pub golden_eggs: i32,
    pub power_eggs: i32,
}

impl Player {
    /// A slot is filled when the export carried a player id for it
    pub fn is_present(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn has_weapon(&self, weapon: Code) -> bool {
        self.weapons.contains(&Some(weapon))
    }

    pub fn total_special_use(&self) -> i32 {
        self.special_use.iter().sum()
    }
}
