use serde::{Deserialize, Serialize};

use crate::catalog::Code;

/// Statistics for one wave of a shift
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wave {
    /// Known occurrence (rush, fog, ...); `None` for a normal wave or unknown label
    pub event: Option<Code>,
    /// Tide
    pub water: Option<Code>,
    pub quota: i32,
    pub delivers: i32,
    pub appearances: i32,
    pub power_eggs: i32,
}

impl Wave {
    pub fn met_quota(&self) -> bool {
        self.quota > 0 && self.delivers >= self.quota
    }
}
