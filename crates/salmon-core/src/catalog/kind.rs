use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Lookup table categories referenced by the shift export
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
    EnumCount,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CatalogKind {
    Stages = 0,
    FailReasons = 1,
    Titles = 2,
    Events = 3,
    WaterLevels = 4,
    Specials = 5,
    Bosses = 6,
    Weapons = 7,
}

impl CatalogKind {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// File holding this table, one label per line
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
