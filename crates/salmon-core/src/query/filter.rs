use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::catalog::Code;
use crate::config::schema::PLAYER_COUNT;
use crate::decode::hazard_tenths;
use crate::error::{Error, Result};
use crate::shift::Shift;

/// How `clear_wave` is compared against a wave number
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum Comparison {
    #[default]
    #[strum(serialize = "eq")]
    Equal,
    #[strum(serialize = "gt")]
    GreaterThan,
    #[strum(serialize = "lt")]
    LessThan,
}

impl Comparison {
    fn holds(self, value: u8, target: u8) -> bool {
        match self {
            Self::Equal => value == target,
            Self::GreaterThan => value > target,
            Self::LessThan => value < target,
        }
    }
}

/// A predicate over shifts. Variants compose with `Not`, `All` and `Any`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    Stage(Code),
    /// Special of the player in one slot
    PlayerSpecial { special: Code, slot: usize },
    /// Any of the three weapons of the player in one slot
    PlayerWeapon { weapon: Code, slot: usize },
    /// Special of any player
    AnySpecial(Code),
    /// Any weapon of any player
    AnyWeapon(Code),
    /// `lower <= hazard_level < upper`, both in tenths of a percent
    HazardLevel { lower: u32, upper: u32 },
    /// Event in any wave
    Event(Code),
    /// Tide in any wave
    WaterLevel(Code),
    FailReason(Code),
    ClearWave { wave: u8, comparison: Comparison },
    Rotation(i32),
    /// SplatNet player id appears in the roster
    Player(String),
    Not(Box<Filter>),
    All(Vec<Filter>),
    Any(Vec<Filter>),
}

impl Filter {
    /// Hazard range given in percent, converted like decoded hazard levels
    pub fn hazard_percent(lower: f64, upper: f64) -> Self {
        Self::HazardLevel {
            lower: hazard_tenths(lower),
            upper: hazard_tenths(upper),
        }
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Check caller supplied parameters (player slots)
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::PlayerSpecial { slot, .. } | Self::PlayerWeapon { slot, .. } => check_slot(*slot),
            Self::Not(inner) => inner.validate(),
            Self::All(filters) | Self::Any(filters) => {
                filters.iter().try_for_each(Filter::validate)
            }
            _ => Ok(()),
        }
    }

    /// Out-of-range slots never match; use [`Filter::validate`] to reject them.
    pub fn matches(&self, shift: &Shift) -> bool {
        match self {
            Self::Stage(stage) => shift.stage == Some(*stage),
            Self::PlayerSpecial { special, slot } => shift
                .players
                .get(*slot)
                .is_some_and(|p| p.special == Some(*special)),
            Self::PlayerWeapon { weapon, slot } => shift
                .players
                .get(*slot)
                .is_some_and(|p| p.has_weapon(*weapon)),
            Self::AnySpecial(special) => shift.players.iter().any(|p| p.special == Some(*special)),
            Self::AnyWeapon(weapon) => shift.players.iter().any(|p| p.has_weapon(*weapon)),
            Self::HazardLevel { lower, upper } => {
                (*lower..*upper).contains(&shift.hazard_level)
            }
            Self::Event(event) => shift.waves.iter().any(|w| w.event == Some(*event)),
            Self::WaterLevel(water) => shift.waves.iter().any(|w| w.water == Some(*water)),
            Self::FailReason(reason) => shift.fail_reason == Some(*reason),
            Self::ClearWave { wave, comparison } => comparison.holds(shift.clear_wave, *wave),
            Self::Rotation(rotation) => shift.rotation_period == *rotation,
            Self::Player(id) => shift.present_players().any(|p| &p.id == id),
            Self::Not(inner) => !inner.matches(shift),
            Self::All(filters) => filters.iter().all(|f| f.matches(shift)),
            Self::Any(filters) => filters.iter().any(|f| f.matches(shift)),
        }
    }
}

fn check_slot(slot: usize) -> Result<()> {
    if slot < PLAYER_COUNT {
        Ok(())
    } else {
        Err(Error::PlayerSlotOutOfRange { slot })
    }
}

/// Copy out the shifts matching `predicate`, keeping source order
pub fn select<F>(source: &[Shift], predicate: F) -> Vec<Shift>
where
    F: Fn(&Shift) -> bool,
{
    source.iter().filter(|s| predicate(s)).cloned().collect()
}

/// Validate `filter` and copy out the matching shifts
pub fn apply(source: &[Shift], filter: &Filter) -> Result<Vec<Shift>> {
    filter.validate()?;
    Ok(select(source, |s| filter.matches(s)))
}

pub fn by_stage(source: &[Shift], stage: Code) -> Vec<Shift> {
    select(source, |s| Filter::Stage(stage).matches(s))
}

pub fn by_player_special(source: &[Shift], special: Code, slot: usize) -> Result<Vec<Shift>> {
    apply(source, &Filter::PlayerSpecial { special, slot })
}

pub fn by_player_weapon(source: &[Shift], weapon: Code, slot: usize) -> Result<Vec<Shift>> {
    apply(source, &Filter::PlayerWeapon { weapon, slot })
}

/// Lower bound inclusive, upper bound exclusive, both in percent
pub fn by_hazard_level(source: &[Shift], lower_percent: f64, upper_percent: f64) -> Vec<Shift> {
    let filter = Filter::hazard_percent(lower_percent, upper_percent);
    select(source, |s| filter.matches(s))
}

pub fn by_any_special(source: &[Shift], special: Code) -> Vec<Shift> {
    select(source, |s| Filter::AnySpecial(special).matches(s))
}

pub fn by_any_weapon(source: &[Shift], weapon: Code) -> Vec<Shift> {
    select(source, |s| Filter::AnyWeapon(weapon).matches(s))
}

pub fn by_event(source: &[Shift], event: Code) -> Vec<Shift> {
    select(source, |s| Filter::Event(event).matches(s))
}

pub fn by_water_level(source: &[Shift], water: Code) -> Vec<Shift> {
    select(source, |s| Filter::WaterLevel(water).matches(s))
}

pub fn by_fail_reason(source: &[Shift], reason: Code) -> Vec<Shift> {
    select(source, |s| Filter::FailReason(reason).matches(s))
}

pub fn by_clear_wave(source: &[Shift], wave: u8, comparison: Comparison) -> Vec<Shift> {
    select(source, |s| comparison.holds(s.clear_wave, wave))
}

pub fn by_rotation(source: &[Shift], rotation_period: i32) -> Vec<Shift> {
    select(source, |s| s.rotation_period == rotation_period)
}

pub fn with_player(source: &[Shift], player_id: &str) -> Vec<Shift> {
    select(source, |s| s.present_players().any(|p| p.id == player_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(id: i32, stage: u16, hazard: u32, clear_wave: u8) -> Shift {
        Shift {
            statink_id: id,
            stage: Some(Code(stage)),
            hazard_level: hazard,
            clear_wave,
            ..Default::default()
        }
    }

    fn ids(shifts: &[Shift]) -> Vec<i32> {
        shifts.iter().map(|s| s.statink_id).collect()
    }

    #[test]
    fn test_by_stage_preserves_order() {
        let source = vec![
            shift(1, 0, 100, 3),
            shift(2, 1, 100, 3),
            shift(3, 0, 100, 1),
            shift(4, 2, 100, 0),
            shift(5, 0, 100, 2),
        ];
        let result = by_stage(&source, Code(0));
        assert_eq!(ids(&result), vec![1, 3, 5]);
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn test_not_found_stage_never_matches_code() {
        let mut unknown = shift(1, 0, 100, 3);
        unknown.stage = None;
        assert!(by_stage(&[unknown], Code(0)).is_empty());
    }

    #[test]
    fn test_hazard_bounds() {
        let source = vec![shift(1, 0, 155, 3), shift(2, 0, 200, 3), shift(3, 0, 99, 3)];
        assert_eq!(ids(&by_hazard_level(&source, 10.0, 20.0)), vec![1]);
        assert_eq!(ids(&by_hazard_level(&source, 15.5, 20.0)), vec![1]);
        assert_eq!(ids(&by_hazard_level(&source, 15.6, 20.1)), vec![2]);
        assert!(by_hazard_level(&source, 20.0, 20.0).is_empty());
    }

    #[test]
    fn test_player_slot_filters() {
        let mut a = shift(1, 0, 100, 3);
        a.players[2].special = Some(Code(4));
        a.players[2].weapons = [Some(Code(1)), Some(Code(7)), None];
        let b = shift(2, 0, 100, 3);
        let source = vec![a, b];

        assert_eq!(ids(&by_player_special(&source, Code(4), 2).unwrap()), vec![1]);
        assert!(by_player_special(&source, Code(4), 1).unwrap().is_empty());
        assert_eq!(ids(&by_player_weapon(&source, Code(7), 2).unwrap()), vec![1]);
        assert_eq!(ids(&by_any_weapon(&source, Code(1))), vec![1]);
        assert_eq!(ids(&by_any_special(&source, Code(4))), vec![1]);
    }

    #[test]
    fn test_player_slot_out_of_range() {
        let source = vec![shift(1, 0, 100, 3)];
        assert!(matches!(
            by_player_special(&source, Code(0), 4),
            Err(Error::PlayerSlotOutOfRange { slot: 4 })
        ));
        assert!(matches!(
            by_player_weapon(&source, Code(0), 9),
            Err(Error::PlayerSlotOutOfRange { slot: 9 })
        ));
        let nested = Filter::All(vec![
            Filter::Stage(Code(0)),
            Filter::PlayerWeapon {
                weapon: Code(0),
                slot: 5,
            },
        ]);
        assert!(nested.validate().is_err());
        assert!(apply(&source, &nested).is_err());
    }

    #[test]
    fn test_wave_filters() {
        let mut a = shift(1, 0, 100, 3);
        a.waves[1].event = Some(Code(2));
        a.waves[2].water = Some(Code(0));
        let b = shift(2, 0, 100, 1);
        let source = vec![a, b];

        assert_eq!(ids(&by_event(&source, Code(2))), vec![1]);
        assert_eq!(ids(&by_water_level(&source, Code(0))), vec![1]);
        assert!(by_event(&source, Code(0)).is_empty());
    }

    #[test]
    fn test_clear_wave_comparisons() {
        let source: Vec<Shift> = (0..=3).map(|w| shift(i32::from(w), 0, 100, w)).collect();
        assert_eq!(ids(&by_clear_wave(&source, 2, Comparison::Equal)), vec![2]);
        assert_eq!(ids(&by_clear_wave(&source, 1, Comparison::GreaterThan)), vec![2, 3]);
        assert_eq!(ids(&by_clear_wave(&source, 1, Comparison::LessThan)), vec![0]);
    }

    #[test]
    fn test_comparison_names() {
        assert_eq!("gt".parse::<Comparison>().unwrap(), Comparison::GreaterThan);
        assert_eq!("lt".parse::<Comparison>().unwrap(), Comparison::LessThan);
        assert_eq!(Comparison::Equal.to_string(), "eq");
        assert!("ge".parse::<Comparison>().is_err());
    }

    #[test]
    fn test_rotation_player_and_fail_reason() {
        let mut a = shift(1, 0, 100, 1);
        a.rotation_period = 1_563_537_600;
        a.fail_reason = Some(Code(1));
        a.players[0].id = "aeda69d2070fafb6".to_string();
        let b = shift(2, 0, 100, 3);
        let source = vec![a, b];

        assert_eq!(ids(&by_rotation(&source, 1_563_537_600)), vec![1]);
        assert_eq!(ids(&with_player(&source, "aeda69d2070fafb6")), vec![1]);
        assert!(with_player(&source, "").is_empty());
        assert_eq!(ids(&by_fail_reason(&source, Code(1))), vec![1]);
    }

    #[test]
    fn test_composition() {
        let source = vec![
            shift(1, 0, 100, 3),
            shift(2, 1, 150, 3),
            shift(3, 0, 180, 1),
            shift(4, 1, 90, 0),
        ];

        let both = Filter::All(vec![Filter::Stage(Code(0)), Filter::hazard_percent(12.0, 20.0)]);
        assert_eq!(ids(&apply(&source, &both).unwrap()), vec![3]);

        let either = Filter::Any(vec![Filter::Stage(Code(0)), Filter::hazard_percent(12.0, 20.0)]);
        assert_eq!(ids(&apply(&source, &either).unwrap()), vec![1, 2, 3]);

        let not_stage = Filter::Stage(Code(0)).negate();
        assert_eq!(ids(&apply(&source, &not_stage).unwrap()), vec![2, 4]);

        assert_eq!(apply(&source, &Filter::All(vec![])).unwrap().len(), 4);
        assert!(apply(&source, &Filter::Any(vec![])).unwrap().is_empty());
    }

    #[test]
    fn test_chained_equals_combined() {
        let source: Vec<Shift> = (0..20)
            .map(|i| shift(i, (i % 3) as u16, (i as u32) * 10, (i % 4) as u8))
            .collect();

        let chained = by_hazard_level(&by_hazard_level(&source, 2.0, 15.0), 5.0, 10.0);
        let combined = by_hazard_level(&source, 5.0, 10.0);
        assert_eq!(chained, combined);

        let chained = by_clear_wave(&by_stage(&source, Code(1)), 1, Comparison::GreaterThan);
        let combined = apply(
            &source,
            &Filter::All(vec![
                Filter::Stage(Code(1)),
                Filter::ClearWave {
                    wave: 1,
                    comparison: Comparison::GreaterThan,
                },
            ]),
        )
        .unwrap();
        assert_eq!(chained, combined);
    }
}
