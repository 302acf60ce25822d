//! Show command implementation.

use std::fmt::Write as _;

use anyhow::{Result, anyhow};
use owo_colors::OwoColorize;
use salmon_core::{CatalogKind, Catalogs, Code, Shift};

use super::Context;

/// Run the show command
pub fn run(ctx: &Context, statink_id: i32, json: bool) -> Result<()> {
    let shift = ctx
        .store
        .find_by_statink_id(statink_id)
        .ok_or_else(|| anyhow!("No shift with stat.ink id {}", statink_id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(shift)?);
    } else {
        print!("{}", format_shift(shift, &ctx.catalogs));
    }

    Ok(())
}

/// Multi-line description of a shift with labels resolved
fn format_shift(shift: &Shift, catalogs: &Catalogs) -> String {
    let mut output = String::new();
    let label = |kind, code| catalogs.label_of(kind, code);

    let start = shift
        .shift_start_time()
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    let _ = writeln!(
        output,
        "#{} {} ({:.1}%)",
        shift.statink_id,
        label(CatalogKind::Stages, shift.stage).bold(),
        shift.hazard_percent()
    );
    let _ = writeln!(output, "  Start  : {}", start);
    let result = if shift.is_clear() {
        "Clear".green().to_string()
    } else {
        format!(
            "Failed in wave {} ({})",
            shift.clear_wave + 1,
            label(CatalogKind::FailReasons, shift.fail_reason)
        )
        .red()
        .to_string()
    };
    let _ = writeln!(output, "  Result : {}", result);
    let _ = writeln!(
        output,
        "  Title  : {} {} -> {} {}",
        label(CatalogKind::Titles, shift.title_before.name),
        shift.title_before.rank,
        label(CatalogKind::Titles, shift.title_after.name),
        shift.title_after.rank
    );

    for (i, wave) in shift.played_waves().iter().enumerate() {
        let event = match label(CatalogKind::Events, wave.event) {
            "" => "-",
            name => name,
        };
        let _ = writeln!(
            output,
            "  Wave {} : {:<10} {:<15} {}/{}",
            i + 1,
            label(CatalogKind::WaterLevels, wave.water),
            event,
            wave.delivers,
            wave.quota
        );
    }

    for player in shift.present_players() {
        let weapons: Vec<&str> = player
            .weapons
            .iter()
            .map(|w| label(CatalogKind::Weapons, *w))
            .filter(|w| !w.is_empty())
            .collect();
        let _ = writeln!(
            output,
            "  {:<10} {:>3} golden {:>5} power  [{}] {}",
            player.name,
            player.golden_eggs,
            player.power_eggs,
            weapons.join(", "),
            label(CatalogKind::Specials, player.special)
        );
    }

    let _ = writeln!(output, "  Bosses :");
    for (i, count) in shift.boss_appearances.iter().enumerate() {
        let name = match label(CatalogKind::Bosses, Some(Code(i as u16))) {
            "" => format!("#{}", i + 1),
            name => name.to_string(),
        };
        let _ = writeln!(output, "    {:<15} {:>3}", name, count);
    }

    output
}
