//! Stats command implementation.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use salmon_core::{CatalogKind, Shift, wave_percent, wave_percent_with_weapon};
use serde_json::json;

use super::Context;
use crate::cli::FilterArgs;

/// Run the stats command
pub fn run(ctx: &Context, filters: &FilterArgs, json: bool) -> Result<()> {
    let selected = ctx.select(filters)?;
    if selected.is_empty() {
        bail!(
            "No shifts match the selected filters ({} loaded)",
            ctx.store.len()
        );
    }

    let rates = wave_rates(&selected)?;
    let weapon_rate = match &filters.weapon {
        Some(weapon) => {
            let weapon = ctx.catalogs.resolve(CatalogKind::Weapons, weapon)?;
            Some(wave_percent_with_weapon(&selected, weapon, filters.slot)?)
        }
        None => None,
    };

    if json {
        let output = json!({
            "total": ctx.store.len(),
            "selected": selected.len(),
            "wave_1": rates[0],
            "wave_2": rates[1],
            "clear": rates[2],
            "weapon_waves": weapon_rate,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "Selected {} of {} shifts",
        selected.len().bold(),
        ctx.store.len()
    );
    for (wave, rate) in rates.iter().enumerate() {
        let label = if wave == 2 {
            "Clear ".to_string()
        } else {
            format!("Wave {}", wave + 1)
        };
        println!("  {} : {}", label, format_rate(*rate));
    }
    if let Some(rate) = weapon_rate {
        // Waves in which the weapon was held
        println!("  Weapon : {}", format_rate(rate));
    }

    Ok(())
}

/// Share of shifts that cleared waves 1, 2 and 3
fn wave_rates(shifts: &[Shift]) -> Result<[f64; 3]> {
    Ok([
        wave_percent(shifts, 1)?,
        wave_percent(shifts, 2)?,
        wave_percent(shifts, 3)?,
    ])
}

fn format_rate(rate: f64) -> String {
    let text = format!("{:6.2}%", rate * 100.0);
    if rate >= 0.75 {
        text.green().to_string()
    } else if rate >= 0.5 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(clear_wave: u8) -> Shift {
        Shift {
            clear_wave,
            ..Default::default()
        }
    }

    #[test]
    fn test_wave_rates() {
        let shifts = vec![shift(3), shift(1), shift(2), shift(0)];
        assert_eq!(wave_rates(&shifts).unwrap(), [0.75, 0.5, 0.25]);
    }

    #[test]
    fn test_wave_rates_empty() {
        assert!(wave_rates(&[]).is_err());
    }

    #[test]
    fn test_format_rate_contains_percent() {
        assert!(format_rate(0.5).contains("50.00%"));
        assert!(format_rate(1.0).contains("100.00%"));
    }
}
