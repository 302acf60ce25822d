//! Summary command implementation.

use anyhow::{Result, bail};
use salmon_core::{Stat, stat_summary};

use super::Context;
use crate::cli::FilterArgs;

/// Run the summary command
pub fn run(ctx: &Context, stat: Stat, filters: &FilterArgs, json: bool) -> Result<()> {
    let selected = ctx.select(filters)?;
    if selected.is_empty() {
        bail!("No shifts match the selected filters");
    }

    let summary = stat_summary(&selected, stat)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} over {} shifts", stat, summary.count);
        println!("  mean (min, median, max): {}", summary);
    }

    Ok(())
}
