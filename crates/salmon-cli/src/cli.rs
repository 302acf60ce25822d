//! CLI argument definitions for salmon.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use salmon_core::{CatalogKind, Comparison, Stat};

#[derive(Parser)]
#[command(name = "salmon")]
#[command(about = "Salmon Run shift analyzer", version)]
pub struct Args {
    /// Shift export (CSV, first line is a header)
    #[arg(
        long,
        value_name = "FILE",
        env = "SALMON_DATA",
        default_value = "salmon.csv",
        global = true
    )]
    pub data: PathBuf,

    /// Directory holding the lookup tables (stages.txt, weapons.txt, ...)
    #[arg(
        long,
        value_name = "DIR",
        env = "SALMON_CATALOGS",
        default_value = ".",
        global = true
    )]
    pub catalogs: PathBuf,

    /// Match labels by prefix, ignoring their last character
    #[arg(long, global = true)]
    pub prefix_match: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show wave pass rates for the selected shifts
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize a statistic as mean (min, median, max)
    Summary {
        /// Statistic (hazard_level, clear_wave, golden_eggs, power_eggs, ...)
        stat: Stat,
        #[command(flatten)]
        filters: FilterArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the entries of a lookup table
    Catalog {
        /// Table (stages, fail_reasons, titles, events, water_levels, specials, bosses, weapons)
        kind: CatalogKind,
    },
    /// Show a single shift
    Show {
        /// stat.ink id of the shift
        statink_id: i32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Shift selection shared by `stats` and `summary`. All given options must hold.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Stage name
    #[arg(long)]
    pub stage: Option<String>,

    /// Special weapon name
    #[arg(long)]
    pub special: Option<String>,

    /// Weapon name
    #[arg(long)]
    pub weapon: Option<String>,

    /// Restrict --special and --weapon to one player slot (0-3)
    #[arg(long)]
    pub slot: Option<usize>,

    /// Known occurrence in any wave
    #[arg(long)]
    pub event: Option<String>,

    /// Tide in any wave
    #[arg(long)]
    pub tide: Option<String>,

    /// Fail reason
    #[arg(long)]
    pub fail_reason: Option<String>,

    /// Lowest hazard level in percent (inclusive)
    #[arg(long)]
    pub hazard_min: Option<f64>,

    /// Highest hazard level in percent (exclusive)
    #[arg(long)]
    pub hazard_max: Option<f64>,

    /// Number of cleared waves, compared with --clear-wave-cmp
    #[arg(long)]
    pub clear_wave: Option<u8>,

    /// How --clear-wave is compared (eq, gt, lt)
    #[arg(long, value_name = "CMP", default_value = "eq")]
    pub clear_wave_cmp: Comparison,

    /// Rotation period
    #[arg(long)]
    pub rotation: Option<i32>,

    /// SplatNet player id
    #[arg(long)]
    pub player: Option<String>,
}
