mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use commands::Context;
use salmon_core::{DataPaths, MatchMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (info unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("salmon=info,salmon_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let paths = DataPaths::new(&args.data, &args.catalogs);
    let mode = if args.prefix_match {
        MatchMode::Prefix
    } else {
        MatchMode::Exact
    };

    match args.command {
        Command::Stats { filters, json } => {
            let ctx = Context::load(&paths, mode)?;
            commands::stats::run(&ctx, &filters, json)
        }
        Command::Summary {
            stat,
            filters,
            json,
        } => {
            let ctx = Context::load(&paths, mode)?;
            commands::summary::run(&ctx, stat, &filters, json)
        }
        Command::Catalog { kind } => commands::catalog::run(&paths, mode, kind),
        Command::Show { statink_id, json } => {
            let ctx = Context::load(&paths, mode)?;
            commands::show::run(&ctx, statink_id, json)
        }
    }
}
