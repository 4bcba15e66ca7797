// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand range CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};

use handrange_core::Range;

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The range notation, e.g. "22+ AJs+ KQo AsKc".
    range: String,
    /// Print the hands with all their combos in the range.
    #[clap(long)]
    hands: bool,
    /// Print every combo in the range.
    #[clap(long)]
    combos: bool,
    /// Print the hands in a 13x13 grid.
    #[clap(long, short)]
    grid: bool,
    /// Draw borders around the grid cells.
    #[clap(long, requires = "grid")]
    border: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let range = cli
        .range
        .parse::<Range>()
        .with_context(|| format!("Cannot parse range \"{}\"", cli.range))?;

    info!("Parsed {} combos", range.len());
    debug!("Pieces {:?}", range.rep_pieces());

    let options = report::Options {
        hands: cli.hands,
        combos: cli.combos,
        grid: cli.grid,
        border: cli.border,
    };

    print!("{}", report::render(&range, &options)?);

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
