//! Command dispatch logic for campusnav

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use campusnav_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Stats { dataset }) => commands::stats::handle_stats(cli, dataset, start),

        Some(Commands::Route {
            dataset,
            start: from,
            destination,
        }) => commands::route::handle_route(cli, dataset, from, destination, start),
    }
}

fn handle_no_command() -> Result<()> {
    println!("campusnav {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A campus shortest walking path CLI.");
    println!();
    println!("Run `campusnav --help` for usage information.");
    Ok(())
}
