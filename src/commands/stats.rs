//! `campusnav stats` - dataset statistics

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use campusnav_core::campus::Campus;
use campusnav_core::error::Result;

pub fn handle_stats(cli: &Cli, dataset: &Path, start: Instant) -> Result<()> {
    let campus = Campus::load(dataset)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_dataset");

    let stats = campus.statistics();
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Human => {
            println!("Dataset Statistics:");
            println!("Number of Buildings: {}", stats.buildings);
            println!("Number of Paths Connecting Buildings: {}", stats.paths);
            println!("Total Walking Time: {}", stats.total_walking_time);
        }
    }
    Ok(())
}
