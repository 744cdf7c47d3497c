//! `campusnav route` - shortest walking route between two buildings

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use campusnav_core::campus::Campus;
use campusnav_core::error::Result;

pub fn handle_route(
    cli: &Cli,
    dataset: &Path,
    from: &str,
    destination: &str,
    start: Instant,
) -> Result<()> {
    let campus = Campus::load(dataset)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_dataset");

    let route = campus.route(from, destination)?;
    let path = route.path()?;
    let segment_times = route.segment_times()?;
    let total = route.total_cost()?;
    tracing::debug!(elapsed = ?start.elapsed(), hops = segment_times.len(), "route_computed");

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "start": from,
                "destination": destination,
                "path": path,
                "segment_times": segment_times,
                "total_walking_time": total,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            println!("Shortest path from {} to {}:", from, destination);
            println!("    {}", path.join(" -> "));
            if !cli.quiet {
                let times: Vec<String> =
                    segment_times.iter().map(|t| t.to_string()).collect();
                println!("Segment walking times: {}", times.join(", "));
            }
            println!("Total walking time: {} seconds", total);
        }
    }
    Ok(())
}
