use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use skysweep::{
    init_logging, CoveragePlanner, PathStrategy, PlannerConfig, TargetCircle, BUILD_DATE, VERSION,
};

/// Plan a coverage route for a circular search area.
#[derive(Debug, Parser)]
#[command(name = "skysweep", version, about)]
struct Cli {
    /// Latitude of the target circle center
    #[arg(long)]
    lat: f64,

    /// Longitude of the target circle center
    #[arg(long)]
    lon: f64,

    /// Radius of the target circle (same units as the coordinates)
    #[arg(long)]
    radius: f64,

    /// Vision radius of the drone camera footprint
    #[arg(long)]
    vision: f64,

    /// Path strategy: radial, paired-radial, or zig-zag
    #[arg(long)]
    strategy: Option<PathStrategy>,

    /// Planner configuration file (JSON); ignored when --strategy is given
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the waypoint JSON
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    /// Explicit flag wins, then the config file, then the built-in default.
    fn resolve_strategy(&self) -> anyhow::Result<PathStrategy> {
        if let Some(strategy) = self.strategy {
            return Ok(strategy);
        }
        if let Some(path) = &self.config {
            let config = PlannerConfig::load(path)
                .with_context(|| format!("loading planner config {}", path.display()))?;
            return Ok(config.strategy);
        }
        Ok(PathStrategy::default())
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    info!(version = VERSION, build = BUILD_DATE, "skysweep");

    let strategy = cli.resolve_strategy()?;
    let circle = TargetCircle::from_parts(cli.lat, cli.lon, cli.radius);
    let route = CoveragePlanner::new(strategy)
        .plan(&circle, cli.vision)
        .context("planning coverage route")?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&route)?
    } else {
        serde_json::to_string(&route)?
    };
    println!("{json}");

    Ok(())
}
