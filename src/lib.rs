//! # Skysweep
//!
//! Area-coverage route planning and mission dispatch for camera-equipped
//! survey drones.
//!
//! ## Architecture
//!
//! Skysweep is organized as a workspace:
//!
//! 1. **skysweep-core** - pure coverage-path planning: geometry, target
//!    areas, the three path strategies, and the configured planner
//! 2. **skysweep-dispatch** - in-memory mission queue and drone status
//!    registry
//! 3. **skysweep** - this binary crate: CLI front end and logging setup
//!
//! The core works in a flat-plane coordinate model: latitude/longitude-like
//! axes treated as Cartesian, with the target radius and vision radius in
//! the same units as the coordinates.

pub use skysweep_core::{
    CoverageArea, CoveragePlanner, PathStrategy, PlanError, PlanResult, PlannerConfig, Point,
    TargetCircle, WaypointSequence,
};

pub use skysweep_dispatch::{
    DispatchError, DispatchResult, DroneRegistry, DroneState, DroneStatus, Mission, MissionQueue,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with compact formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
