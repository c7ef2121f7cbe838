//! Strategy selection and planner configuration.
//!
//! The planner is a small policy object: it owns the active [`PathStrategy`]
//! and dispatches a target area to the matching path builder. Keeping the
//! strategy on a configured value rather than on the call sites means the
//! production default can change without silently changing caller behavior.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::area::{TargetCircle, WaypointSequence};
use crate::error::{PlanError, PlanResult};
use crate::strategy::PathStrategy;

/// Plans coverage routes using a configured path strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoveragePlanner {
    strategy: PathStrategy,
}

impl CoveragePlanner {
    /// Create a planner with an explicit strategy.
    pub fn new(strategy: PathStrategy) -> Self {
        Self { strategy }
    }

    /// Create a planner from a stored configuration.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.strategy)
    }

    /// The strategy this planner dispatches to.
    pub fn strategy(&self) -> PathStrategy {
        self.strategy
    }

    /// Compute the waypoint sequence covering `circle` with the active
    /// strategy.
    pub fn plan(&self, circle: &TargetCircle, vision: f64) -> PlanResult<WaypointSequence> {
        let waypoints = match self.strategy {
            PathStrategy::Radial => circle.radial_path(vision)?,
            PathStrategy::PairedRadial => circle.paired_radial_path(vision)?,
            PathStrategy::ZigZag => circle.zig_zag_path(vision)?,
        };
        info!(
            strategy = %self.strategy,
            radius = circle.radius,
            vision,
            waypoints = waypoints.len(),
            "planned coverage route"
        );
        Ok(waypoints)
    }
}

/// Persistent planner settings.
///
/// Stored as JSON so an operator can swap the production strategy without a
/// rebuild. Unknown future fields default rather than fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// The strategy used when callers do not request one explicitly.
    pub strategy: PathStrategy,
}

impl PlannerConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> PlanResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlanError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| PlanError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Write the configuration to a JSON file.
    pub fn save(&self, path: &Path) -> PlanResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlanError::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)
            .map_err(|e| PlanError::Config(format!("failed to write {}: {}", path.display(), e)))
    }
}
