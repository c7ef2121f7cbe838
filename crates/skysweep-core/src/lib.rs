//! # Skysweep Core
//!
//! Coverage-path planning for camera-equipped survey drones.
//! Converts a circular target area plus a circular sensing footprint
//! ("vision radius") into an ordered waypoint sequence that fully covers
//! the area.
//!
//! The crate is pure and synchronous: every operation is a deterministic
//! function of its inputs with no I/O, no shared state, and no locking, so
//! it can be called concurrently from any number of request handlers. The
//! queueing and registry plumbing around it lives in `skysweep-dispatch`.
//!
//! ## Components
//!
//! - **Geometry**: planar bearing/distance projection ([`Point`])
//! - **Areas**: the [`CoverageArea`] contract and its circle implementation
//!   ([`TargetCircle`])
//! - **Strategies**: radial, paired-radial, and zig-zag path construction
//!   ([`PathStrategy`])
//! - **Planner**: configured strategy dispatch ([`CoveragePlanner`])

pub mod area;
pub mod error;
pub mod geometry;
pub mod planner;
pub mod strategy;

pub use area::{CoverageArea, TargetCircle, WaypointSequence};
pub use error::{PlanError, PlanResult};
pub use geometry::Point;
pub use planner::{CoveragePlanner, PlannerConfig};
pub use strategy::PathStrategy;
