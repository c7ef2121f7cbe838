//! Error types for coverage planning.
//!
//! Planning is pure computation, so every failure here is a caller error:
//! a degenerate target area or a sensing footprint that cannot drive the
//! slice-angle computation. There are no transient failure modes and no
//! partial results - a plan either completes or returns one of these.

use thiserror::Error;

/// Errors that can occur while planning a coverage route.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The target area is degenerate (zero, negative, or non-finite radius).
    #[error("Invalid target area: radius {radius} must be positive and finite")]
    InvalidArea {
        /// The rejected radius value.
        radius: f64,
    },

    /// The vision radius cannot produce a bounded slice count.
    #[error("Invalid vision radius: {vision} must be positive and finite")]
    InvalidVision {
        /// The rejected vision radius value.
        vision: f64,
    },

    /// Planner configuration could not be loaded or stored.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;
