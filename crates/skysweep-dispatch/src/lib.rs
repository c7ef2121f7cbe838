//! # Skysweep Dispatch
//!
//! In-process plumbing around the planning core: a queue of planned
//! missions waiting for pickup and a registry of last-known drone statuses.
//! Both are thread-safe handles over mutex-guarded state; the planning core
//! itself stays pure and lock-free.
//!
//! Typical flow: a request carrying a target circle is planned by
//! `skysweep-core`, the resulting route is enqueued as a [`Mission`], and a
//! later pickup request removes it for a drone whose status lives in the
//! [`DroneRegistry`].

pub mod error;
pub mod queue;
pub mod registry;

pub use error::{DispatchError, DispatchResult};
pub use queue::{Mission, MissionQueue};
pub use registry::{DroneRegistry, DroneState, DroneStatus};
