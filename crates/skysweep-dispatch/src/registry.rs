//! Drone status registry.
//!
//! Tracks the last reported status of every known drone, keyed by
//! identifier. The registry is the shared-state boundary the pure planning
//! core deliberately does not have: all access goes through one mutex.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use skysweep_core::Point;

use crate::error::{DispatchError, DispatchResult};

/// Operational state a drone last reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DroneState {
    /// On the ground or holding, available for tasking.
    Idle,
    /// Currently flying a mission.
    Flying,
    /// No recent report; state cannot be trusted.
    Unknown,
}

impl Default for DroneState {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for DroneState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Flying => write!(f, "flying"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// The last known status of a single drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneStatus {
    /// Drone identifier.
    pub id: String,
    /// Reported operational state.
    pub state: DroneState,
    /// Battery charge, percent (0-100).
    pub battery: u8,
    /// When this status was recorded.
    pub last_update: DateTime<Utc>,
    /// Last reported position.
    pub last_seen: Point,
}

impl DroneStatus {
    /// Build a status stamped with the current time.
    ///
    /// Battery readings above 100 percent are clamped to 100.
    pub fn now(id: impl Into<String>, state: DroneState, battery: u8, last_seen: Point) -> Self {
        Self {
            id: id.into(),
            state,
            battery: battery.min(100),
            last_update: Utc::now(),
            last_seen,
        }
    }
}

/// Thread-safe registry of drone statuses keyed by identifier.
///
/// Cloning the registry clones the handle, not the data; all clones share
/// one underlying map.
#[derive(Debug, Clone, Default)]
pub struct DroneRegistry {
    drones: Arc<Mutex<HashMap<String, DroneStatus>>>,
}

impl DroneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the status for a drone.
    pub fn upsert(&self, status: DroneStatus) {
        debug!(id = %status.id, state = %status.state, battery = status.battery, "drone status updated");
        self.drones.lock().insert(status.id.clone(), status);
    }

    /// Fetch the status of one drone.
    pub fn get(&self, id: &str) -> DispatchResult<DroneStatus> {
        self.drones
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownDrone { id: id.to_string() })
    }

    /// Remove a drone from the registry, returning its final status.
    pub fn remove(&self, id: &str) -> DispatchResult<DroneStatus> {
        self.drones
            .lock()
            .remove(id)
            .ok_or_else(|| DispatchError::UnknownDrone { id: id.to_string() })
    }

    /// Snapshot of every known status, sorted by identifier.
    pub fn list(&self) -> Vec<DroneStatus> {
        let mut statuses: Vec<DroneStatus> = self.drones.lock().values().cloned().collect();
        statuses.sort_by(|a, b| a.id.cmp(&b.id));
        statuses
    }

    /// Number of registered drones.
    pub fn len(&self) -> usize {
        self.drones.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.drones.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(id: &str, state: DroneState, battery: u8) -> DroneStatus {
        DroneStatus::now(id, state, battery, Point::new(54.39, -0.937))
    }

    #[test]
    fn test_upsert_and_get() {
        let registry = DroneRegistry::new();
        registry.upsert(status("d1", DroneState::Idle, 80));

        let fetched = registry.get("d1").unwrap();
        assert_eq!(fetched.state, DroneState::Idle);
        assert_eq!(fetched.battery, 80);
    }

    #[test]
    fn test_upsert_replaces_existing_status() {
        let registry = DroneRegistry::new();
        registry.upsert(status("d1", DroneState::Idle, 80));
        registry.upsert(status("d1", DroneState::Flying, 62));

        assert_eq!(registry.len(), 1);
        let fetched = registry.get("d1").unwrap();
        assert_eq!(fetched.state, DroneState::Flying);
        assert_eq!(fetched.battery, 62);
    }

    #[test]
    fn test_battery_reading_is_clamped_to_100() {
        let garbled = status("d1", DroneState::Idle, 255);
        assert_eq!(garbled.battery, 100);
        assert_eq!(status("d2", DroneState::Idle, 100).battery, 100);
        assert_eq!(status("d3", DroneState::Idle, 37).battery, 37);
    }

    #[test]
    fn test_unknown_drone() {
        let registry = DroneRegistry::new();
        assert_eq!(
            registry.get("ghost"),
            Err(DispatchError::UnknownDrone {
                id: "ghost".to_string()
            })
        );
        assert_eq!(
            registry.remove("ghost"),
            Err(DispatchError::UnknownDrone {
                id: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_list_is_sorted_by_id() {
        let registry = DroneRegistry::new();
        registry.upsert(status("d2", DroneState::Idle, 50));
        registry.upsert(status("d1", DroneState::Flying, 90));
        registry.upsert(status("d3", DroneState::Unknown, 10));

        let ids: Vec<String> = registry.list().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn test_clones_share_state() {
        let registry = DroneRegistry::new();
        let handle = registry.clone();
        handle.upsert(status("d1", DroneState::Idle, 100));
        assert!(registry.get("d1").is_ok());
    }
}
