//! Pending mission queue.
//!
//! One planning request appends one mission; a later pickup request removes
//! one. Missions hold a complete waypoint sequence - the queue never stores
//! partial routes.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use skysweep_core::WaypointSequence;

use crate::error::{DispatchError, DispatchResult};

/// A planned route waiting for a drone to pick it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique mission identifier.
    pub id: Uuid,
    /// The ordered route the assigned drone must fly.
    pub waypoints: WaypointSequence,
}

impl Mission {
    pub fn new(waypoints: WaypointSequence) -> Self {
        Self {
            id: Uuid::new_v4(),
            waypoints,
        }
    }
}

/// Thread-safe queue of pending missions.
///
/// Pickup is FIFO by default ([`take`](Self::take)); [`take_latest`](Self::take_latest)
/// hands out the most recently planned mission instead. Cloning the queue
/// clones the handle, not the missions.
#[derive(Debug, Clone, Default)]
pub struct MissionQueue {
    missions: Arc<Mutex<VecDeque<Mission>>>,
}

impl MissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a planned route as a new mission and return its identifier.
    pub fn enqueue(&self, waypoints: WaypointSequence) -> Uuid {
        let mission = Mission::new(waypoints);
        let id = mission.id;
        let mut missions = self.missions.lock();
        missions.push_back(mission);
        info!(%id, pending = missions.len(), "mission queued");
        id
    }

    /// Remove and return the oldest pending mission.
    pub fn take(&self) -> DispatchResult<Mission> {
        let mut missions = self.missions.lock();
        let mission = missions.pop_front().ok_or(DispatchError::EmptyQueue)?;
        debug!(id = %mission.id, pending = missions.len(), "mission taken");
        Ok(mission)
    }

    /// Remove and return the most recently queued mission.
    pub fn take_latest(&self) -> DispatchResult<Mission> {
        let mut missions = self.missions.lock();
        let mission = missions.pop_back().ok_or(DispatchError::EmptyQueue)?;
        debug!(id = %mission.id, pending = missions.len(), "latest mission taken");
        Ok(mission)
    }

    /// Number of pending missions.
    pub fn len(&self) -> usize {
        self.missions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.lock().is_empty()
    }
}
