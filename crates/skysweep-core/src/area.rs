//! Target areas and the coverage-path builders that sweep them.
//!
//! A [`TargetCircle`] is sliced into angular arcs sized so that each arc's
//! outer edge is about one vision diameter across, then one of three path
//! strategies orders the slice boundaries (or latitude bands) into a single
//! flyable route. The [`CoverageArea`] trait is the seam future area shapes
//! (polygon, rectangle) implement without touching any caller.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlanError, PlanResult};
use crate::geometry::Point;
use crate::planner::CoveragePlanner;

/// An ordered list of waypoints; ordering is the flight path, not a set.
pub type WaypointSequence = Vec<Point>;

/// Upper bound on subdivisions per plan (slice angles or sweep bands).
///
/// A vision radius small enough to need more subdivisions than this would
/// produce an unflyable route (and, unchecked, an unbounded allocation),
/// so it is rejected the same way as a non-positive one.
const MAX_SUBDIVISIONS: usize = 1_000_000;

/// Capability contract for any area a drone can be asked to cover.
///
/// Implementors return the complete ordered waypoint sequence for the given
/// vision radius, or an error; partial sequences are never produced.
pub trait CoverageArea {
    /// Compute a waypoint sequence that fully covers this area.
    fn coverage_sequence(&self, vision: f64) -> PlanResult<WaypointSequence>;
}

/// A circular search area: center point plus radius, in the same planar
/// units as the vision radius.
///
/// The value is immutable once built; it is created per dispatch request
/// and discarded after its route is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetCircle {
    pub center: Point,
    pub radius: f64,
}

/// Reject a vision radius that cannot drive the slice computation.
///
/// A zero footprint makes the slice angle collapse to zero and the slice
/// count unbounded, so it is an error rather than an endless plan.
pub(crate) fn validate_vision(vision: f64) -> PlanResult<()> {
    if !vision.is_finite() || vision <= 0.0 {
        return Err(PlanError::InvalidVision { vision });
    }
    Ok(())
}

/// Convert a raw subdivision count to `usize`, rejecting counts that are
/// infinite or past [`MAX_SUBDIVISIONS`].
fn bounded_count(count: f64, vision: f64) -> PlanResult<usize> {
    if !count.is_finite() || count > MAX_SUBDIVISIONS as f64 {
        return Err(PlanError::InvalidVision { vision });
    }
    Ok(count as usize)
}

impl TargetCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Convenience constructor from raw coordinates.
    pub fn from_parts(lat: f64, lon: f64, radius: f64) -> Self {
        Self::new(Point::new(lat, lon), radius)
    }

    /// Check the radius invariant. Degenerate areas are rejected, never
    /// clamped.
    pub fn validate(&self) -> PlanResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlanError::InvalidArea {
                radius: self.radius,
            });
        }
        Ok(())
    }

    /// Divide one revolution into slice angles.
    ///
    /// The increment is `atan2(2 * vision, radius)`: the angle under which
    /// a full vision diameter is seen from the center at the rim distance.
    /// The count always rounds up, so the last slice may overlap the first
    /// but angular coverage is never short.
    ///
    /// A vision radius vanishingly small relative to the target radius
    /// drives the slice count toward infinity; anything past
    /// [`MAX_SUBDIVISIONS`] is rejected as [`PlanError::InvalidVision`]
    /// rather than allowed to run unbounded.
    pub fn slice_angles(&self, vision: f64) -> PlanResult<Vec<f64>> {
        self.validate()?;
        validate_vision(vision)?;

        let increment = (2.0 * vision).atan2(self.radius);
        let num_slices = bounded_count((2.0 * PI / increment).ceil(), vision)?;
        Ok((0..num_slices).map(|i| increment * i as f64).collect())
    }

    /// Radial "petal" route: out to each slice edge and straight back.
    ///
    /// Produces `2n + 1` waypoints for `n` slices, starting and ending at
    /// the center. Maximal total distance, minimal construction.
    pub fn radial_path(&self, vision: f64) -> PlanResult<WaypointSequence> {
        let angles = self.slice_angles(vision)?;
        let mut coords: WaypointSequence = vec![self.center];

        for theta in &angles {
            coords.push(self.center.project(*theta, self.radius));
            coords.push(self.center);
        }

        debug!(
            slices = angles.len(),
            waypoints = coords.len(),
            "built radial coverage path"
        );
        Ok(coords)
    }

    /// Paired-radial route: ride the rim between adjacent slice edges.
    ///
    /// Slice edges are consumed two at a time, with a single center return
    /// per pair (an odd trailing slice is flown alone). Halves the number
    /// of center legs relative to [`radial_path`](Self::radial_path).
    pub fn paired_radial_path(&self, vision: f64) -> PlanResult<WaypointSequence> {
        let angles = self.slice_angles(vision)?;
        let mut coords: WaypointSequence = vec![self.center];

        for pair in angles.chunks(2) {
            coords.push(self.center.project(pair[0], self.radius));
            if let Some(theta) = pair.get(1) {
                coords.push(self.center.project(*theta, self.radius));
            }
            coords.push(self.center);
        }

        debug!(
            slices = angles.len(),
            waypoints = coords.len(),
            "built paired-radial coverage path"
        );
        Ok(coords)
    }

    /// Boustrophedon sweep: cross the circle along latitude bands spaced
    /// one vision radius apart, bottom to top.
    ///
    /// Each interior band contributes its two rim intersections (+lon side
    /// first), so the route sweeps side to side with no center-return legs.
    pub fn zig_zag_path(&self, vision: f64) -> PlanResult<WaypointSequence> {
        self.validate()?;
        validate_vision(vision)?;

        let start_lat = self.center.lat - self.radius;
        let mut coords: WaypointSequence = vec![Point::new(start_lat, self.center.lon)];

        // Band 0 is the start point itself, so interior bands run 1..n.
        let num_lines = bounded_count(((self.radius * 2.0) / vision).ceil(), vision)?;
        for i in 1..num_lines {
            let line = start_lat + vision * i as f64;
            let half_width = self.half_width_at(line);
            coords.push(Point::new(line, self.center.lon + half_width));
            coords.push(Point::new(line, self.center.lon - half_width));
        }

        debug!(
            bands = num_lines.saturating_sub(1),
            waypoints = coords.len(),
            "built zig-zag coverage path"
        );
        Ok(coords)
    }

    /// Horizontal half-width of the circle at a given latitude line.
    ///
    /// Rounding can push the radicand a hair below zero when the line sits
    /// on the rim; that is numerical noise and is clamped, not an error.
    fn half_width_at(&self, latitude: f64) -> f64 {
        let vert_from_center = (self.center.lat - latitude).abs();
        let radicand = self.radius * self.radius - vert_from_center * vert_from_center;
        radicand.max(0.0).sqrt()
    }
}

impl CoverageArea for TargetCircle {
    /// Cover the circle with the configured default strategy.
    ///
    /// Callers that need a specific algorithm go through
    /// [`CoveragePlanner`]; this entry point exists so the active strategy
    /// stays a swappable policy rather than a hardcoded call site.
    fn coverage_sequence(&self, vision: f64) -> PlanResult<WaypointSequence> {
        CoveragePlanner::default().plan(self, vision)
    }
}
