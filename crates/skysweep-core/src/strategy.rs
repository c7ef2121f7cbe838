//! Path strategy selection.
//!
//! The three strategies trade total flight distance against implementation
//! simplicity. All of them fully cover the target circle for a given vision
//! radius; the zig-zag sweep avoids the repeated center-return legs of the
//! radial patterns and is the production default.

use serde::{Deserialize, Serialize};

/// The algorithm used to turn a target circle into a waypoint sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathStrategy {
    /// Out-and-back "petal" pattern: visit each slice edge, return to
    /// center every time. Longest route, simplest construction.
    Radial,
    /// Petal pattern that rides the circumference between adjacent slice
    /// edges, halving the number of center-return legs.
    PairedRadial,
    /// Boustrophedon sweep across latitude bands spaced one vision radius
    /// apart; no center-return legs.
    ZigZag,
}

impl PathStrategy {
    /// Returns the human-readable name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            PathStrategy::Radial => "Radial",
            PathStrategy::PairedRadial => "Paired Radial",
            PathStrategy::ZigZag => "Zig-Zag",
        }
    }
}

impl Default for PathStrategy {
    fn default() -> Self {
        Self::ZigZag
    }
}

impl std::fmt::Display for PathStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PathStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "radial" | "petal" => Ok(PathStrategy::Radial),
            "paired-radial" | "paired" => Ok(PathStrategy::PairedRadial),
            "zig-zag" | "zigzag" => Ok(PathStrategy::ZigZag),
            _ => Err(format!(
                "unknown path strategy '{}' (expected: radial, paired-radial, zig-zag)",
                s
            )),
        }
    }
}
