//! Ternary cell state.

use super::constants::{FREE, OCCUPIED, UNKNOWN};

/// Belief held by a single grid cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Unknown,
    Free,
    Occupied,
}

impl CellState {
    /// Occupancy probability: 0.5 unknown, 0.0 free, 1.0 occupied.
    pub fn probability(self) -> f64 {
        match self {
            Self::Unknown => 0.5,
            Self::Free => 0.0,
            Self::Occupied => 1.0,
        }
    }

    /// ROS `nav_msgs/OccupancyGrid` value (-1, 0 or 100).
    pub fn to_ros(self) -> i8 {
        match self {
            Self::Unknown => UNKNOWN,
            Self::Free => FREE,
            Self::Occupied => OCCUPIED,
        }
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}
