//! Cooperative mission data.

use std::collections::BTreeSet;

use serde::Serialize;

/// An AI-controlled enemy house declared by a cooperative map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoopHouseInfo {
    /// Side (country) index.
    pub side: i32,
    /// Colour index.
    pub color: i32,
    /// Starting location (waypoint) index.
    pub starting_location: i32,
}

impl CoopHouseInfo {
    pub const fn new(side: i32, color: i32, starting_location: i32) -> Self {
        Self {
            side,
            color,
            starting_location,
        }
    }
}

/// Cooperative information attached to maps flagged `IsCoopMission`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoopMapInfo {
    /// Side indices human players may not pick.
    pub disallowed_player_sides: BTreeSet<i32>,
    /// Colour indices human players may not pick.
    pub disallowed_player_colors: BTreeSet<i32>,
    /// Enemy houses in declared order.
    pub enemy_houses: Vec<CoopHouseInfo>,
}

impl CoopMapInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a side is closed to human players.
    pub fn is_side_disallowed(&self, side: i32) -> bool {
        self.disallowed_player_sides.contains(&side)
    }

    /// Check whether a colour is closed to human players.
    pub fn is_color_disallowed(&self, color: i32) -> bool {
        self.disallowed_player_colors.contains(&color)
    }

    /// Number of enemy houses.
    pub fn enemy_house_count(&self) -> usize {
        self.enemy_houses.len()
    }
}
