//! Core domain types for mapinfo.
//!
//! - `MapDescriptor` - one parsed multiplayer map
//! - `CoopMapInfo` / `CoopHouseInfo` - cooperative mission data
//! - `ForcedOptions` - forced game option overrides
//! - `MapRect`, `PreviewSize`, `StartingLocation` - geometry

mod coop;
mod descriptor;
mod forced;
mod geometry;

pub use coop::{CoopHouseInfo, CoopMapInfo};
pub use descriptor::{MapDescriptor, MapSource, MAX_PLAYERS};
pub use forced::{ForcedOptions, ForcedValue};
pub use geometry::{MapRect, PreviewSize, StartingLocation};
